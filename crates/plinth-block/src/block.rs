//! Blocks and the arrange algorithm.
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │                margin                 │
//! │   ┌───────────────────────────────┐   │
//! │   │            border             │   │
//! │   │   ┌───────────────────────┐   │   │
//! │   │   │        padding        │   │   │
//! │   │   │   ┌───────────────┐   │   │   │
//! │ m │ b │ p │    CONTENT    │ p │ b │ m │
//! │   │   │   └───────────────┘   │   │   │
//! │   │   │                       │   │   │
//! │   │   └───────────────────────┘   │   │
//! │   │                               │   │
//! │   └───────────────────────────────┘   │
//! │                                       │
//! └───────────────────────────────────────┘
//! ```
//!
//! Arranging a block narrows the outer constraint inwards through margin,
//! border and padding (in that order), asks the content for its natural size
//! under what is left, and grows the answer back outwards through padding,
//! border and margin. The grown size is finally resolved against the outer
//! constraint, so a fixed outer axis always wins.
//!
//! Sizing and positioning are separate: `arrange` only produces a size.
//! Callers place the block afterwards with [`Block::set_bounds`].

#[cfg(feature = "layout-trace")]
use std::cell::Cell;
use std::fmt;

use crate::constraint::Constraint;
use crate::content::{ContentSizer, RenderingSurface};
use crate::error::{LayoutError, LayoutResult, nonnegative};
use crate::geom::{Rect, Size};
use crate::insets::Insets;

#[cfg(feature = "layout-trace")]
thread_local! {
    static ARRANGE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Tracks how deeply nested the block currently being measured is.
#[cfg(feature = "layout-trace")]
struct DepthGuard(usize);

#[cfg(feature = "layout-trace")]
impl DepthGuard {
    fn enter() -> Self {
        Self(ARRANGE_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        }))
    }
}

#[cfg(feature = "layout-trace")]
impl Drop for DepthGuard {
    fn drop(&mut self) {
        ARRANGE_DEPTH.with(|d| d.set(d.get() - 1));
    }
}

/// A rectangular layout unit: spacing, a declared size, optional content,
/// and the results of the last layout pass.
///
/// [`Block::width`] and [`Block::height`] always return the declared input;
/// the size produced by the last layout pass is [`Block::arranged_size`].
///
/// A block tree is arranged through `&mut` access, so a single tree can never
/// be laid out from two threads at once. Disjoint trees are independent.
pub struct Block {
    id: Option<String>,
    margin: Insets,
    border: Insets,
    padding: Insets,
    width: f64,
    height: f64,
    bounds: Rect,
    arranged: Option<Size>,
    content: Option<Box<dyn ContentSizer>>,
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("id", &self.id)
            .field("margin", &self.margin)
            .field("border", &self.border)
            .field("padding", &self.padding)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bounds", &self.bounds)
            .field("arranged", &self.arranged)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

impl Block {
    /// An empty block: no spacing, zero declared size, no content.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id: None,
            margin: Insets::ZERO,
            border: Insets::ZERO,
            padding: Insets::ZERO,
            width: 0.0,
            height: 0.0,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            arranged: None,
            content: None,
        }
    }

    /// A block whose interior is sized by `content`.
    #[must_use]
    pub fn with_content(content: impl ContentSizer + 'static) -> Self {
        let mut block = Self::new();
        block.set_content(content);
        block
    }

    /// Identifier, if one was assigned.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assign an identifier, used in diagnostics.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Outermost spacing.
    #[must_use]
    pub const fn margin(&self) -> Insets {
        self.margin
    }

    /// Replace the margin.
    pub const fn set_margin(&mut self, margin: Insets) {
        self.margin = margin;
    }

    /// Space taken by the block's frame, between margin and padding.
    #[must_use]
    pub const fn border(&self) -> Insets {
        self.border
    }

    /// Replace the border insets.
    pub const fn set_border(&mut self, border: Insets) {
        self.border = border;
    }

    /// Innermost spacing.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Replace the padding.
    pub const fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Declared width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Set the declared width, the natural width of a block without content.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `width` is negative or non-finite; the block is
    /// left unchanged.
    pub fn set_width(&mut self, width: f64) -> LayoutResult<()> {
        self.width = nonnegative("block width", width)?;
        Ok(())
    }

    /// Declared height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Set the declared height, the natural height of a block without
    /// content.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `height` is negative or non-finite; the block is
    /// left unchanged.
    pub fn set_height(&mut self, height: f64) -> LayoutResult<()> {
        self.height = nonnegative("block height", height)?;
        Ok(())
    }

    /// Position and size assigned by the caller after arrangement.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Place the block. Bounds are never read by `arrange`.
    pub const fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Size produced by the most recent `arrange`, if any.
    #[must_use]
    pub const fn arranged_size(&self) -> Option<Size> {
        self.arranged
    }

    /// Whether a content sizer is attached.
    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Attach the content that sizes the block's interior.
    pub fn set_content(&mut self, content: impl ContentSizer + 'static) {
        self.content = Some(Box::new(content));
    }

    /// Detach the content; the block falls back to its declared size.
    pub fn clear_content(&mut self) {
        self.content = None;
    }

    /// `width` with margin, border and padding removed, outermost first.
    #[must_use]
    pub fn trim_to_content_width(&self, width: f64) -> f64 {
        let width = self.margin.trim_width(width);
        let width = self.border.trim_width(width);
        self.padding.trim_width(width)
    }

    /// `height` with margin, border and padding removed, outermost first.
    #[must_use]
    pub fn trim_to_content_height(&self, height: f64) -> f64 {
        let height = self.margin.trim_height(height);
        let height = self.border.trim_height(height);
        self.padding.trim_height(height)
    }

    /// Block width needed around content `content_width` wide: padding,
    /// border, then margin are added, innermost first.
    #[must_use]
    pub fn calculate_total_width(&self, content_width: f64) -> f64 {
        let width = self.padding.extend_width(content_width);
        let width = self.border.extend_width(width);
        self.margin.extend_width(width)
    }

    /// Block height needed around content `content_height` high: padding,
    /// border, then margin are added, innermost first.
    #[must_use]
    pub fn calculate_total_height(&self, content_height: f64) -> f64 {
        let height = self.padding.extend_height(content_height);
        let height = self.border.extend_height(height);
        self.margin.extend_height(height)
    }

    /// Narrow `constraint` into the constraint the content must meet.
    #[must_use]
    pub fn to_content_constraint(&self, constraint: &Constraint) -> Constraint {
        constraint
            .trim(&self.margin)
            .trim(&self.border)
            .trim(&self.padding)
    }

    /// Remove the margin from `area`, leaving the border box.
    pub fn trim_margin(&self, area: &mut Rect) {
        self.margin.trim(area);
    }

    /// Remove the border from `area`, leaving the padding box.
    pub fn trim_border(&self, area: &mut Rect) {
        self.border.trim(area);
    }

    /// Remove the padding from `area`, leaving the content box.
    pub fn trim_padding(&self, area: &mut Rect) {
        self.padding.trim(area);
    }

    /// The content box inside `area`, typically the block's bounds.
    #[must_use]
    pub fn content_area(&self, area: Rect) -> Rect {
        let mut area = area;
        self.trim_margin(&mut area);
        self.trim_border(&mut area);
        self.trim_padding(&mut area);
        area
    }

    /// Compute the block's size under `constraint` without recording it.
    ///
    /// A block without content is a leaf of its declared size: returned
    /// as-is when unconstrained, otherwise resolved against `constraint`.
    ///
    /// # Errors
    ///
    /// `InvalidContentSize` if the content sizer (or anything nested inside
    /// it) reports a negative or non-finite size.
    pub fn measure(
        &self,
        surface: &dyn RenderingSurface,
        constraint: &Constraint,
    ) -> LayoutResult<Size> {
        #[cfg(feature = "layout-trace")]
        let depth = DepthGuard::enter();
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[ARRANGE] depth={} block={} outer=({constraint})",
            depth.0,
            self.id.as_deref().unwrap_or("<anonymous>")
        );

        let declared = Size::new(self.width, self.height);
        let Some(content) = &self.content else {
            if constraint.is_unconstrained() {
                return Ok(declared);
            }
            return Ok(constraint.calculate_constrained_size(declared));
        };

        let content_constraint = self.to_content_constraint(constraint);
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[ARRANGE] depth={} content=({content_constraint})",
            depth.0
        );

        let content_size = content.size(surface, &content_constraint)?;
        if !content_size.is_valid() {
            return Err(LayoutError::InvalidContentSize {
                width: content_size.width,
                height: content_size.height,
            });
        }

        let total = Size::new(
            self.calculate_total_width(content_size.width),
            self.calculate_total_height(content_size.height),
        );
        let size = constraint.calculate_constrained_size(total);
        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[ARRANGE] depth={} content_size={}x{} total={}x{} final={}x{}",
            depth.0,
            content_size.width,
            content_size.height,
            total.width,
            total.height,
            size.width,
            size.height
        );
        Ok(size)
    }

    /// Size the block under `constraint` and record the result as its
    /// arranged size.
    ///
    /// # Errors
    ///
    /// As [`Block::measure`]. On error the block is left untouched.
    pub fn arrange(
        &mut self,
        surface: &dyn RenderingSurface,
        constraint: &Constraint,
    ) -> LayoutResult<Size> {
        let size = self.measure(surface, constraint)?;
        self.arranged = Some(size);
        Ok(size)
    }
}

impl ContentSizer for Block {
    fn size(&self, surface: &dyn RenderingSurface, constraint: &Constraint) -> LayoutResult<Size> {
        self.measure(surface, constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ApproximateSurface, FixedContent};

    fn spaced_block() -> Block {
        let mut block = Block::with_content(FixedContent::new(100.0, 50.0).unwrap());
        block.set_margin(Insets::uniform(5.0).unwrap());
        block.set_border(Insets::uniform(2.0).unwrap());
        block.set_padding(Insets::uniform(3.0).unwrap());
        block
    }

    #[test]
    fn test_new_block_is_empty() {
        let block = Block::new();
        assert_eq!(block.margin(), Insets::ZERO);
        assert_eq!(block.width(), 0.0);
        assert!(!block.has_content());
        assert_eq!(block.arranged_size(), None);
    }

    #[test]
    fn test_rejected_width_leaves_block_unchanged() {
        let mut block = Block::new();
        block.set_width(40.0).unwrap();
        assert!(block.set_width(-1.0).is_err());
        assert!(block.set_height(f64::NAN).is_err());
        assert_eq!(block.width(), 40.0);
        assert_eq!(block.height(), 0.0);
    }

    #[test]
    fn test_trim_and_total_are_inverse_for_absolute_insets() {
        let block = spaced_block();
        assert_eq!(block.trim_to_content_width(120.0), 100.0);
        assert_eq!(block.trim_to_content_height(70.0), 50.0);
        assert_eq!(block.calculate_total_width(100.0), 120.0);
        assert_eq!(block.calculate_total_height(50.0), 70.0);
    }

    #[test]
    fn test_content_area() {
        let block = spaced_block();
        let area = block.content_area(Rect::new(0.0, 0.0, 120.0, 70.0));
        assert_eq!(area, Rect::new(10.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn test_measure_does_not_record() {
        let block = spaced_block();
        let size = block
            .measure(&ApproximateSurface, &Constraint::UNCONSTRAINED)
            .unwrap();
        assert_eq!(size, Size::new(120.0, 70.0));
        assert_eq!(block.arranged_size(), None);
    }

    #[test]
    fn test_debug_hides_content() {
        let text = format!("{:?}", spaced_block());
        assert!(text.contains("has_content: true"));
    }
}
