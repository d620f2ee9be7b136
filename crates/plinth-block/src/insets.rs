//! Four-sided spacing: margins, borders and padding.
//!
//! Each side is either an absolute length in surface units or a fraction of
//! the dimension being trimmed. Relative sides are always resolved against
//! the dimension handed to the operation (the pre-trim value), before the
//! two opposite sides are summed.
//!
//! ```text
//!            top
//!        ┌─────────┐
//!   left │ content │ right
//!        └─────────┘
//!          bottom
//! ```

use plinth_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::geom::Rect;

/// The length of one inset side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsetLength {
    /// A fixed number of surface units.
    Absolute(f64),
    /// A fraction of the trimmed dimension; `0.1` is 10%.
    Relative(f64),
}

impl InsetLength {
    /// Zero-width side.
    pub const ZERO: Self = Self::Absolute(0.0);

    /// The raw number, without its unit.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Absolute(v) | Self::Relative(v) => v,
        }
    }

    /// Resolve to surface units against `base`.
    #[must_use]
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Self::Absolute(v) => v,
            // 0 * ∞ is NaN; a zero fraction of anything is still nothing.
            Self::Relative(f) if f == 0.0 => 0.0,
            Self::Relative(f) => f * base,
        }
    }

    const fn fraction(self) -> f64 {
        match self {
            Self::Absolute(_) => 0.0,
            Self::Relative(f) => f,
        }
    }

    fn validated(self, what: &'static str) -> LayoutResult<Self> {
        let value = self.value();
        if value.is_finite() && value >= 0.0 {
            Ok(self)
        } else {
            Err(LayoutError::InvalidArgument { what, value })
        }
    }
}

/// Spacing around the four sides of a rectangle.
///
/// Insets are immutable values. Blocks replace them wholesale through their
/// setters; [`Insets::ZERO`] is the explicit "no spacing" value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InsetsRepr", into = "InsetsRepr")]
pub struct Insets {
    top: InsetLength,
    left: InsetLength,
    bottom: InsetLength,
    right: InsetLength,
}

#[derive(Serialize, Deserialize)]
struct InsetsRepr {
    top: InsetLength,
    left: InsetLength,
    bottom: InsetLength,
    right: InsetLength,
}

impl TryFrom<InsetsRepr> for Insets {
    type Error = LayoutError;

    fn try_from(repr: InsetsRepr) -> LayoutResult<Self> {
        Self::new(repr.top, repr.left, repr.bottom, repr.right)
    }
}

impl From<Insets> for InsetsRepr {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.top,
            left: insets.left,
            bottom: insets.bottom,
            right: insets.right,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Insets {
    /// No spacing on any side.
    pub const ZERO: Self = Self {
        top: InsetLength::ZERO,
        left: InsetLength::ZERO,
        bottom: InsetLength::ZERO,
        right: InsetLength::ZERO,
    };

    /// Create insets from four sides, in top/left/bottom/right order.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any side is negative, NaN or infinite.
    pub fn new(
        top: InsetLength,
        left: InsetLength,
        bottom: InsetLength,
        right: InsetLength,
    ) -> LayoutResult<Self> {
        Ok(Self {
            top: top.validated("top inset")?,
            left: left.validated("left inset")?,
            bottom: bottom.validated("bottom inset")?,
            right: right.validated("right inset")?,
        })
    }

    /// Insets with every side in surface units.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any side is negative, NaN or infinite.
    pub fn absolute(top: f64, left: f64, bottom: f64, right: f64) -> LayoutResult<Self> {
        Self::new(
            InsetLength::Absolute(top),
            InsetLength::Absolute(left),
            InsetLength::Absolute(bottom),
            InsetLength::Absolute(right),
        )
    }

    /// Insets with every side a fraction of the trimmed dimension.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any side is negative, NaN or infinite.
    pub fn relative(top: f64, left: f64, bottom: f64, right: f64) -> LayoutResult<Self> {
        Self::new(
            InsetLength::Relative(top),
            InsetLength::Relative(left),
            InsetLength::Relative(bottom),
            InsetLength::Relative(right),
        )
    }

    /// The same absolute length on all four sides.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is negative, NaN or infinite.
    pub fn uniform(value: f64) -> LayoutResult<Self> {
        Self::absolute(value, value, value, value)
    }

    /// Top side.
    #[must_use]
    pub const fn top(&self) -> InsetLength {
        self.top
    }

    /// Left side.
    #[must_use]
    pub const fn left(&self) -> InsetLength {
        self.left
    }

    /// Bottom side.
    #[must_use]
    pub const fn bottom(&self) -> InsetLength {
        self.bottom
    }

    /// Right side.
    #[must_use]
    pub const fn right(&self) -> InsetLength {
        self.right
    }

    /// Whether every side is zero, whatever its unit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|side| side.value() == 0.0)
    }

    /// Top inset in surface units for a rectangle of the given height.
    #[must_use]
    pub fn calculate_top_inset(&self, height: f64) -> f64 {
        self.top.resolve(height)
    }

    /// Bottom inset in surface units for a rectangle of the given height.
    #[must_use]
    pub fn calculate_bottom_inset(&self, height: f64) -> f64 {
        self.bottom.resolve(height)
    }

    /// Left inset in surface units for a rectangle of the given width.
    #[must_use]
    pub fn calculate_left_inset(&self, width: f64) -> f64 {
        self.left.resolve(width)
    }

    /// Right inset in surface units for a rectangle of the given width.
    #[must_use]
    pub fn calculate_right_inset(&self, width: f64) -> f64 {
        self.right.resolve(width)
    }

    /// The width left for content once the left and right insets are
    /// removed from `width`. Never negative; an infinite width stays
    /// infinite.
    #[must_use]
    pub fn trim_width(&self, width: f64) -> f64 {
        if width.is_infinite() {
            return width;
        }
        if self.left.fraction() + self.right.fraction() > 1.0 {
            warn_once(
                "insets",
                "relative left and right insets exceed 100% of the width; content width collapses to zero",
            );
        }
        let left = self.left.resolve(width);
        let right = self.right.resolve(width);
        (width - left - right).max(0.0)
    }

    /// The height left for content once the top and bottom insets are
    /// removed from `height`. Never negative; an infinite height stays
    /// infinite.
    #[must_use]
    pub fn trim_height(&self, height: f64) -> f64 {
        if height.is_infinite() {
            return height;
        }
        if self.top.fraction() + self.bottom.fraction() > 1.0 {
            warn_once(
                "insets",
                "relative top and bottom insets exceed 100% of the height; content height collapses to zero",
            );
        }
        let top = self.top.resolve(height);
        let bottom = self.bottom.resolve(height);
        (height - top - bottom).max(0.0)
    }

    /// `width` plus the left and right insets, relative sides resolved
    /// against `width`.
    #[must_use]
    pub fn extend_width(&self, width: f64) -> f64 {
        if width.is_infinite() {
            return width;
        }
        width + self.left.resolve(width) + self.right.resolve(width)
    }

    /// `height` plus the top and bottom insets, relative sides resolved
    /// against `height`.
    #[must_use]
    pub fn extend_height(&self, height: f64) -> f64 {
        if height.is_infinite() {
            return height;
        }
        height + self.top.resolve(height) + self.bottom.resolve(height)
    }

    /// Shrink `rect` in place: the origin moves inwards by the left and top
    /// insets and the size loses both opposite sides, clamped at zero.
    pub fn trim(&self, rect: &mut Rect) {
        let left = self.left.resolve(rect.width);
        let right = self.right.resolve(rect.width);
        let top = self.top.resolve(rect.height);
        let bottom = self.bottom.resolve(rect.height);
        rect.x += left;
        rect.y += top;
        rect.width = (rect.width - left - right).max(0.0);
        rect.height = (rect.height - top - bottom).max(0.0);
    }

    /// A trimmed copy of `rect`.
    #[must_use]
    pub fn create_inset_rectangle(&self, rect: &Rect) -> Rect {
        let mut inner = *rect;
        self.trim(&mut inner);
        inner
    }

    /// `rect` grown outwards by the insets; relative sides resolve against
    /// `rect`'s own size.
    #[must_use]
    pub fn create_outset_rectangle(&self, rect: &Rect) -> Rect {
        let left = self.left.resolve(rect.width);
        let top = self.top.resolve(rect.height);
        Rect::new(
            rect.x - left,
            rect.y - top,
            self.extend_width(rect.width),
            self.extend_height(rect.height),
        )
    }
}
