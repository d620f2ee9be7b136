//! What sits inside a block, and the surface it is measured against.
//!
//! A block never knows the concrete type of its content. It only asks a
//! [`ContentSizer`] for a natural size under a content-level constraint,
//! passing along the [`RenderingSurface`] so that text can be measured.

use crate::constraint::Constraint;
use crate::error::{LayoutResult, nonnegative};
use crate::geom::Size;

/// Text metrics offered by the surface a chart will be drawn on.
///
/// The layout core only measures; it never issues drawing calls.
pub trait RenderingSurface {
    /// Advance width of `text` set at `font_size`.
    fn text_width(&self, text: &str, font_size: f64) -> f64;

    /// Distance between consecutive baselines at `font_size`.
    fn line_height(&self, font_size: f64) -> f64;
}

/// Surface metrics from fixed ratios of the font size.
///
/// Without font data, the average advance of Latin glyphs in a proportional
/// font is taken as 0.6 of the font size and a line as 1.2 of it. Used for
/// headless layout and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateSurface;

impl RenderingSurface for ApproximateSurface {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        const CHAR_WIDTH_RATIO: f64 = 0.6;
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        f64::from(chars) * font_size * CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font_size: f64) -> f64 {
        const LINE_HEIGHT_RATIO: f64 = 1.2;
        font_size * LINE_HEIGHT_RATIO
    }
}

/// Anything that can report its natural size given a content constraint.
///
/// Implementations must be deterministic for a given constraint and must
/// return a finite, nonnegative size. They may ignore the constraint; the
/// block resolves the final size against its own outer constraint.
pub trait ContentSizer {
    /// Natural size of the content under `constraint`.
    ///
    /// # Errors
    ///
    /// Nested content may fail to size; leaf content never does.
    fn size(&self, surface: &dyn RenderingSurface, constraint: &Constraint)
    -> LayoutResult<Size>;
}

/// Content with no natural size that fills whatever it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContent;

impl ContentSizer for EmptyContent {
    fn size(&self, _: &dyn RenderingSurface, constraint: &Constraint) -> LayoutResult<Size> {
        Ok(constraint.calculate_constrained_size(Size::ZERO))
    }
}

/// Content of a constant natural size, such as an image or a legend swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContent {
    size: Size,
}

impl FixedContent {
    /// Content that always wants `width` x `height`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either extent is negative or non-finite.
    pub fn new(width: f64, height: f64) -> LayoutResult<Self> {
        Ok(Self {
            size: Size::new(
                nonnegative("content width", width)?,
                nonnegative("content height", height)?,
            ),
        })
    }
}

impl ContentSizer for FixedContent {
    fn size(&self, _: &dyn RenderingSurface, _: &Constraint) -> LayoutResult<Size> {
        Ok(self.size)
    }
}

/// A run of text, such as a chart title or a legend item label.
///
/// When the content width is bounded and the text does not fit on one line,
/// it wraps greedily at whitespace. A single word wider than the bound keeps
/// its own line and overflows.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelContent {
    text: String,
    font_size: f64,
}

impl LabelContent {
    /// A label of `text` set at `font_size`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `font_size` is negative or non-finite.
    pub fn new(text: impl Into<String>, font_size: f64) -> LayoutResult<Self> {
        Ok(Self {
            text: text.into(),
            font_size: nonnegative("font size", font_size)?,
        })
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font size.
    #[must_use]
    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Break the text into lines no wider than `max_width`, when given.
    #[must_use]
    pub fn lines(&self, surface: &dyn RenderingSurface, max_width: Option<f64>) -> Vec<String> {
        let Some(max_width) = max_width else {
            return vec![self.text.clone()];
        };
        if surface.text_width(&self.text, self.font_size) <= max_width {
            return vec![self.text.clone()];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        for word in self.text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if surface.text_width(&candidate, self.font_size) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl ContentSizer for LabelContent {
    fn size(&self, surface: &dyn RenderingSurface, constraint: &Constraint) -> LayoutResult<Size> {
        if self.text.is_empty() {
            return Ok(Size::ZERO);
        }
        let lines = self.lines(surface, constraint.width().max_extent());
        let width = lines
            .iter()
            .map(|line| surface.text_width(line, self.font_size))
            .fold(0.0, f64::max);
        let rows = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let height = f64::from(rows) * surface.line_height(self.font_size);
        Ok(Size::new(width, height))
    }
}
