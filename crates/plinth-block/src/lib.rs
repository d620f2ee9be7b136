//! Constraint-based block layout for chart compositions.
//!
//! Every visual unit of a chart (title, legend, plot area) is a [`Block`]:
//! a rectangle with a margin, a border and padding around some content. This
//! crate decides how big each block is.
//!
//! # Scope
//!
//! - **Insets** - four-sided spacing, absolute or relative per side
//! - **Range** - inclusive intervals with an optionally infinite upper bound
//! - **Constraint** - per-axis sizing modes: none, fixed, or ranged
//! - **Content sizing** - the [`ContentSizer`] seam plus text, fixed and
//!   empty leaf content
//! - **Block arrangement** - narrowing a constraint through the spacing,
//!   sizing the content, and growing the result back out
//!
//! # Not Implemented
//!
//! - Arranging several children inside one container (flow, column, border)
//! - Drawing
//!
//! # Example
//!
//! ```
//! use plinth_block::{ApproximateSurface, Block, Constraint, FixedContent, Insets, Size};
//!
//! let mut block = Block::with_content(FixedContent::new(100.0, 50.0)?);
//! block.set_margin(Insets::uniform(5.0)?);
//! block.set_padding(Insets::uniform(3.0)?);
//!
//! let size = block.arrange(&ApproximateSurface, &Constraint::UNCONSTRAINED)?;
//! assert_eq!(size, Size::new(116.0, 66.0));
//! # Ok::<(), plinth_block::LayoutError>(())
//! ```

pub mod block;
pub mod constraint;
pub mod content;
pub mod error;
pub mod geom;
pub mod insets;
pub mod range;

// Re-exports for convenience
pub use block::Block;
pub use constraint::{AxisConstraint, Constraint};
pub use content::{
    ApproximateSurface, ContentSizer, EmptyContent, FixedContent, LabelContent, RenderingSurface,
};
pub use error::{LayoutError, LayoutResult};
pub use geom::{Rect, Size};
pub use insets::{InsetLength, Insets};
pub use range::Range;
