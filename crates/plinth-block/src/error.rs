//! Errors raised by the layout core.
//!
//! Every failure is a caller precondition violation caught at the boundary
//! where the bad value enters: value constructors, block setters, and the
//! output of a content sizer. Arithmetic past those checks is total.

use thiserror::Error;

/// Errors produced while building layout values or arranging a block.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// A required value was missing, negative, NaN or infinite where a
    /// concrete finite length is mandatory.
    #[error("invalid {what}: {value}")]
    InvalidArgument {
        /// Name of the offending input, e.g. `"fixed width"`.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A range whose lower bound exceeds its upper bound.
    #[error("inconsistent range: lower bound {lower} is greater than upper bound {upper}")]
    InconsistentRange {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// A content sizer returned a negative or non-finite size.
    #[error("content sizer returned an invalid size {width} x {height}")]
    InvalidContentSize {
        /// Reported content width.
        width: f64,
        /// Reported content height.
        height: f64,
    },
}

/// Result alias used throughout the layout core.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Accept `value` when it is a finite, nonnegative length.
pub(crate) fn nonnegative(what: &'static str, value: f64) -> LayoutResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidArgument { what, value })
    }
}
