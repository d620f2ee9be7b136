//! Inclusive numeric intervals.
//!
//! A [`Range`] bounds one axis of a [`Constraint`](crate::Constraint). The
//! upper bound may be `+∞`, which is how "at least this big" is spelled.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult, nonnegative};

/// An inclusive interval `[lower, upper]` with `lower <= upper`.
///
/// The lower bound is always finite. Every constructor and every operation
/// that builds a new range checks both rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    lower: f64,
    upper: f64,
}

/// Wire form: JSON has no infinity, so an absent `upper` means unbounded.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    lower: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upper: Option<f64>,
}

impl TryFrom<RangeRepr> for Range {
    type Error = LayoutError;

    fn try_from(repr: RangeRepr) -> LayoutResult<Self> {
        Self::new(repr.lower, repr.upper.unwrap_or(f64::INFINITY))
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        Self {
            lower: range.lower,
            upper: range.is_bounded().then_some(range.upper),
        }
    }
}

impl Default for Range {
    /// The degenerate range `[0, 0]`.
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 0.0,
        }
    }
}

impl Range {
    /// Create the range `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `lower` is NaN or infinite, or `upper` is NaN;
    /// `InconsistentRange` if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> LayoutResult<Self> {
        if !lower.is_finite() {
            return Err(LayoutError::InvalidArgument {
                what: "range lower bound",
                value: lower,
            });
        }
        if upper.is_nan() {
            return Err(LayoutError::InvalidArgument {
                what: "range upper bound",
                value: upper,
            });
        }
        if lower > upper {
            return Err(LayoutError::InconsistentRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The half-open range `[lower, +∞)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `lower` is NaN or infinite.
    pub fn at_least(lower: f64) -> LayoutResult<Self> {
        Self::new(lower, f64::INFINITY)
    }

    /// Lower bound, always finite.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound, possibly `+∞`.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether the upper bound is finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.upper.is_finite()
    }

    /// `upper - lower`; `+∞` for an unbounded range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// The midpoint; `+∞` for an unbounded range. Never NaN, since the lower
    /// bound is finite.
    #[must_use]
    pub fn central_value(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Whether `value` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether the two ranges share at least one value.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Project `value` onto the nearest point inside the range.
    ///
    /// `value` must not be NaN; callers validate lengths before they reach
    /// the layout arithmetic.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        debug_assert!(!value.is_nan(), "Range::clamp called with NaN");
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }

    /// The smallest range containing both inputs. An absent input is the
    /// identity.
    #[must_use]
    pub fn combine(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (None, r) | (r, None) => r,
            (Some(a), Some(b)) => Some(Self {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            }),
        }
    }

    /// Grow `range` just enough to contain `value`; an absent range becomes
    /// `[value, value]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is NaN or infinite.
    pub fn expand_to_include(range: Option<Self>, value: f64) -> LayoutResult<Self> {
        if !value.is_finite() {
            return Err(LayoutError::InvalidArgument {
                what: "range value",
                value,
            });
        }
        Ok(match range {
            None => Self {
                lower: value,
                upper: value,
            },
            Some(r) => Self {
                lower: r.lower.min(value),
                upper: r.upper.max(value),
            },
        })
    }

    /// Move both bounds by `delta`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `delta` is NaN or infinite, or if the shifted
    /// lower bound overflows.
    pub fn shift(&self, delta: f64) -> LayoutResult<Self> {
        if !delta.is_finite() {
            return Err(LayoutError::InvalidArgument {
                what: "range shift",
                value: delta,
            });
        }
        Self::new(self.lower + delta, self.upper + delta)
    }

    /// Multiply both bounds by `factor`. An unbounded range stays unbounded.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `factor` is negative, NaN or infinite, or if the
    /// scaled lower bound overflows.
    pub fn scale(&self, factor: f64) -> LayoutResult<Self> {
        let factor = nonnegative("range scale factor", factor)?;
        let upper = if self.is_bounded() {
            self.upper * factor
        } else {
            self.upper
        };
        Self::new(self.lower * factor, upper)
    }

    /// Apply a monotonic map to both bounds. An infinite upper bound is left
    /// alone; the lower bound is capped at the new upper so the ordering
    /// invariant survives maps that collapse to zero.
    #[must_use]
    pub(crate) fn map_bounds(&self, f: impl Fn(f64) -> f64) -> Self {
        let upper = if self.is_bounded() {
            f(self.upper)
        } else {
            self.upper
        };
        Self {
            lower: f(self.lower).min(upper),
            upper,
        }
    }
}
