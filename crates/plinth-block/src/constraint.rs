//! Sizing constraints.
//!
//! A [`Constraint`] tells a block how much room it has, independently per
//! axis: no limit, an exact size, or a range of acceptable sizes. Constraints
//! are rebuilt on every layout pass and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult, nonnegative};
use crate::geom::Size;
use crate::insets::Insets;
use crate::range::Range;

/// The sizing mode of one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum AxisConstraint {
    /// Sized by content alone.
    #[default]
    None,
    /// Exactly this many surface units, whatever the content wants.
    Fixed(f64),
    /// Content size clamped into the range.
    Range(Range),
}

impl AxisConstraint {
    /// A fixed axis.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is negative, NaN or infinite.
    pub fn fixed(value: f64) -> LayoutResult<Self> {
        Ok(Self::Fixed(nonnegative("fixed size", value)?))
    }

    /// A ranged axis.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the range admits negative sizes.
    pub fn range(range: Range) -> LayoutResult<Self> {
        if range.lower() < 0.0 {
            return Err(LayoutError::InvalidArgument {
                what: "size range lower bound",
                value: range.lower(),
            });
        }
        Ok(Self::Range(range))
    }

    fn validated(self) -> LayoutResult<Self> {
        match self {
            Self::None => Ok(self),
            Self::Fixed(v) => Self::fixed(v),
            Self::Range(r) => Self::range(r),
        }
    }

    /// Whether the axis is unconstrained.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The largest size the axis admits, if it has a finite one.
    #[must_use]
    pub fn max_extent(&self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Fixed(v) => Some(*v),
            Self::Range(r) => r.is_bounded().then_some(r.upper()),
        }
    }

    /// The final extent for content that would naturally be `natural` long.
    #[must_use]
    pub fn resolve(&self, natural: f64) -> f64 {
        match self {
            Self::None => natural,
            Self::Fixed(v) => *v,
            Self::Range(r) => r.clamp(natural),
        }
    }

    /// Apply a trimming function to every bound the axis carries.
    fn narrow(&self, trim: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::None => Self::None,
            Self::Fixed(v) => Self::Fixed(trim(*v)),
            Self::Range(r) => Self::Range(r.map_bounds(trim)),
        }
    }
}

impl fmt::Display for AxisConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Fixed(v) => write!(f, "fixed({v})"),
            Self::Range(r) if r.is_bounded() => write!(f, "range({}..{})", r.lower(), r.upper()),
            Self::Range(r) => write!(f, "range({}..)", r.lower()),
        }
    }
}

/// Width and height sizing modes for one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConstraintRepr", into = "ConstraintRepr")]
pub struct Constraint {
    width: AxisConstraint,
    height: AxisConstraint,
}

#[derive(Serialize, Deserialize)]
struct ConstraintRepr {
    #[serde(default)]
    width: AxisConstraint,
    #[serde(default)]
    height: AxisConstraint,
}

impl TryFrom<ConstraintRepr> for Constraint {
    type Error = LayoutError;

    fn try_from(repr: ConstraintRepr) -> LayoutResult<Self> {
        Self::new(repr.width, repr.height)
    }
}

impl From<Constraint> for ConstraintRepr {
    fn from(constraint: Constraint) -> Self {
        Self {
            width: constraint.width,
            height: constraint.height,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={} height={}", self.width, self.height)
    }
}

impl Constraint {
    /// Both axes sized by content.
    pub const UNCONSTRAINED: Self = Self {
        width: AxisConstraint::None,
        height: AxisConstraint::None,
    };

    /// Combine two axis constraints.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a fixed axis is negative or non-finite, or a
    /// ranged axis admits negative sizes.
    pub fn new(width: AxisConstraint, height: AxisConstraint) -> LayoutResult<Self> {
        Ok(Self {
            width: width.validated()?,
            height: height.validated()?,
        })
    }

    /// Both axes fixed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either size is negative or non-finite.
    pub fn fixed(width: f64, height: f64) -> LayoutResult<Self> {
        Ok(Self {
            width: AxisConstraint::fixed(width)?,
            height: AxisConstraint::fixed(height)?,
        })
    }

    /// Width mode.
    #[must_use]
    pub const fn width(&self) -> AxisConstraint {
        self.width
    }

    /// Height mode.
    #[must_use]
    pub const fn height(&self) -> AxisConstraint {
        self.height
    }

    /// Whether neither axis is constrained.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Resolve a natural size against this constraint, axis by axis: an
    /// unconstrained axis keeps the natural extent, a ranged axis clamps it,
    /// and a fixed axis ignores it.
    #[must_use]
    pub fn calculate_constrained_size(&self, natural: Size) -> Size {
        Size::new(
            self.width.resolve(natural.width),
            self.height.resolve(natural.height),
        )
    }

    /// The constraint left for whatever sits inside `insets`.
    ///
    /// Fixed values and finite range bounds are trimmed (never below zero);
    /// unconstrained axes and infinite upper bounds pass through.
    #[must_use]
    pub fn trim(&self, insets: &Insets) -> Self {
        Self {
            width: self.width.narrow(|w| insets.trim_width(w)),
            height: self.height.narrow(|h| insets.trim_height(h)),
        }
    }

    /// This constraint with the width freed.
    #[must_use]
    pub const fn to_unconstrained_width(&self) -> Self {
        Self {
            width: AxisConstraint::None,
            height: self.height,
        }
    }

    /// This constraint with the height freed.
    #[must_use]
    pub const fn to_unconstrained_height(&self) -> Self {
        Self {
            width: self.width,
            height: AxisConstraint::None,
        }
    }

    /// This constraint with the width fixed at `width`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `width` is negative or non-finite.
    pub fn to_fixed_width(&self, width: f64) -> LayoutResult<Self> {
        Ok(Self {
            width: AxisConstraint::fixed(width)?,
            height: self.height,
        })
    }

    /// This constraint with the height fixed at `height`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `height` is negative or non-finite.
    pub fn to_fixed_height(&self, height: f64) -> LayoutResult<Self> {
        Ok(Self {
            width: self.width,
            height: AxisConstraint::fixed(height)?,
        })
    }

    /// This constraint with the width limited to `range`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `range` admits negative sizes.
    pub fn to_range_width(&self, range: Range) -> LayoutResult<Self> {
        Ok(Self {
            width: AxisConstraint::range(range)?,
            height: self.height,
        })
    }

    /// This constraint with the height limited to `range`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `range` admits negative sizes.
    pub fn to_range_height(&self, range: Range) -> LayoutResult<Self> {
        Ok(Self {
            width: self.width,
            height: AxisConstraint::range(range)?,
        })
    }
}
