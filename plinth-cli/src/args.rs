//! Command-line value types.

use std::str::FromStr;

use plinth_block::{AxisConstraint, Range};

/// One axis of the outer constraint.
///
/// Accepted forms: `none`, `fixed:V`, `range:LO..HI`, `range:LO..`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArg(pub AxisConstraint);

impl FromStr for AxisArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(AxisConstraint::None));
        }
        if let Some(value) = s.strip_prefix("fixed:") {
            let value = parse_number(value)?;
            return AxisConstraint::fixed(value)
                .map(Self)
                .map_err(|e| e.to_string());
        }
        if let Some(bounds) = s.strip_prefix("range:") {
            let Some((lower, upper)) = bounds.split_once("..") else {
                return Err(format!("expected LO..HI or LO.., got '{bounds}'"));
            };
            let lower = parse_number(lower)?;
            let range = if upper.trim().is_empty() {
                Range::at_least(lower)
            } else {
                Range::new(lower, parse_number(upper)?)
            };
            return range
                .and_then(AxisConstraint::range)
                .map(Self)
                .map_err(|e| e.to_string());
        }
        Err(format!(
            "unknown axis constraint '{s}' (expected none, fixed:V or range:LO..HI)"
        ))
    }
}

/// Top-left corner the arranged block is placed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(format!("expected X,Y, got '{s}'"));
        };
        Ok(Self {
            x: parse_number(x)?,
            y: parse_number(y)?,
        })
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|e| format!("'{s}' is not a number: {e}"))
}
