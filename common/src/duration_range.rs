//! Inclusive minute ranges and their compact `min-max` URL token.

use std::{fmt::Display, num::IntErrorKind, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DurationParseError;

/// Closed interval of minutes. A missing side leaves that end open; `Some(0)`
/// is a real lower bound and is never the same as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DurationRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl DurationRange {
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    /// Inverted range that no value satisfies. Stands in for a token whose
    /// bounds failed to parse.
    pub const UNSATISFIABLE: Self = Self { min: Some(1), max: Some(0) };

    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn at_least(min: u32) -> Self {
        Self { min: Some(min), max: None }
    }

    pub fn at_most(max: u32) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// True when neither side is set; such a range encodes to the bare `-`.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Membership test. Inverted ranges contain nothing.
    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= i64::from(min))
            && self.max.is_none_or(|max| value <= i64::from(max))
    }

    /// Label for the results header, e.g. `10～30分` or `～15分`.
    pub fn describe(&self) -> String {
        format!("{}～{}分", bound_to_string(self.min), bound_to_string(self.max))
    }
}

fn bound_to_string(bound: Option<u32>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

// Integers too large for `u32` saturate instead of being rejected.
fn parse_bound(segment: &str) -> Result<Option<u32>, DurationParseError> {
    if segment.is_empty() {
        return Ok(None);
    }
    match segment.parse::<u32>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(u32::MAX)),
        Err(_) => Err(DurationParseError::InvalidBound { segment: segment.to_string() }),
    }
}

// `10-30`, `10-`, `-30`; both sides empty gives the bare `-`.
impl Display for DurationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", bound_to_string(self.min), bound_to_string(self.max))
    }
}

impl FromStr for DurationRange {
    type Err = DurationParseError;

    /// Splits on the first `-`. A token without any `-` only sets `min`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = match s.split_once('-') {
            Some((left, right)) => (left, Some(right)),
            None => (s, None),
        };
        let min = parse_bound(left)?;
        let max = match right {
            Some(right) => parse_bound(right)?,
            None => None,
        };
        Ok(Self { min, max })
    }
}
