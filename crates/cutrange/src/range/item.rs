//! A single interval of a compiled range.

use std::fmt;

use crate::errors::{SpecError, SpecErrorKind};

/// One interval `lower..=upper` where a missing limit is unbounded.
///
/// # Examples
/// ```
/// use cutrange::RangeItem;
///
/// let item = RangeItem::between(2, 20)?;
/// assert!(item.contains(2) && item.contains(20) && !item.contains(21));
/// assert_eq!(RangeItem::at_most(20).to_string(), ":20");
/// assert_eq!(RangeItem::single(7).to_string(), "7");
/// # Ok::<(), cutrange::SpecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeItem {
    lower: Option<i64>,
    upper: Option<i64>,
}

impl RangeItem {
    /// Exactly `value`.
    #[must_use]
    pub const fn single(value: i64) -> Self {
        Self {
            lower: Some(value),
            upper: Some(value),
        }
    }

    /// `lower` or above.
    #[must_use]
    pub const fn at_least(lower: i64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// `upper` or below.
    #[must_use]
    pub const fn at_most(upper: i64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// Everything from `lower` to `upper` inclusive.
    ///
    /// # Errors
    /// Returns [`SpecErrorKind::LowerAboveUpper`] when `lower > upper`.
    pub fn between(lower: i64, upper: i64) -> Result<Self, SpecError> {
        if lower > upper {
            return Err(SpecErrorKind::LowerAboveUpper { lower, upper }.into());
        }
        Ok(Self {
            lower: Some(lower),
            upper: Some(upper),
        })
    }

    /// Lower limit, `None` if unbounded.
    #[must_use]
    pub const fn lower(&self) -> Option<i64> {
        self.lower
    }

    /// Upper limit, `None` if unbounded.
    #[must_use]
    pub const fn upper(&self) -> Option<i64> {
        self.upper
    }

    /// Whether `value` lies within the interval.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.lower.is_none_or(|lower| lower <= value)
            && self.upper.is_none_or(|upper| value <= upper)
    }

    /// Whether both intervals share at least one value.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let lower = match (self.lower, other.lower) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (bound, None) | (None, bound) => bound,
        };
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (bound, None) | (None, bound) => bound,
        };
        match (lower, upper) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }
}

impl fmt::Display for RangeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower == upper => write!(f, "{lower}"),
            (Some(lower), Some(upper)) => write!(f, "{lower}:{upper}"),
            (Some(lower), None) => write!(f, "{lower}:"),
            (None, Some(upper)) => write!(f, ":{upper}"),
            (None, None) => f.write_str(":"),
        }
    }
}
