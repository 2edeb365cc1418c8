//! Compiled ranges and the validation of values against them.

mod compiler;
mod item;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;
use std::str::FromStr;

use crate::errors::{RangeViolation, SpecError};
use crate::location::Location;
use crate::symbols::ASCII;

pub use compiler::{RangeCompiler, parse_integer};
pub use item::RangeItem;

/// An immutable set of integer intervals compiled from a specification.
///
/// A range without items accepts every value. Items never overlap and keep
/// the order in which the specification listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range {
    description: Option<String>,
    items: Option<Vec<RangeItem>>,
}

impl Range {
    /// A range accepting any value.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            description: None,
            items: None,
        }
    }

    pub(crate) fn restricted(description: String, items: Vec<RangeItem>) -> Self {
        debug_assert!(!items.is_empty(), "restricted range needs items");
        Self {
            description: Some(description),
            items: Some(items),
        }
    }

    /// Compile `text` using the ASCII symbol table.
    ///
    /// # Errors
    /// Returns [`SpecError`] when `text` is malformed.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        RangeCompiler::new(&ASCII).compile(Some(text), None)
    }

    /// Compile `text` using the ASCII symbol table, substituting `default`
    /// when `text` is absent or blank.
    ///
    /// # Errors
    /// Returns [`SpecError`] when the effective text or `default` is
    /// malformed.
    pub fn with_default(text: Option<&str>, default: &str) -> Result<Self, SpecError> {
        RangeCompiler::new(&ASCII).compile(text, Some(default))
    }

    /// The specification the range was compiled from.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The compiled items, `None` for an unrestricted range.
    #[must_use]
    pub fn items(&self) -> Option<&[RangeItem]> {
        self.items.as_deref()
    }

    /// Whether the range accepts every value.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.items.is_none()
    }

    /// Whether `value` lies within any item.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.items
            .as_deref()
            .is_none_or(|items| items.iter().any(|item| item.contains(value)))
    }

    /// Check that the value called `name` lies within the range.
    ///
    /// # Errors
    /// Returns [`RangeViolation`] naming the value and the range when the
    /// value lies outside every item.
    ///
    /// # Examples
    /// ```
    /// use cutrange::{Location, Range};
    ///
    /// let range = Range::parse("...-1, 1...")?;
    /// assert!(range.validate("offset", -7, None).is_ok());
    /// let err = range
    ///     .validate("offset", 0, Some(&Location::new("data.csv").at(2, 5)))
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "data.csv:2:5: offset is 0 but must be within range: ':-1, 1:'"
    /// );
    /// # Ok::<(), cutrange::SpecError>(())
    /// ```
    pub fn validate(
        &self,
        name: &str,
        value: i64,
        location: Option<&Location>,
    ) -> Result<(), RangeViolation> {
        debug_assert!(!name.is_empty(), "validated values need a name");
        if self.contains(value) {
            return Ok(());
        }
        Err(RangeViolation {
            name: name.to_string(),
            value,
            range: self.to_string(),
            location: location.cloned(),
        })
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::unrestricted()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(items) = self.items.as_deref() else {
            return f.write_str("None");
        };
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl FromStr for Range {
    type Err = SpecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::compile_ok;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1...40", 1, true)]
    #[case("1...40", 40, true)]
    #[case("1...40", 0, false)]
    #[case("1...40", 41, false)]
    #[case("...40", -1000, true)]
    #[case("...40", 41, false)]
    #[case("40...", 1000, true)]
    #[case("40...", 39, false)]
    #[case("-5...-1, 10, 20...", -3, true)]
    #[case("-5...-1, 10, 20...", 0, false)]
    #[case("-5...-1, 10, 20...", 10, true)]
    #[case("-5...-1, 10, 20...", 15, false)]
    #[case("-5...-1, 10, 20...", i64::MAX, true)]
    fn validates_values(#[case] text: &str, #[case] value: i64, #[case] accepted: bool) {
        let range = compile_ok(text);
        assert_eq!(range.validate("value", value, None).is_ok(), accepted);
        assert_eq!(range.contains(value), accepted);
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(0)]
    #[case(i64::MAX)]
    fn unrestricted_range_accepts_everything(#[case] value: i64) {
        let range = Range::unrestricted();
        assert!(range.validate("value", value, None).is_ok());
        assert_eq!(range.to_string(), "None");
        assert_eq!(range.items(), None);
    }

    #[test]
    fn violation_names_value_and_range() {
        let range = compile_ok("1...5, 7");
        let Err(violation) = range.validate("digit", 6, None) else {
            panic!("6 lies outside the range");
        };
        assert_eq!(violation.name, "digit");
        assert_eq!(violation.value, 6);
        assert_eq!(violation.range, "1:5, 7");
        assert_eq!(violation.location, None);
        assert_eq!(
            violation.to_string(),
            "digit is 6 but must be within range: '1:5, 7'"
        );
    }

    #[test]
    fn keeps_items_in_specification_order() {
        let range = compile_ok("10, 1...3, -4");
        assert_eq!(range.to_string(), "10, 1:3, -4");
        assert_eq!(range.description(), Some("10, 1...3, -4"));
    }

    #[test]
    fn parses_through_from_str() {
        let Ok(range) = "tab".parse::<Range>() else {
            panic!("tab is a known symbol");
        };
        assert_eq!(range.items(), Some(&[RangeItem::single(9)][..]));
    }

    #[test]
    fn with_default_uses_ascii_symbols() {
        let Ok(range) = Range::with_default(None, "cr, lf") else {
            panic!("default should compile");
        };
        assert_eq!(range.to_string(), "13, 10");
    }

    #[test]
    fn ranges_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Range>();
    }
}
