//! Error types raised while compiling range specifications and validating
//! values against them.

use std::fmt;
use thiserror::Error;

use crate::location::Location;

/// The rule a malformed range specification violated.
///
/// Every variant carries the offending fragment of the source text so the
/// message alone is enough to correct the specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecErrorKind {
    /// A character outside the range grammar's alphabet.
    #[error(
        "range must be specified using integer numbers, text, symbols and ellipsis (...) \
         but found: '{found}' [token type: {token_type}]"
    )]
    UnexpectedCharacter {
        /// The rejected fragment.
        found: String,
        /// Rough classification of the fragment.
        token_type: &'static str,
    },
    /// Quoted text without a closing quote.
    #[error("text for range must be terminated by a matching quote but is: {text}")]
    UnterminatedText {
        /// The quoted text up to the end of the specification.
        text: String,
    },
    /// Quoted text that does not hold exactly one character.
    #[error("text for range must contain a single character but is: {text}")]
    TextNotSingleCharacter {
        /// The quoted text including its quotes.
        text: String,
    },
    /// A numeric literal that is not a valid decimal or hexadecimal integer.
    #[error("number must be an integer but is: '{text}'")]
    InvalidNumber {
        /// The literal as written.
        text: String,
    },
    /// A number that does not fit into a signed 64-bit integer.
    #[error(
        "number must be between {min} and {max} but is: {text}",
        min = i64::MIN,
        max = i64::MAX
    )]
    NumberOutOfRange {
        /// The literal as written, including its sign.
        text: String,
    },
    /// A hyphen followed by something other than a number.
    #[error("hyphen (-) must be followed by number but found: '{found}'")]
    HyphenNotFollowedByNumber {
        /// The fragment following the hyphen.
        found: String,
    },
    /// A hyphen at the end of an item.
    #[error("hyphen (-) at end must be followed by number")]
    TrailingHyphen,
    /// A second value without an ellipsis separating it from the first.
    #[error("number must be followed by ellipsis (...) but found: '{found}'")]
    MissingEllipsis {
        /// The fragment following the lower limit.
        found: String,
    },
    /// A third value in one item.
    #[error("range must have at most lower and upper limit but found another number: '{found}'")]
    TooManyLimits {
        /// The surplus fragment.
        found: String,
    },
    /// A second ellipsis in one item.
    #[error("range item must contain at most one ellipsis (...) but found: '{found}'")]
    RepeatedEllipsis {
        /// The surplus ellipsis as written.
        found: String,
    },
    /// A name missing from the symbol table.
    #[error("symbolic name '{name}' must be one of: {valid}")]
    UnknownSymbol {
        /// The name as written.
        name: String,
        /// Human readable list of all known names.
        valid: String,
    },
    /// An item consisting of nothing but an ellipsis.
    #[error("ellipsis (...) must be preceded and/or succeeded by number")]
    BareEllipsis,
    /// An item whose lower limit exceeds its upper limit.
    #[error("lower range {lower} must be less than or equal to upper range {upper}")]
    LowerAboveUpper {
        /// Lower limit.
        lower: i64,
        /// Upper limit.
        upper: i64,
    },
    /// Two items sharing at least one value.
    #[error("range items must not overlap: {first} and {second}")]
    Overlap {
        /// Canonical rendering of the earlier item.
        first: String,
        /// Canonical rendering of the rejected item.
        second: String,
    },
    /// An empty item between separators.
    #[error("range item must not be empty")]
    EmptyItem,
    /// A default specification made of whitespace only.
    #[error("default range must not be blank")]
    BlankDefault,
}

/// A range specification that cannot be compiled.
///
/// # Examples
/// ```
/// use cutrange::{Range, SpecErrorKind};
///
/// let err = "5...1".parse::<Range>().unwrap_err();
/// assert_eq!(err.kind(), &SpecErrorKind::LowerAboveUpper { lower: 5, upper: 1 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecError {
    kind: SpecErrorKind,
    offset: Option<usize>,
    location: Option<Location>,
}

impl SpecError {
    /// Create an error for `kind` without position information.
    #[must_use]
    pub fn new(kind: SpecErrorKind) -> Self {
        Self {
            kind,
            offset: None,
            location: None,
        }
    }

    pub(crate) fn at(kind: SpecErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
            location: None,
        }
    }

    /// Attach the location the specification was read from.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// The violated rule.
    #[must_use]
    pub fn kind(&self) -> &SpecErrorKind {
        &self.kind
    }

    /// Byte offset into the specification text where the problem was found.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Location of the specification, if the caller supplied one.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl From<SpecErrorKind> for SpecError {
    fn from(kind: SpecErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for SpecError {}

/// A value that lies outside every item of a range.
///
/// # Examples
/// ```
/// use cutrange::Range;
///
/// let range: Range = "1...40".parse().unwrap();
/// let err = range.validate("length", 41, None).unwrap_err();
/// assert_eq!(err.to_string(), "length is 41 but must be within range: '1:40'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{name} is {value} but must be within range: '{range}'", prefix(.location.as_ref()))]
pub struct RangeViolation {
    /// Name of the validated value.
    pub name: String,
    /// The rejected value.
    pub value: i64,
    /// Canonical rendering of the range.
    pub range: String,
    /// Where the value was read from.
    pub location: Option<Location>,
}

fn prefix(location: Option<&Location>) -> String {
    location.map_or_else(String::new, |location| format!("{location}: "))
}
