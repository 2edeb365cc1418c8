//! Source positions attached to diagnostics.

use std::fmt;

/// Where a specification or a validated value was read from.
///
/// Lines and columns are one-based. A location without a line refers to the
/// source as a whole.
///
/// # Examples
/// ```
/// use cutrange::Location;
///
/// let location = Location::new("fields.csv").at(12, 3);
/// assert_eq!(location.to_string(), "fields.csv:12:3");
/// assert_eq!(Location::new("fields.csv").to_string(), "fields.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    source: String,
    line: Option<usize>,
    column: Option<usize>,
}

impl Location {
    /// Refer to `source` as a whole.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: None,
            column: None,
        }
    }

    /// Narrow the location to a line and column.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Name of the source, typically a path.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// One-based line, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// One-based column, if known.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        Ok(())
    }
}
