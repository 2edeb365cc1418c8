//! Integer range specifications: compile once, validate many times.
//!
//! A range specification is a short text such as `"1...40"`,
//! `"-5...-1, 10, 20..."` or `"'a':'z', tab"`. [`RangeCompiler`] turns the
//! text into an immutable [`Range`] made of non-overlapping [`RangeItem`]s,
//! and [`Range::validate`] checks integer values against it.
//!
//! ```
//! use cutrange::Range;
//!
//! let range: Range = "1...40".parse()?;
//! assert!(range.validate("length", 17, None).is_ok());
//! assert!(range.validate("length", 41, None).is_err());
//! assert_eq!(range.to_string(), "1:40");
//! # Ok::<(), cutrange::SpecError>(())
//! ```

mod errors;
mod location;
mod range;
mod symbols;

pub use errors::{RangeViolation, SpecError, SpecErrorKind};
pub use location::Location;
pub use range::{Range, RangeCompiler, RangeItem, parse_integer};
pub use symbols::{SymbolTable, human_readable_list};
