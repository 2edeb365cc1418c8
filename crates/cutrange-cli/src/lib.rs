//! Command line front end for range specifications.
//!
//! This crate powers the `cutrange` binary, which compiles a range such as
//! `1...40` and checks integer values against it, prints the canonical form
//! of a range, or lists the symbolic names a range may use.
//!
//! # Configuration
//!
//! - `CUTRANGE_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//! - `CUTRANGE_DEFAULT_RANGE`: Range used when `--range` is absent or blank

mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;

pub use cli::{Outcome, run};
