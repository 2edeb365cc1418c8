//! Check integer values against range specifications.

use std::io::{self, Write};
use std::process::ExitCode;

use cutrange_cli::Outcome;

/// Exit status for malformed ranges, values and configuration.
const USAGE_FAILURE: u8 = 2;

fn main() -> ExitCode {
    match cutrange_cli::run() {
        Ok(Outcome::Accepted) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::FAILURE,
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {err:#}");
            ExitCode::from(USAGE_FAILURE)
        }
    }
}
