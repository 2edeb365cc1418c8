//! Helpers for rendering command output.

use std::io::Write;

use cutrange::{Range, RangeViolation, SymbolTable};
use eyre::{Context, Result};
use serde::Serialize;

/// Outcome of checking a batch of values against one range.
#[derive(Debug, Serialize)]
pub(crate) struct CheckReport<'a> {
    range: String,
    description: Option<&'a str>,
    results: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    value: i64,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<'a> CheckReport<'a> {
    pub(crate) fn new(range: &'a Range) -> Self {
        Self {
            range: range.to_string(),
            description: range.description(),
            results: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, value: i64, outcome: Result<(), RangeViolation>) {
        self.results.push(CheckResult {
            value,
            accepted: outcome.is_ok(),
            message: outcome.err().map(|violation| violation.to_string()),
        });
    }

    pub(crate) fn rejected(&self) -> usize {
        self.results.iter().filter(|result| !result.accepted).count()
    }
}

pub(crate) fn write_check_report(writer: &mut dyn Write, report: &CheckReport<'_>) -> Result<()> {
    for result in &report.results {
        let line = result.message.as_ref().map_or_else(
            || format!("ok {}", result.value),
            |message| format!("error {message}"),
        );
        writeln!(writer, "{line}")
            .wrap_err_with(|| format!("failed to write result for value {}", result.value))?;
    }
    Ok(())
}

pub(crate) fn write_symbols(writer: &mut dyn Write, symbols: &SymbolTable) -> Result<()> {
    for (name, code) in symbols.iter() {
        writeln!(writer, "{name} {code}")
            .wrap_err_with(|| format!("failed to write symbol {name}"))?;
    }
    Ok(())
}

pub(crate) fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).wrap_err("failed to serialise JSON output")?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}
