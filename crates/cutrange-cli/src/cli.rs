//! Command dispatch for the `cutrange` entrypoint.

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use cutrange::{Location, Range, RangeCompiler, SymbolTable, parse_integer};
use eyre::{Context, Result};
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::logging::init_logging;
use crate::output::{CheckReport, write_check_report, write_json, write_symbols};

/// Source name used in locations of values read from standard input.
const STDIN_SOURCE: &str = "<stdin>";

/// Check integer values against range specifications such as `1...40`.
#[derive(Parser)]
#[command(name = "cutrange", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate values against a range; reads one value per line from stdin
    /// when none are given.
    Check(CheckArgs),
    /// Print the canonical form of a range.
    Render(RenderArgs),
    /// List the symbolic names usable in ranges.
    Symbols(SymbolsArgs),
}

impl Commands {
    fn spec(&self) -> Option<&SpecArgs> {
        match self {
            Self::Check(args) => Some(&args.spec),
            Self::Render(args) => Some(&args.spec),
            Self::Symbols(_) => None,
        }
    }
}

#[derive(Args)]
pub(crate) struct SpecArgs {
    /// Range specification, for example `1...40` or `'a'...'z', tab`.
    #[arg(long, allow_hyphen_values = true)]
    pub range: Option<String>,
    /// Specification used when `--range` is absent or blank.
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<String>,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
    /// Name of the checked values in error messages.
    #[arg(long, default_value = "value")]
    pub name: String,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
    /// Values to check, decimal or `0x` hexadecimal.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
    /// Emit the compiled items as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub(crate) struct SymbolsArgs {
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Whether every checked value lay within its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was rejected.
    Accepted,
    /// At least one value was rejected.
    Rejected,
}

/// Parse the command line, set up logging and run the selected command
/// against the process's standard streams.
///
/// # Errors
///
/// Returns an error for invalid configuration, malformed ranges or values,
/// and failures to read input or write output.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_logging(&config);
    debug!(version = env!("CARGO_PKG_VERSION"), "starting cutrange");

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&cli.command, &config, &mut stdin.lock(), &mut stdout.lock())
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let default_range = cli.command.spec().and_then(|spec| spec.default.clone());
    CliConfig::from_env()?
        .apply_overrides(cli.log_level, default_range)
        .validate()
}

pub(crate) fn execute(
    command: &Commands,
    config: &CliConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Outcome> {
    match command {
        Commands::Check(args) => handle_check(args, config, input, out),
        Commands::Render(args) => handle_render(args, config, out),
        Commands::Symbols(args) => handle_symbols(args, out),
    }
}

fn compile(spec: &SpecArgs, config: &CliConfig) -> Result<Range, CliError> {
    let symbols = SymbolTable::ascii();
    let range = RangeCompiler::new(&symbols)
        .compile(spec.range.as_deref(), config.default_range.as_deref())?;
    info!(%range, "compiled range");
    Ok(range)
}

fn handle_check(
    args: &CheckArgs,
    config: &CliConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let range = compile(&args.spec, config)?;
    let values = if args.values.is_empty() {
        read_values(input).wrap_err("failed to read values from stdin")?
    } else {
        args.values.iter().map(|text| (text.clone(), None)).collect()
    };

    let mut report = CheckReport::new(&range);
    for (text, location) in values {
        let value = parse_integer(&text).map_err(|mut reason| {
            if let Some(location) = &location {
                reason = reason.with_location(location.clone());
            }
            CliError::InvalidValue {
                text: text.clone(),
                reason,
            }
        })?;
        report.record(value, range.validate(&args.name, value, location.as_ref()));
    }

    if args.json {
        write_json(out, &report)?;
    } else {
        write_check_report(out, &report)?;
    }
    let rejected = report.rejected();
    debug!(rejected, "checked values");
    Ok(if rejected == 0 {
        Outcome::Accepted
    } else {
        Outcome::Rejected
    })
}

fn read_values(input: &mut dyn BufRead) -> Result<Vec<(String, Option<Location>)>, CliError> {
    let mut values = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read {
            line: index + 1,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let column = line.len() - line.trim_start().len() + 1;
        values.push((
            trimmed.to_string(),
            Some(Location::new(STDIN_SOURCE).at(index + 1, column)),
        ));
    }
    Ok(values)
}

fn handle_render(args: &RenderArgs, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    let range = compile(&args.spec, config)?;
    if args.json {
        write_json(out, &range)?;
    } else {
        writeln!(out, "{range}").wrap_err("failed to write range")?;
    }
    Ok(Outcome::Accepted)
}

fn handle_symbols(args: &SymbolsArgs, out: &mut dyn Write) -> Result<Outcome> {
    let symbols = SymbolTable::ascii();
    if args.json {
        let codes: std::collections::BTreeMap<&str, i64> = symbols.iter().collect();
        write_json(out, &codes)?;
    } else {
        write_symbols(out, &symbols)?;
    }
    Ok(Outcome::Accepted)
}
