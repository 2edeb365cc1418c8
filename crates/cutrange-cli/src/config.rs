//! Command line configuration parsed from environment variables.
//!
//! Settings start from defaults, are overridden by environment variables
//! prefixed with `CUTRANGE_`, and finally by command line flags.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "CUTRANGE_LOG_LEVEL";

/// Environment variable holding the default range specification.
pub const DEFAULT_RANGE_VAR: &str = "CUTRANGE_DEFAULT_RANGE";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay quiet unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every compiled range item.
    Trace,
    /// Compiled specifications and their item counts.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the command line front end.
///
/// # Environment Variables
///
/// - `CUTRANGE_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `CUTRANGE_DEFAULT_RANGE`: Range specification used when `--range` is
///   absent or blank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Range specification substituted for a blank `--range`.
    pub default_range: Option<String>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the log level is unknown. Blank
    /// values are left for [`CliConfig::validate`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|val| val.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            log_level,
            default_range: lookup(DEFAULT_RANGE_VAR),
        })
    }

    /// Check the settings once every source has been applied.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the default range is blank.
    pub fn validate(self) -> Result<Self, CliError> {
        if self
            .default_range
            .as_deref()
            .is_some_and(|range| range.trim().is_empty())
        {
            return Err(CliError::InvalidConfig(format!(
                "default range must not be blank (set {DEFAULT_RANGE_VAR} or --default)"
            )));
        }
        Ok(self)
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for command line flags that take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        default_range: Option<String>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(range) = default_range {
            self.default_range = Some(range);
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] text: &str, #[case] expected: LogLevel) {
        assert_eq!(text.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn config_defaults_without_environment() {
        let config = CliConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn config_reads_environment() {
        let config = CliConfig::from_lookup(lookup_in(&[
            (LOG_LEVEL_VAR, "debug"),
            (DEFAULT_RANGE_VAR, "1...9"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_range.as_deref(), Some("1...9"));
    }

    #[test]
    fn config_rejects_unknown_log_level() {
        let err = CliConfig::from_lookup(lookup_in(&[(LOG_LEVEL_VAR, "chatty")])).unwrap_err();
        assert!(err.to_string().contains("unknown log level"), "{err}");
    }

    #[rstest]
    #[case(Some("  "), None)]
    #[case(None, Some(""))]
    #[case(Some("1...9"), Some(" \t"))]
    fn validate_rejects_blank_default(
        #[case] environment: Option<&str>,
        #[case] flag: Option<&str>,
    ) {
        let vars: Vec<(&str, &str)> = environment
            .map(|value| (DEFAULT_RANGE_VAR, value))
            .into_iter()
            .collect();
        let err = CliConfig::from_lookup(lookup_in(&vars))
            .unwrap()
            .apply_overrides(None, flag.map(String::from))
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: default range must not be blank \
             (set CUTRANGE_DEFAULT_RANGE or --default)"
        );
    }

    #[test]
    fn flag_replaces_blank_environment_default() {
        let config = CliConfig::from_lookup(lookup_in(&[(DEFAULT_RANGE_VAR, " ")]))
            .unwrap()
            .apply_overrides(None, Some("5".into()))
            .validate()
            .unwrap();
        assert_eq!(config.default_range.as_deref(), Some("5"));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config =
            CliConfig::default().apply_overrides(Some(LogLevel::Error), Some("0...".into()));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.default_range.as_deref(), Some("0..."));

        let config = CliConfig::default()
            .with_log_level(LogLevel::Info)
            .apply_overrides(None, None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_range, None);
    }
}
