//! Runtime configuration, read from the environment once at startup.

use core::str::FromStr;

use storefront_core::{DomainError, DomainResult};
use storefront_observability::LogOutput;

/// Environment variable selecting the report output format.
pub const REPORT_FORMAT_VAR: &str = "STOREFRONT_REPORT_FORMAT";

/// Environment variable selecting the log line format.
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Numbered, human-readable sections.
    #[default]
    Text,
    /// One pretty-printed JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DomainError::unsupported("report format", s)),
        }
    }
}

pub fn parse_log_output(s: &str) -> DomainResult<LogOutput> {
    match s.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogOutput::Json),
        "compact" => Ok(LogOutput::Compact),
        _ => Err(DomainError::unsupported("log format", s)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub format: ReportFormat,
    pub log_output: LogOutput,
    /// Values that were rejected and replaced by defaults. Configuration is
    /// read before logging starts, so these are reported afterwards.
    pub rejected: Vec<DomainError>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to the
    /// default and are recorded in `rejected`. Configuration never aborts the
    /// run.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut rejected = Vec::new();

        let format = lookup(REPORT_FORMAT_VAR)
            .map(|raw| raw.parse::<ReportFormat>())
            .transpose()
            .unwrap_or_else(|err| {
                rejected.push(err);
                None
            })
            .unwrap_or_default();

        let log_output = lookup(LOG_FORMAT_VAR)
            .map(|raw| parse_log_output(&raw))
            .transpose()
            .unwrap_or_else(|err| {
                rejected.push(err);
                None
            })
            .unwrap_or_default();

        Self {
            format,
            log_output,
            rejected,
        }
    }

    /// Emit one warning per rejected value. Call after logging is initialized.
    pub fn warn_rejected(&self) {
        for err in &self.rejected {
            tracing::warn!(error = %err, "invalid configuration value; using default");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn parses_known_formats_case_insensitively() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(" json ".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err, DomainError::unsupported("report format", "xml"));
    }

    #[test]
    fn parses_log_formats() {
        assert_eq!(parse_log_output("json").unwrap(), LogOutput::Json);
        assert_eq!(parse_log_output("Compact").unwrap(), LogOutput::Compact);
        assert_eq!(
            parse_log_output("pretty").unwrap_err(),
            DomainError::unsupported("log format", "pretty")
        );
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = DemoConfig::from_lookup(|_| None);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.log_output, LogOutput::Json);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn reads_both_formats_from_lookup() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (REPORT_FORMAT_VAR, "json"),
            (LOG_FORMAT_VAR, "compact"),
        ]));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.log_output, LogOutput::Compact);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_and_are_recorded() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (REPORT_FORMAT_VAR, "yaml"),
            (LOG_FORMAT_VAR, "xml"),
        ]));
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.log_output, LogOutput::Json);
        assert_eq!(
            config.rejected,
            [
                DomainError::unsupported("report format", "yaml"),
                DomainError::unsupported("log format", "xml"),
            ]
        );
    }

    #[test]
    fn invalid_log_format_keeps_valid_report_format() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (REPORT_FORMAT_VAR, "json"),
            (LOG_FORMAT_VAR, "loud"),
        ]));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.log_output, LogOutput::Json);
        assert_eq!(config.rejected.len(), 1);
    }
}
