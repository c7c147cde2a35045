//! Declarative logging configuration schema.
//!
//! Mirrors the shape of the YAML config file: named formatters, named
//! handlers (console or rotating file), a distinguished root logger, and
//! named loggers forming a dot-separated hierarchy.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::Result;
use crate::severity::Severity;
use crate::bail;

/// Top-level logging configuration.
///
/// Constructed once at process start (from a literal value or parsed from
/// a YAML file), validated, applied exactly once, and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Schema version; only version 1 is supported
    pub version: u32,

    /// Accepted for config-file compatibility; a context is always built
    /// fresh from one config, so there are no existing loggers to disable
    #[serde(default)]
    pub disable_existing_loggers: bool,

    /// Named format strings
    #[serde(default)]
    pub formatters: IndexMap<String, FormatterConfig>,

    /// Named sinks with severity thresholds
    #[serde(default)]
    pub handlers: IndexMap<String, HandlerConfig>,

    /// The distinguished root logger
    pub root: RootConfig,

    /// Named logger definitions
    #[serde(default)]
    pub loggers: IndexMap<String, LoggerConfig>,
}

/// A named format string.
///
/// Supported placeholders: `{level}`, `{timestamp}`, `{module}`, `{file}`,
/// `{line}`, `{message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// The format pattern
    pub format: String,
}

/// A named handler: severity threshold, formatter reference, and sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Minimum severity this handler processes
    pub level: Severity,

    /// Name of the formatter to render records with
    pub formatter: String,

    /// Sink-specific parameters, selected by the `class` field
    #[serde(flatten)]
    pub sink: SinkConfig,
}

/// Sink-specific handler parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum SinkConfig {
    /// Write records to the console (stderr)
    Console {},

    /// Append records to a file, rolling it over at a size threshold
    RotatingFile {
        /// Path of the active log file
        filename: PathBuf,

        /// Size threshold in bytes; 0 disables rotation
        #[serde(default)]
        max_bytes: u64,

        /// Number of rotated files to retain; 0 truncates in place
        #[serde(default)]
        backup_count: usize,
    },
}

/// The root logger definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootConfig {
    /// Minimum severity the root logger accepts
    pub level: Severity,

    /// Handler names attached to the root
    #[serde(default)]
    pub handlers: Vec<String>,
}

/// A named logger definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum severity; unset means inherit from the nearest ancestor
    #[serde(default)]
    pub level: Option<Severity>,

    /// Handler names attached to this logger
    #[serde(default)]
    pub handlers: Vec<String>,

    /// Whether records are forwarded to ancestor handlers
    #[serde(default = "default_propagate")]
    pub propagate: bool,
}

fn default_propagate() -> bool {
    true
}

impl LoggingConfig {
    /// Parse a configuration from YAML text and validate it.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: LoggingConfig = serde_yaml::from_str(text)
            .map_err(|e| crate::LanternError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-references between formatters, handlers and loggers.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            bail!(ConfigParse, "unsupported config version: {}", self.version);
        }

        for (name, handler) in &self.handlers {
            if !self.formatters.contains_key(&handler.formatter) {
                bail!(
                    ConfigParse,
                    "handler '{}' references unknown formatter '{}'",
                    name,
                    handler.formatter
                );
            }
        }

        for handler in &self.root.handlers {
            if !self.handlers.contains_key(handler) {
                bail!(ConfigParse, "root references unknown handler '{}'", handler);
            }
        }

        for (name, logger) in &self.loggers {
            if name.is_empty() {
                bail!(ConfigParse, "logger names must be non-empty; use 'root' for the root logger");
            }
            for handler in &logger.handlers {
                if !self.handlers.contains_key(handler) {
                    bail!(
                        ConfigParse,
                        "logger '{}' references unknown handler '{}'",
                        name,
                        handler
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
version: 1
disable_existing_loggers: false
formatters:
  simple:
    format: "{level} {module} {line} {message}"
  verbose:
    format: "{level} {timestamp} {file} {line} {message}"
handlers:
  console:
    class: console
    level: DEBUG
    formatter: simple
  file:
    class: rotating_file
    level: INFO
    formatter: verbose
    filename: ./logs/test.log
    max_bytes: 1048576
    backup_count: 20
root:
  level: DEBUG
  handlers: [console]
loggers:
  server:
    level: DEBUG
    handlers: [file]
    propagate: true
"#;

    #[test]
    fn parses_a_full_config() {
        let config = LoggingConfig::from_yaml_str(VALID).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.formatters.len(), 2);
        assert_eq!(config.handlers.len(), 2);
        assert_eq!(config.root.handlers, vec!["console"]);

        let server = &config.loggers["server"];
        assert_eq!(server.level, Some(Severity::Debug));
        assert!(server.propagate);

        match &config.handlers["file"].sink {
            SinkConfig::RotatingFile { max_bytes, backup_count, .. } => {
                assert_eq!(*max_bytes, 1024 * 1024);
                assert_eq!(*backup_count, 20);
            }
            other => panic!("expected rotating_file sink, got {:?}", other),
        }
    }

    #[test]
    fn propagate_defaults_to_true() {
        let yaml = VALID.replace("    propagate: true\n", "");
        let config = LoggingConfig::from_yaml_str(&yaml).unwrap();
        assert!(config.loggers["server"].propagate);
    }

    #[test]
    fn rejects_unknown_severity() {
        let yaml = VALID.replace("level: INFO", "level: LOUD");
        assert!(LoggingConfig::from_yaml_str(&yaml).is_err());
    }

    #[test]
    fn rejects_unknown_handler_class() {
        let yaml = VALID.replace("class: rotating_file", "class: syslog");
        assert!(LoggingConfig::from_yaml_str(&yaml).is_err());
    }

    #[test]
    fn rejects_dangling_formatter_reference() {
        let yaml = VALID.replace("formatter: verbose", "formatter: fancy");
        let err = LoggingConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("unknown formatter"));
    }

    #[test]
    fn rejects_dangling_handler_reference() {
        let yaml = VALID.replace("handlers: [file]", "handlers: [syslog]");
        let err = LoggingConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("unknown handler"));
    }

    #[test]
    fn rejects_unsupported_version() {
        let yaml = VALID.replace("version: 1", "version: 2");
        let err = LoggingConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(LoggingConfig::from_yaml_str("version: [not a number").is_err());
    }
}
