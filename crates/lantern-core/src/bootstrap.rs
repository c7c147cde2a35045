//! The logging bootstrapper.
//!
//! Resolves a configuration source (file path, possibly overridden by an
//! environment variable), parses and applies it, and installs the
//! colorized console formatter. Every failure degrades to the baseline
//! configuration instead of propagating: logging setup never prevents
//! the process from running.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lantern_types::{LanternError, LoggingConfig, Result, Severity};

use crate::context::LoggingContext;
use crate::format::Formatter;
use crate::handler::ConsoleHandler;

/// Default location of the logging configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "logging.yaml";

/// Environment variable supplying an alternate configuration path.
pub const ENV_CONFIG_VAR: &str = "LOG_CFG";

/// Format used by the baseline console handler.
pub const BASELINE_FORMAT: &str = "{level} {file} {line} {message}";

/// Format used by the colorized console handler.
pub const COLORIZED_FORMAT: &str = "{timestamp} {level} {file} {line} {message}";

/// Configure logging for the process.
///
/// If `env_override_var` is set in the environment its value replaces
/// `config_path`. An existing path is read as YAML, validated, and
/// applied, with the colorized console formatter installed at DEBUG on
/// top. A missing, malformed, or unappliable configuration emits a
/// diagnostic on stderr and falls back to the baseline configuration at
/// `default_severity`. Exactly one of the two outcomes holds when this
/// returns; it never fails.
pub fn setup_logging(
    config_path: impl AsRef<Path>,
    default_severity: Severity,
    env_override_var: &str,
) -> LoggingContext {
    let path = match env::var_os(env_override_var) {
        Some(value) => PathBuf::from(value),
        None => config_path.as_ref().to_path_buf(),
    };

    if !path.exists() {
        let missing = LanternError::ConfigMissing(path);
        eprintln!("lantern: {}; using the default logging config", missing);
        return baseline(default_severity);
    }

    match load_and_apply(&path) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("lantern: {}; using the default logging config", e);
            baseline(default_severity)
        }
    }
}

fn load_and_apply(path: &Path) -> Result<LoggingContext> {
    let text = fs::read_to_string(path)?;
    let config = LoggingConfig::from_yaml_str(&text)?;
    let mut context = LoggingContext::from_config(&config)?;
    install_colorized(&mut context, Severity::Debug);
    Ok(context)
}

/// Apply a configuration directly, without the file/fallback machinery.
pub fn apply_config(config: &LoggingConfig) -> Result<LoggingContext> {
    LoggingContext::from_config(config)
}

/// Build the baseline configuration: a single colorized console handler
/// on the root logger at the given severity.
pub fn baseline(severity: Severity) -> LoggingContext {
    let console = Arc::new(ConsoleHandler::new(
        severity,
        Formatter::new(BASELINE_FORMAT),
    ));
    let mut context = LoggingContext::with_root(severity, vec![console]);
    install_colorized(&mut context, severity);
    context
}

/// Install the colorized console formatter, replacing any console
/// handlers already attached to the root logger.
pub fn install_colorized(context: &mut LoggingContext, severity: Severity) {
    let console = Arc::new(ConsoleHandler::colorized(
        severity,
        Formatter::new(COLORIZED_FORMAT),
    ));
    context.set_root_console(console);
}
