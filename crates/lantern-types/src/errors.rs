//! Error types for Lantern operations.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Lantern operations.
///
/// Every failure the bootstrapper can hit falls into one of these
/// categories. All of them are non-fatal to `setup_logging`, which
/// degrades to the baseline configuration instead of propagating.
#[derive(Error, Debug)]
pub enum LanternError {
    /// The resolved configuration file does not exist
    #[error("logging config file not found: {0}")]
    ConfigMissing(PathBuf),

    /// The configuration file exists but could not be parsed or validated
    #[error("invalid logging config: {0}")]
    ConfigParse(String),

    /// The configuration parsed but could not be applied (e.g. the log
    /// file could not be opened)
    #[error("failed to apply logging config: {0}")]
    ConfigApply(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for Lantern operations.
pub type Result<T> = std::result::Result<T, LanternError>;

/// Helper macro to bail out with a LanternError
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(ConfigParse, "handler {} references unknown formatter", name);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::LanternError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::LanternError::$variant(format!($fmt, $($arg)*)))
    };
}
