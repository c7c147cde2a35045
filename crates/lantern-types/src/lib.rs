//! # Lantern Types
//!
//! Core types shared across the Lantern crates:
//!
//! - The ordered [`Severity`] enumeration
//! - The strongly-typed [`LoggingConfig`] schema parsed from YAML
//! - Error types and the [`Result`] alias
//! - The [`Describe`] capability for logging caught errors
//!
//! ## Example
//!
//! ```
//! use lantern_types::{LoggingConfig, Severity};
//!
//! let config = LoggingConfig::from_yaml_str(r#"
//! version: 1
//! formatters:
//!   simple:
//!     format: "{level} {message}"
//! handlers:
//!   console:
//!     class: console
//!     level: DEBUG
//!     formatter: simple
//! root:
//!   level: DEBUG
//!   handlers: [console]
//! "#).unwrap();
//!
//! assert_eq!(config.root.level, Severity::Debug);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod severity;
pub mod traits;

// Re-export common types for convenience
pub use config::{FormatterConfig, HandlerConfig, LoggerConfig, LoggingConfig, RootConfig, SinkConfig};
pub use errors::{LanternError, Result};
pub use severity::Severity;
pub use traits::Describe;
