//! # Lantern Core
//!
//! A configuration-driven logging facility:
//!
//! - **Bootstrap**: resolve a YAML config file (with an environment
//!   variable override), apply it, and install colorized console output,
//!   falling back to a baseline configuration on any failure
//! - **Context**: an explicit [`LoggingContext`] owning the named-logger
//!   hierarchy with thresholds and propagation
//! - **Handlers**: colorized console and size-rotating file sinks
//!
//! ## Example
//!
//! ```no_run
//! use lantern_core::{info, setup_logging, Severity};
//!
//! let context = setup_logging("logging.yaml", Severity::Debug, "LOG_CFG");
//!
//! let logger = context.logger("server");
//! info!(logger, "listening on port {}", 8080);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod context;
pub mod format;
pub mod handler;
pub mod record;
pub mod term;

// Re-export commonly used items
pub use bootstrap::{setup_logging, DEFAULT_CONFIG_PATH, ENV_CONFIG_VAR};
pub use context::{Logger, LoggingContext};
pub use lantern_types::{Describe, LanternError, LoggingConfig, Result, Severity};
