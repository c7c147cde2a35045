//! The logger graph: named loggers, thresholds, and propagation.
//!
//! A [`LoggingContext`] owns the handler/logger graph built from one
//! validated [`LoggingConfig`]. It is constructed once, never mutated
//! afterwards, and threaded explicitly through the application; loggers
//! are lightweight handles borrowing the context.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lantern_types::{Describe, LanternError, LoggingConfig, Result, Severity};

use crate::format::Formatter;
use crate::handler::{build_handler, Handler};
use crate::record::{CallSite, Record};

pub(crate) struct LoggerNode {
    pub(crate) level: Option<Severity>,
    pub(crate) handlers: Vec<Arc<dyn Handler>>,
    pub(crate) propagate: bool,
}

/// Process-wide logging state, held explicitly rather than as a hidden
/// singleton.
///
/// Logger names form a dot-separated hierarchy ("server.db" is a child of
/// "server"); the root logger has no name. Any name may be used with
/// [`LoggingContext::logger`], configured or not — unconfigured loggers
/// have no handlers of their own and propagate to their ancestors.
pub struct LoggingContext {
    pub(crate) root_level: Severity,
    pub(crate) root_handlers: Vec<Arc<dyn Handler>>,
    pub(crate) loggers: HashMap<String, LoggerNode>,
}

impl LoggingContext {
    /// Build a context from a configuration.
    ///
    /// Validates the configuration, constructs every declared handler
    /// (opening file sinks), and wires the named loggers. Handler
    /// construction failures surface as `ConfigApply`.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        config.validate()?;

        let mut handlers: HashMap<&str, Arc<dyn Handler>> = HashMap::new();
        for (name, handler_config) in &config.handlers {
            let formatter = config
                .formatters
                .get(&handler_config.formatter)
                .ok_or_else(|| {
                    LanternError::ConfigApply(format!(
                        "handler '{}' references unknown formatter '{}'",
                        name, handler_config.formatter
                    ))
                })?;
            let handler = build_handler(handler_config, Formatter::new(formatter.format.as_str()))?;
            handlers.insert(name.as_str(), handler);
        }

        let resolve = |names: &[String]| -> Result<Vec<Arc<dyn Handler>>> {
            names
                .iter()
                .map(|name| {
                    handlers.get(name.as_str()).cloned().ok_or_else(|| {
                        LanternError::ConfigApply(format!("unknown handler '{}'", name))
                    })
                })
                .collect()
        };

        let root_handlers = resolve(&config.root.handlers)?;

        let mut loggers = HashMap::new();
        for (name, logger_config) in &config.loggers {
            loggers.insert(
                name.clone(),
                LoggerNode {
                    level: logger_config.level,
                    handlers: resolve(&logger_config.handlers)?,
                    propagate: logger_config.propagate,
                },
            );
        }

        Ok(Self {
            root_level: config.root.level,
            root_handlers,
            loggers,
        })
    }

    /// Build a context with only root handlers, used for the baseline
    /// configuration.
    pub(crate) fn with_root(level: Severity, handlers: Vec<Arc<dyn Handler>>) -> Self {
        Self {
            root_level: level,
            root_handlers: handlers,
            loggers: HashMap::new(),
        }
    }

    /// Replace the root logger's console handlers with the given handler.
    pub(crate) fn set_root_console(&mut self, handler: Arc<dyn Handler>) {
        self.root_handlers.retain(|h| !h.is_console());
        self.root_handlers.push(handler);
    }

    /// Acquire a handle for the named logger. An empty name denotes the
    /// root logger.
    pub fn logger(&self, name: &str) -> Logger<'_> {
        Logger {
            context: self,
            name: name.to_string(),
        }
    }

    /// Acquire a handle for the root logger.
    pub fn root_logger(&self) -> Logger<'_> {
        self.logger("")
    }

    /// Whether a logger of this name was declared in the configuration.
    pub fn is_configured(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// The effective threshold of the named logger: its own level if set,
    /// else the nearest configured ancestor's, else the root's.
    pub fn effective_level(&self, name: &str) -> Severity {
        let mut current = name;
        while !current.is_empty() {
            if let Some(node) = self.loggers.get(current) {
                if let Some(level) = node.level {
                    return level;
                }
            }
            current = match current.rfind('.') {
                Some(i) => &current[..i],
                None => "",
            };
        }
        self.root_level
    }

    /// Dispatch a record emitted on the named logger.
    ///
    /// Drops the record if it is below the logger's effective threshold.
    /// Otherwise delivers it to the logger's handlers and walks up the
    /// hierarchy while propagation holds, delivering to each ancestor
    /// whose own threshold admits the record. Handlers apply their own
    /// thresholds at every delivery.
    pub(crate) fn dispatch(&self, name: &str, record: &Record) {
        if record.severity < self.effective_level(name) {
            return;
        }

        let mut current = name;
        loop {
            if current.is_empty() {
                if current == name || record.severity >= self.root_level {
                    for handler in &self.root_handlers {
                        handler.emit(record);
                    }
                }
                return;
            }

            if let Some(node) = self.loggers.get(current) {
                let admitted = current == name
                    || node.level.map_or(true, |level| record.severity >= level);
                if admitted {
                    for handler in &node.handlers {
                        handler.emit(record);
                    }
                }
                if !node.propagate {
                    return;
                }
            }

            current = match current.rfind('.') {
                Some(i) => &current[..i],
                None => "",
            };
        }
    }

    #[cfg(test)]
    pub(crate) fn root_handler_count(&self) -> usize {
        self.root_handlers.len()
    }

    #[cfg(test)]
    pub(crate) fn root_console_handlers(&self) -> usize {
        self.root_handlers.iter().filter(|h| h.is_console()).count()
    }
}

/// A handle for emitting records on a named logger.
///
/// Cheap to create and scoped to its context's lifetime. Use the
/// [`debug!`](crate::debug), [`info!`](crate::info),
/// [`warning!`](crate::warning), [`error!`](crate::error) and
/// [`critical!`](crate::critical) macros to capture the call site.
pub struct Logger<'a> {
    context: &'a LoggingContext,
    name: String,
}

impl<'a> Logger<'a> {
    /// The logger's name; empty for the root logger.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The context this logger belongs to.
    pub fn context(&self) -> &'a LoggingContext {
        self.context
    }

    /// Whether a record at this severity would be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.context.effective_level(&self.name)
    }

    /// Emit a formatted message. Prefer the emission macros, which fill
    /// in the call site.
    pub fn log(&self, severity: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let record = Record::new(severity, site, args.to_string());
        self.context.dispatch(&self.name, &record);
    }

    /// Emit a value exposing the [`Describe`] capability, typically a
    /// caught error.
    pub fn log_value(&self, severity: Severity, site: CallSite, value: &dyn Describe) {
        if !self.enabled(severity) {
            return;
        }
        let record = Record::new(severity, site, value.describe());
        self.context.dispatch(&self.name, &record);
    }
}

/// Emit a record at an explicit severity, capturing the call site.
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let site = $crate::record::CallSite {
            module: module_path!(),
            file: file!(),
            line: line!(),
        };
        $logger.log($severity, site, format_args!($($arg)+))
    }};
}

/// Emit a [`Describe`](lantern_types::Describe) value (typically a caught
/// error) at an explicit severity, capturing the call site.
#[macro_export]
macro_rules! log_value {
    ($logger:expr, $severity:expr, $value:expr) => {{
        let site = $crate::record::CallSite {
            module: module_path!(),
            file: file!(),
            line: line!(),
        };
        $logger.log_value($severity, site, $value)
    }};
}

/// Emit a DEBUG record.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Emit an INFO record.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Emit a WARNING record.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Emit an ERROR record.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Emit a CRITICAL record.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
