//! Sample emission sites: a module-level function, an error handler, and
//! an associated function.

use lantern_core::{info, log_value, warning, Logger, Severity};
use std::fs;

/// Module-level function emitting an informational record.
pub fn announce_startup(logger: &Logger<'_>) {
    info!(logger, "info log test");
}

/// Provoke a real error and log its describe() text.
pub fn report_failed_read(logger: &Logger<'_>) {
    if let Err(e) = fs::read_to_string("does-not-exist.txt") {
        log_value!(logger, Severity::Error, &e);
    }
}

/// A type whose associated function emits a warning.
pub struct StatusProbe;

impl StatusProbe {
    /// Emit a warning record without a `self` receiver.
    pub fn report(logger: &Logger<'_>) {
        warning!(logger, "warning log test");
    }
}
