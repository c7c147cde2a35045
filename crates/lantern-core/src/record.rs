//! Log records and the call sites they originate from.

use chrono::{DateTime, Local};
use lantern_types::Severity;

/// The source location a record was emitted from.
///
/// Captured by the emission macros via `module_path!()`, `file!()` and
/// `line!()`.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    /// Module path of the emitting code
    pub module: &'static str,
    /// Source file of the emitting code
    pub file: &'static str,
    /// Line number of the emitting code
    pub line: u32,
}

/// A single log record.
#[derive(Debug, Clone)]
pub struct Record {
    /// When the record was created
    pub timestamp: DateTime<Local>,
    /// Record severity
    pub severity: Severity,
    /// Module path of the call site
    pub module: &'static str,
    /// Source file of the call site
    pub file: &'static str,
    /// Line number of the call site
    pub line: u32,
    /// Free-text message
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current local time.
    pub fn new(severity: Severity, site: CallSite, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            module: site.module,
            file: site.file,
            line: site.line,
            message,
        }
    }
}
