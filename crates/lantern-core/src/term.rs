//! Terminal utilities for colorized log output.

use colored::Colorize;
use lantern_types::Severity;
use std::io::{self, IsTerminal};

/// Check if stderr is attached to a controlling terminal.
pub fn in_controlling_terminal() -> bool {
    io::stderr().is_terminal()
}

/// Color a rendered log line according to its severity.
///
/// The `colored` crate suppresses escape codes on its own when output is
/// not a terminal or `NO_COLOR` is set.
pub fn paint(severity: Severity, line: &str) -> String {
    match severity {
        Severity::Debug => line.green().to_string(),
        Severity::Info => line.to_string(),
        Severity::Warning => line.yellow().to_string(),
        Severity::Error => line.red().to_string(),
        Severity::Critical => line.bright_red().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painting_preserves_the_message_text() {
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ] {
            let painted = paint(severity, "warning log test");
            assert!(painted.contains("warning log test"));
        }
    }
}
