//! Record formatting.

use crate::record::Record;

/// Timestamp format used for the `{timestamp}` placeholder.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders records according to a placeholder pattern.
///
/// Supported placeholders: `{level}`, `{timestamp}`, `{module}`, `{file}`,
/// `{line}`, `{message}`. Unknown text is passed through verbatim.
#[derive(Debug, Clone)]
pub struct Formatter {
    pattern: String,
}

impl Formatter {
    /// Create a formatter from a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Render a record as a single line of text.
    ///
    /// `{message}` is expanded last, so placeholder-looking text inside a
    /// message is never re-expanded.
    pub fn render(&self, record: &Record) -> String {
        self.pattern
            .replace("{level}", &record.severity.to_string())
            .replace(
                "{timestamp}",
                &record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            )
            .replace("{module}", record.module)
            .replace("{file}", record.file)
            .replace("{line}", &record.line.to_string())
            .replace("{message}", &record.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CallSite;
    use lantern_types::Severity;

    fn record(message: &str) -> Record {
        Record::new(
            Severity::Info,
            CallSite {
                module: "demo::sites",
                file: "sites.rs",
                line: 42,
            },
            message.to_string(),
        )
    }

    #[test]
    fn expands_placeholders() {
        let formatter = Formatter::new("{level} {module} {line} {message}");
        assert_eq!(
            formatter.render(&record("hello")),
            "INFO demo::sites 42 hello"
        );
    }

    #[test]
    fn timestamp_placeholder_is_rendered() {
        let formatter = Formatter::new("{timestamp}");
        let line = formatter.render(&record("ignored"));
        // e.g. "2026-08-30 12:34:56.789"
        assert_eq!(line.len(), 23);
        assert!(!line.contains("{timestamp}"));
    }

    #[test]
    fn message_text_is_not_re_expanded() {
        let formatter = Formatter::new("{level} {message}");
        assert_eq!(
            formatter.render(&record("literal {line} token")),
            "INFO literal {line} token"
        );
    }

    #[test]
    fn literal_text_passes_through() {
        let formatter = Formatter::new("[{level}] -- {message}");
        assert_eq!(formatter.render(&record("x")), "[INFO] -- x");
    }
}
