//! Core trait definitions for Lantern abstractions.

/// Capability for values that can be rendered as log message text.
///
/// Caught errors are logged through this capability: the record message
/// is the error's `describe()` text. Plain text takes the ordinary
/// format-string path and never touches this trait.
pub trait Describe {
    /// Render the value as log message text.
    fn describe(&self) -> String;
}

impl<E: std::error::Error> Describe for E {
    fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_as_their_display_form() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(err.describe(), "no such file");
    }

    #[test]
    fn parse_errors_describe_too() {
        let err = "twelve".parse::<i32>().unwrap_err();
        assert!(!err.describe().is_empty());
    }
}
