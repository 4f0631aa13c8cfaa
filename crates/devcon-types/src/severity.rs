//! Severity levels of log events received by the console.

use serde::{Deserialize, Serialize};

/// Severity of a received log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plain informational output.
    #[default]
    Verbose,
    Warning,
    Error,
    /// A failure raised by executing code, usually with extra detail.
    Exception,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Verbose,
        Severity::Warning,
        Severity::Error,
        Severity::Exception,
    ];

    /// Tag prepended to the displayed line, empty for verbose output.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Verbose => "",
            Severity::Warning => "Warning: ",
            Severity::Error => "Error: ",
            Severity::Exception => "Exception: ",
        }
    }

    /// Human-readable label for preview panels.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Verbose => "Verbose",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Exception => "Exception",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_has_no_tag() {
        assert_eq!(Severity::Verbose.tag(), "");
        assert_eq!(Severity::Exception.tag(), "Exception: ");
    }

    #[test]
    fn default_is_verbose() {
        assert_eq!(Severity::default(), Severity::Verbose);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: Severity = serde_json::from_str("\"exception\"").unwrap();
        assert_eq!(back, Severity::Exception);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = Severity::ALL.iter().map(|s| s.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), 4);
    }
}
