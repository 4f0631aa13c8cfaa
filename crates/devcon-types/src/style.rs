//! Display attributes for log lines and screen messages.
//!
//! The console never generates markup itself. It stores a `TextStyle`
//! next to each line and the render layer decides how to draw it.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::severity::Severity;

/// Optional color plus bold/italic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl TextStyle {
    /// No color, regular weight.
    pub const PLAIN: Self = Self {
        color: None,
        bold: false,
        italic: false,
    };

    pub const fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Style used for echoed commands and "not found" reports.
    pub const fn command() -> Self {
        Self::colored(Color::CYAN).italic()
    }

    /// Default style for a received log event of the given severity.
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Verbose => Self::PLAIN,
            Severity::Warning => Self::colored(Color::YELLOW).italic(),
            Severity::Error => Self::colored(Color::RED).bold(),
            Severity::Exception => Self::colored(Color::RED).bold(),
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}
