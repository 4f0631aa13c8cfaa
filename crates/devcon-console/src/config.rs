//! Console configuration, loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use devcon_types::error::{ConsoleError, Result};
use devcon_types::style::TextStyle;

use crate::registry::DEFAULT_SENTINEL;

/// Tunables for a [`Console`](crate::Console).
///
/// Every key is optional in the TOML form; missing keys take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsoleConfig {
    /// Maximum number of log lines kept.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    /// Maximum number of executed commands kept for recall.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Echo every executed line into the log.
    #[serde(default)]
    pub echo_commands: bool,
    /// Open the console when a warning is received.
    #[serde(default)]
    pub auto_show_warning: bool,
    #[serde(default)]
    pub auto_show_error: bool,
    #[serde(default)]
    pub auto_show_exception: bool,
    /// Character every command prefix must start with.
    #[serde(default = "default_sentinel")]
    pub prefix_sentinel: char,
    /// Enforce `prefix_sentinel` on registration.
    #[serde(default = "default_require_sentinel")]
    pub require_sentinel: bool,
    /// Whether screen messages are drawn from the start.
    #[serde(default = "yes")]
    pub show_screen_messages: bool,
    /// Style of screen messages logged without an explicit one.
    ///
    /// In TOML: `screen_style = { color = "#FFCC00", bold = true }`.
    #[serde(default)]
    pub screen_style: TextStyle,
}

fn default_log_capacity() -> usize {
    64
}
fn default_history_capacity() -> usize {
    16
}
fn default_sentinel() -> char {
    DEFAULT_SENTINEL
}
fn default_require_sentinel() -> bool {
    !cfg!(feature = "bare-prefixes")
}
fn yes() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_capacity: default_log_capacity(),
            history_capacity: default_history_capacity(),
            echo_commands: false,
            auto_show_warning: false,
            auto_show_error: false,
            auto_show_exception: false,
            prefix_sentinel: default_sentinel(),
            require_sentinel: default_require_sentinel(),
            show_screen_messages: true,
            screen_style: TextStyle::PLAIN,
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("loaded console config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_capacity == 0 {
            return Err(ConsoleError::Config(
                "log_capacity must be at least 1".to_string(),
            ));
        }
        if self.prefix_sentinel.is_whitespace() {
            return Err(ConsoleError::Config(
                "prefix_sentinel cannot be whitespace".to_string(),
            ));
        }
        Ok(())
    }

    /// The sentinel the registry should enforce, if any.
    pub fn sentinel(&self) -> Option<char> {
        self.require_sentinel.then_some(self.prefix_sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.log_capacity, 64);
        assert_eq!(config.history_capacity, 16);
        assert!(config.show_screen_messages);
    }

    #[test]
    fn partial_toml_overrides_named_keys() {
        let config = ConsoleConfig::from_toml(
            r#"
log_capacity = 8
echo_commands = true
auto_show_error = true
prefix_sentinel = "!"
"#,
        )
        .unwrap();
        assert_eq!(config.log_capacity, 8);
        assert!(config.echo_commands);
        assert!(config.auto_show_error);
        assert!(!config.auto_show_warning);
        assert_eq!(config.prefix_sentinel, '!');
        assert_eq!(config.history_capacity, 16);
    }

    #[test]
    fn screen_style_parses_hex_color() {
        let config = ConsoleConfig::from_toml(
            r##"screen_style = { color = "#FFCC00", bold = true }"##,
        )
        .unwrap();
        let color = config.screen_style.color.unwrap();
        assert_eq!((color.r, color.g, color.b), (0xFF, 0xCC, 0x00));
        assert!(config.screen_style.bold);
        assert!(!config.screen_style.italic);
    }

    #[test]
    fn bad_screen_color_is_toml_error() {
        let err = ConsoleConfig::from_toml(r#"screen_style = { color = "orange" }"#).unwrap_err();
        assert!(matches!(err, ConsoleError::TomlParse(_)));
    }

    #[test]
    fn default_sentinel_follows_bare_prefixes_feature() {
        let config = ConsoleConfig::default();
        assert_eq!(config.require_sentinel, !cfg!(feature = "bare-prefixes"));
        if cfg!(feature = "bare-prefixes") {
            assert_eq!(config.sentinel(), None);
        } else {
            assert_eq!(config.sentinel(), Some(DEFAULT_SENTINEL));
        }
    }

    #[test]
    fn sentinel_can_be_disabled() {
        let config = ConsoleConfig::from_toml("require_sentinel = false").unwrap();
        assert_eq!(config.sentinel(), None);
    }

    #[test]
    fn zero_log_capacity_rejected() {
        let err = ConsoleConfig::from_toml("log_capacity = 0").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn wrong_type_is_toml_error() {
        let err = ConsoleConfig::from_toml("log_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConsoleError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_capacity = 4").unwrap();
        let config = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(config.history_capacity, 4);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
