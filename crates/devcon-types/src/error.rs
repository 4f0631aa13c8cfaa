//! Error types for devcon.

use std::io;

/// Errors produced by the console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Blank or missing registration input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A command prefix broke the sentinel or whitespace rule.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("command with prefix '{0}' already exists")]
    DuplicatePrefix(String),

    /// A command handler reported a failure.
    #[error("{0}")]
    Handler(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;
