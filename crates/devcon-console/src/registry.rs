//! Command handler trait and the prefix -> handler registry.

use std::collections::HashMap;
use std::fmt;

use devcon_types::error::{ConsoleError, Result};

/// Character every command prefix must start with by default.
pub const DEFAULT_SENTINEL: char = '/';

/// A registered command.
///
/// `args[0]` is always the prefix the command was registered under; the
/// remaining tokens are its arguments. Returning `Err` reports a failure that
/// the console logs without propagating.
pub trait CommandHandler {
    fn invoke(&mut self, args: &[&str]) -> Result<()>;
}

impl<F> CommandHandler for F
where
    F: FnMut(&[&str]) -> Result<()>,
{
    fn invoke(&mut self, args: &[&str]) -> Result<()> {
        self(args)
    }
}

/// Registry of command handlers keyed by prefix.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn CommandHandler>>,
    sentinel: Option<char>,
}

impl CommandRegistry {
    /// Create an empty registry enforcing the default sentinel, unless the
    /// `bare-prefixes` feature is enabled.
    pub fn new() -> Self {
        if cfg!(feature = "bare-prefixes") {
            Self::with_sentinel(None)
        } else {
            Self::with_sentinel(Some(DEFAULT_SENTINEL))
        }
    }

    /// Create an empty registry. `None` accepts any prefix without whitespace.
    pub fn with_sentinel(sentinel: Option<char>) -> Self {
        Self {
            commands: HashMap::new(),
            sentinel,
        }
    }

    pub fn sentinel(&self) -> Option<char> {
        self.sentinel
    }

    /// Register a handler under `prefix`.
    ///
    /// Fails on a blank prefix, a prefix missing the sentinel or containing
    /// whitespace, or a prefix that is already registered. A failed call
    /// leaves the registry untouched.
    pub fn register(&mut self, prefix: &str, handler: Box<dyn CommandHandler>) -> Result<()> {
        self.validate(prefix)?;
        if self.commands.contains_key(prefix) {
            return Err(ConsoleError::DuplicatePrefix(prefix.to_string()));
        }
        log::debug!("registered command {prefix}");
        self.commands.insert(prefix.to_string(), handler);
        Ok(())
    }

    /// Register a closure as a handler.
    pub fn register_fn<F>(&mut self, prefix: &str, handler: F) -> Result<()>
    where
        F: FnMut(&[&str]) -> Result<()> + 'static,
    {
        self.register(prefix, Box::new(handler))
    }

    fn validate(&self, prefix: &str) -> Result<()> {
        if prefix.trim().is_empty() {
            return Err(ConsoleError::InvalidArgument(
                "prefix cannot be empty".to_string(),
            ));
        }
        if let Some(sentinel) = self.sentinel
            && !prefix.starts_with(sentinel)
        {
            return Err(ConsoleError::InvalidFormat(format!(
                "prefix '{prefix}' must start with '{sentinel}'"
            )));
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(ConsoleError::InvalidFormat(format!(
                "prefix '{prefix}' cannot contain whitespace"
            )));
        }
        Ok(())
    }

    /// Remove a command. Returns `false` if it was not registered.
    pub fn unregister(&mut self, prefix: &str) -> bool {
        self.commands.remove(prefix).is_some()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.commands.contains_key(prefix)
    }

    /// Find the handler for `prefix`.
    pub fn lookup(&mut self, prefix: &str) -> Option<&mut (dyn CommandHandler + 'static)> {
        self.commands.get_mut(prefix).map(|h| &mut **h)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered prefixes, sorted.
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    /// Registered prefixes starting with `partial`, sorted.
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        let mut matches: Vec<&str> = self
            .commands
            .keys()
            .filter(|prefix| prefix.starts_with(partial))
            .map(String::as_str)
            .collect();
        matches.sort_unstable();
        matches
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("prefixes", &self.prefixes())
            .field("sentinel", &self.sentinel)
            .finish()
    }
}
