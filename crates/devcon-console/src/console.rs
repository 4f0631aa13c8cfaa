//! The console: execution engine plus the state a render layer draws.

use devcon_types::error::Result;
use devcon_types::severity::Severity;
use devcon_types::style::TextStyle;

use crate::config::ConsoleConfig;
use crate::history::{CommandHistory, Recall};
use crate::presets::{MenuRow, PresetCatalog};
use crate::registry::{CommandHandler, CommandRegistry};
use crate::screen::{ScreenMessage, ScreenMessages};
use crate::sink::{AutoShow, ConsoleSignals, LogCounts, LogLine, LogSink};
use crate::tokenizer::tokenize;

/// Which console panels are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub console: bool,
    /// Severity counter panel.
    pub preview: bool,
    pub screen_messages: bool,
}

/// Outcome of activating a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetAction {
    /// The preset ran immediately; carries the `execute` result.
    Executed(bool),
    /// The preset text was copied into the input line.
    Filled,
}

/// An in-application debug console.
///
/// Owns the command registry, preset catalog, history, screen messages and
/// the current input line. The log itself is shared through [`LogSink`]
/// handles so other threads can write to it.
pub struct Console {
    config: ConsoleConfig,
    registry: CommandRegistry,
    presets: PresetCatalog,
    log: LogSink,
    history: CommandHistory,
    screen: ScreenMessages,
    input: String,
    help_text: String,
    expanded_group: Option<String>,
    view: ViewState,
}

fn auto_show(config: &ConsoleConfig) -> AutoShow {
    AutoShow {
        warning: config.auto_show_warning,
        error: config.auto_show_error,
        exception: config.auto_show_exception,
    }
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            registry: CommandRegistry::with_sentinel(config.sentinel()),
            presets: PresetCatalog::new(),
            log: LogSink::new(config.log_capacity, auto_show(&config)),
            history: CommandHistory::new(config.history_capacity),
            screen: ScreenMessages::new(),
            input: String::new(),
            help_text: String::new(),
            expanded_group: None,
            view: ViewState {
                screen_messages: config.show_screen_messages,
                ..ViewState::default()
            },
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Apply new capacities, echo and auto-show settings.
    ///
    /// The registry keeps the sentinel it was created with so existing
    /// prefixes stay valid.
    pub fn reconfigure(&mut self, config: ConsoleConfig) {
        self.log.set_capacity(config.log_capacity);
        self.log.set_auto_show(auto_show(&config));
        self.history.set_capacity(config.history_capacity);
        self.config = config;
    }

    /// A handle for writing to this console's log from anywhere.
    pub fn sink(&self) -> LogSink {
        self.log.clone()
    }

    // -- Commands --

    pub fn register_command(&mut self, prefix: &str, handler: Box<dyn CommandHandler>) -> Result<()> {
        self.registry.register(prefix, handler)
    }

    /// Register a closure as a command.
    pub fn register_fn<F>(&mut self, prefix: &str, handler: F) -> Result<()>
    where
        F: FnMut(&[&str]) -> Result<()> + 'static,
    {
        self.registry.register_fn(prefix, handler)
    }

    pub fn unregister_command(&mut self, prefix: &str) -> bool {
        self.registry.unregister(prefix)
    }

    pub fn clear_commands(&mut self) {
        self.registry.clear();
    }

    pub fn has_command(&self, prefix: &str) -> bool {
        self.registry.contains(prefix)
    }

    /// Registered prefixes, sorted.
    pub fn command_prefixes(&self) -> Vec<&str> {
        self.registry.prefixes()
    }

    /// Registered prefixes starting with `partial`.
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        self.registry.completions(partial)
    }

    /// Parse and execute a command line.
    ///
    /// Returns `true` when a handler was found and invoked, whether or not
    /// it succeeded. A handler failure is logged as an exception line and
    /// never propagates. Every non-empty line is recorded in history before
    /// lookup, so unknown commands can still be recalled.
    pub fn execute(&mut self, line: &str) -> bool {
        let line = line.trim();
        if self.config.echo_commands {
            self.log
                .log_styled(&format!(">{line}"), TextStyle::command());
        }
        if line.is_empty() {
            return false;
        }

        let tokens = tokenize(line);
        let Some(&prefix) = tokens.first() else {
            return false;
        };
        self.history.push(line);

        match self.registry.lookup(prefix) {
            Some(handler) => {
                log::debug!("executing {prefix} ({} args)", tokens.len() - 1);
                if let Err(e) = handler.invoke(&tokens) {
                    log::warn!("command {prefix} failed: {e}");
                    self.log.receive(&e.to_string(), "", Severity::Exception);
                }
                true
            },
            None => {
                self.log.log_styled(
                    &format!("No command '{prefix}' found."),
                    TextStyle::command(),
                );
                false
            },
        }
    }

    // -- Input line and history recall --

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Execute the current input line and clear it.
    pub fn submit(&mut self) -> bool {
        let line = std::mem::take(&mut self.input);
        self.execute(&line)
    }

    /// Replace the input line with the previous history entry.
    pub fn recall_previous(&mut self) {
        let recalled = self.history.step_back();
        Self::apply_recall(&mut self.input, recalled);
    }

    /// Replace the input line with the next history entry, or clear it once
    /// past the newest.
    pub fn recall_next(&mut self) {
        let recalled = self.history.step_forward();
        Self::apply_recall(&mut self.input, recalled);
    }

    fn apply_recall(input: &mut String, recalled: Recall<'_>) {
        match recalled {
            Recall::Entry(entry) => *input = entry.to_string(),
            Recall::Cleared => input.clear(),
            Recall::Unchanged => {},
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    // -- Presets --

    pub fn add_preset(
        &mut self,
        text: &str,
        name: &str,
        description: Option<&str>,
        group: Option<&str>,
        execute_immediately: bool,
    ) -> Result<()> {
        self.presets
            .add(text, name, description, group, execute_immediately)
    }

    pub fn remove_preset(&mut self, name: &str) -> bool {
        self.presets.remove_by_name(name)
    }

    pub fn remove_preset_at(&mut self, index: usize) -> bool {
        self.presets.remove_at(index)
    }

    pub fn clear_presets(&mut self) {
        self.presets.clear();
    }

    pub fn preset_texts(&self) -> Vec<String> {
        self.presets.texts()
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.presets.names()
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Expand `group` in the preset menu, or collapse it if already expanded.
    pub fn toggle_group(&mut self, group: &str) {
        if self.expanded_group.as_deref() == Some(group) {
            self.expanded_group = None;
        } else {
            self.expanded_group = Some(group.to_string());
        }
    }

    pub fn expanded_group(&self) -> Option<&str> {
        self.expanded_group.as_deref()
    }

    pub fn preset_menu(&self) -> Vec<MenuRow<'_>> {
        self.presets.menu(self.expanded_group.as_deref())
    }

    /// Activate the preset at `index` as if its button was pressed.
    ///
    /// Shows its description as help text, then either executes it or copies
    /// it into the input line. `None` if `index` is out of range.
    pub fn activate_preset(&mut self, index: usize) -> Option<PresetAction> {
        let entry = self.presets.get(index)?.clone();
        self.help_text = entry.description.unwrap_or_default();
        if entry.execute_immediately {
            Some(PresetAction::Executed(self.execute(&entry.text)))
        } else {
            self.input = entry.text;
            Some(PresetAction::Filled)
        }
    }

    /// Description of the last activated preset.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    // -- Logging --

    pub fn log(&self, text: &str) {
        self.log.log(text);
    }

    pub fn log_styled(&self, text: &str, style: TextStyle) {
        self.log.log_styled(text, style);
    }

    /// Record a raw log event (message, extra detail, severity).
    pub fn receive(&self, message: &str, detail: &str, severity: Severity) {
        self.log.receive(message, detail, severity);
    }

    pub fn clear_logs(&self) {
        self.log.clear();
    }

    pub fn log_lines(&self) -> Vec<LogLine> {
        self.log.lines()
    }

    pub fn log_counts(&self) -> LogCounts {
        self.log.counts()
    }

    /// Show `text` on screen for `duration` seconds in the configured
    /// screen style. Blank text is ignored.
    pub fn log_screen(&mut self, text: &str, duration: f32) {
        self.log_screen_styled(text, duration, self.config.screen_style);
    }

    pub fn log_screen_styled(&mut self, text: &str, duration: f32, style: TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        self.screen.push(text, duration, style);
    }

    pub fn screen_messages(&self) -> impl Iterator<Item = &ScreenMessage> {
        self.screen.iter()
    }

    // -- Frame update and view --

    /// Per-frame update with the elapsed time in seconds.
    ///
    /// Expires screen messages, opens the console if an auto-show event
    /// arrived, and returns the signals collected since the last tick.
    pub fn tick(&mut self, dt: f32) -> ConsoleSignals {
        self.screen.tick(dt);
        let signals = self.log.take_signals();
        if signals.reveal_console && !self.view.console {
            log::debug!("console revealed by log event");
            self.view.console = true;
        }
        signals
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn toggle_console(&mut self) {
        self.view.console = !self.view.console;
    }

    pub fn toggle_preview(&mut self) {
        self.view.preview = !self.view.preview;
    }

    pub fn toggle_screen_messages(&mut self) {
        self.view.screen_messages = !self.view.screen_messages;
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}
