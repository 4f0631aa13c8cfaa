//! Debug console core.
//!
//! Command lines are split by the tokenizer, the first token is looked up in
//! a prefix registry and the handler receives every token. Around that sit a
//! preset catalog for one-click commands, bounded log/history buffers and
//! timed screen messages. Rendering is left to the host, which reads
//! snapshots from [`Console`] once per frame.

mod buffer;
pub mod config;
mod console;
mod history;
mod logger;
pub mod presets;
mod registry;
mod screen;
mod sink;
pub mod tokenizer;

/// Fixed-capacity FIFO that drops its oldest entry when full.
pub use buffer::BoundedLog;
/// Console tunables loaded from TOML.
pub use config::ConsoleConfig;
/// The console engine and its view state.
pub use console::{Console, PresetAction, ViewState};
/// Command history with a recall cursor.
pub use history::{CommandHistory, Recall};
/// `log` facade bridge into the console log.
pub use logger::{ConsoleLogger, severity_for};
/// Preset catalog and menu rows.
pub use presets::{MenuRow, PresetCatalog, PresetEntry, UNGROUPED_LABEL};
/// Prefix-keyed command dispatch.
pub use registry::{CommandHandler, CommandRegistry, DEFAULT_SENTINEL};
/// Timed on-screen messages.
pub use screen::{ScreenMessage, ScreenMessages};
/// Shared log storage and render signals.
pub use sink::{AutoShow, ConsoleSignals, LogCounts, LogLine, LogSink};
/// Tokenizer for command lines.
pub use tokenizer::tokenize;
