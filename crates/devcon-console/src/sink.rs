//! Thread-safe log storage shared between the console and log producers.
//!
//! Log events may arrive from any thread (see [`ConsoleLogger`]), so the log
//! buffer, per-severity counters and pending render signals live behind one
//! mutex. [`LogSink`] is the cloneable handle to that state.
//!
//! [`ConsoleLogger`]: crate::ConsoleLogger

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use devcon_types::severity::Severity;
use devcon_types::style::TextStyle;

use crate::buffer::BoundedLog;

/// One display line of the console log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub severity: Severity,
    pub style: TextStyle,
}

/// Number of received log events per severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogCounts {
    pub verbose: u64,
    pub warning: u64,
    pub error: u64,
    pub exception: u64,
}

impl LogCounts {
    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Verbose => self.verbose,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Exception => self.exception,
        }
    }

    fn bump(&mut self, severity: Severity) {
        let slot = match severity {
            Severity::Verbose => &mut self.verbose,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
            Severity::Exception => &mut self.exception,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Which severities open the console when received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoShow {
    pub warning: bool,
    pub error: bool,
    pub exception: bool,
}

impl AutoShow {
    fn applies_to(self, severity: Severity) -> bool {
        match severity {
            Severity::Verbose => false,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Exception => self.exception,
        }
    }
}

/// Requests for the render layer, collected between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleSignals {
    /// New lines arrived; the log view should scroll to the newest one.
    pub scroll_to_bottom: bool,
    /// An auto-show severity was received; the console should open.
    pub reveal_console: bool,
}

#[derive(Debug)]
struct SharedLog {
    lines: BoundedLog<LogLine>,
    counts: LogCounts,
    auto_show: AutoShow,
    signals: ConsoleSignals,
}

impl SharedLog {
    fn append(&mut self, text: String, severity: Severity, style: TextStyle) {
        self.lines.push(LogLine {
            text,
            severity,
            style,
        });
        self.signals.scroll_to_bottom = true;
    }
}

/// Cloneable, `Send + Sync` handle to the console log.
#[derive(Debug, Clone)]
pub struct LogSink {
    shared: Arc<Mutex<SharedLog>>,
}

impl LogSink {
    pub fn new(capacity: usize, auto_show: AutoShow) -> Self {
        Self {
            shared: Arc::new(Mutex::new(SharedLog {
                lines: BoundedLog::new(capacity),
                counts: LogCounts::default(),
                auto_show,
                signals: ConsoleSignals::default(),
            })),
        }
    }

    // Every mutation is a single push or assignment, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, SharedLog> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a plain line. Blank text is ignored.
    pub fn log(&self, text: &str) {
        self.log_styled(text, TextStyle::PLAIN);
    }

    /// Append a line with display attributes. Blank text is ignored.
    pub fn log_styled(&self, text: &str, style: TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        self.lock()
            .append(text.to_string(), Severity::Verbose, style);
    }

    /// Entry point for raw log events.
    ///
    /// Prefixes the severity tag, appends `detail` on its own line for
    /// exceptions, counts the event and raises the reveal signal when the
    /// severity is configured to auto-show. Only blank verbose messages are
    /// dropped; tagged severities are always recorded.
    pub fn receive(&self, message: &str, detail: &str, severity: Severity) {
        if severity == Severity::Verbose && message.trim().is_empty() {
            return;
        }
        let mut text = format!("{}{message}", severity.tag());
        if severity == Severity::Exception && !detail.trim().is_empty() {
            text.push('\n');
            text.push_str(detail.trim_end());
        }
        let mut shared = self.lock();
        shared.append(text, severity, TextStyle::for_severity(severity));
        shared.counts.bump(severity);
        if shared.auto_show.applies_to(severity) {
            shared.signals.reveal_console = true;
        }
    }

    /// Drop every line and reset the counters.
    pub fn clear(&self) {
        let mut shared = self.lock();
        shared.lines.clear();
        shared.counts = LogCounts::default();
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lock().lines.snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().lines.is_empty()
    }

    pub fn counts(&self) -> LogCounts {
        self.lock().counts
    }

    pub fn set_capacity(&self, capacity: usize) {
        self.lock().lines.set_capacity(capacity);
    }

    pub fn set_auto_show(&self, auto_show: AutoShow) {
        self.lock().auto_show = auto_show;
    }

    /// Return and reset the pending render signals.
    pub fn take_signals(&self) -> ConsoleSignals {
        std::mem::take(&mut self.lock().signals)
    }
}
