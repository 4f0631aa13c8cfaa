//! Bridge from the `log` facade into the console log.

use log::{Level, LevelFilter, Log, Metadata, Record};

use devcon_types::severity::Severity;

use crate::sink::LogSink;

/// Target prefix of records emitted by this crate; never forwarded.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// A `log::Log` implementation that copies host records into a [`LogSink`].
///
/// Records may be emitted from any thread. An optional inner logger (for
/// example the host's `env_logger`) still receives every record it accepts.
pub struct ConsoleLogger {
    sink: LogSink,
    level: LevelFilter,
    inner: Option<(Box<dyn Log>, LevelFilter)>,
}

impl ConsoleLogger {
    /// Forward `Info` and above into `sink`.
    pub fn new(sink: LogSink) -> Self {
        Self {
            sink,
            level: LevelFilter::Info,
            inner: None,
        }
    }

    /// Most verbose level copied into the console.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Tee records to `inner`, which filters at `inner_level`.
    pub fn with_inner(mut self, inner: Box<dyn Log>, inner_level: LevelFilter) -> Self {
        self.inner = Some((inner, inner_level));
        self
    }

    fn max_level(&self) -> LevelFilter {
        match &self.inner {
            Some((_, inner_level)) => self.level.max(*inner_level),
            None => self.level,
        }
    }

    /// Install as the global logger.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn forwards(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level && !metadata.target().starts_with(OWN_TARGET)
    }
}

/// Map a `log` level onto a console severity.
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info | Level::Debug | Level::Trace => Severity::Verbose,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.forwards(metadata)
            || self
                .inner
                .as_ref()
                .is_some_and(|(inner, _)| inner.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if let Some((inner, _)) = &self.inner
            && inner.enabled(record.metadata())
        {
            inner.log(record);
        }
        if self.forwards(record.metadata()) {
            let message = record.args().to_string();
            self.sink
                .receive(&message, "", severity_for(record.level()));
        }
    }

    fn flush(&self) {
        if let Some((inner, _)) = &self.inner {
            inner.flush();
        }
    }
}
