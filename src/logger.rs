//! src/logger.rs
//! The logging component: one destination, one verbosity mode.

use std::io::{self, Write};
use std::mem;

use crate::mode::LogMode;
use crate::record::Record;

mod guard;

pub use guard::ModeGuard;

/// Streaming logger that renders [`Record`] values into an
/// [`io::Write`] target.
///
/// The logger pairs the underlying writer with the active [`LogMode`]; both
/// are read at the moment a record is emitted, never deferred. Constructing
/// and passing `Logger` values explicitly is the primary design (tests build
/// isolated loggers over [`Vec<u8>`] instead of mutating shared state), while
/// the [`global`](crate::global) module offers a mutex-guarded process-wide
/// instance for simple programs.
///
/// A plain `Logger` is single-owner state: all mutation goes through
/// `&mut self`, so it is safe by construction but makes no cross-thread
/// promise. Wrap it in a mutex (as the global instance does) when several
/// threads must share one destination.
///
/// # Examples
///
/// Collect diagnostics into a [`Vec<u8>`]:
///
/// ```
/// use diaglog::{CallSite, LogLevel, LogMode, Logger, Record};
///
/// let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
/// let record = Record::new(
///     LogLevel::Info,
///     "2026/08/27 10:00:00",
///     CallSite::from_parts("src/app.rs", "main", 7),
///     "ready",
/// );
/// logger.write_record(&record)?;
///
/// assert_eq!(logger.into_inner(), b"[INFO] ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Redirect subsequent lines to a new writer while keeping the old one:
///
/// ```
/// use diaglog::{CallSite, LogLevel, LogMode, Logger, Record};
///
/// let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
/// let record = Record::new(
///     LogLevel::Warning,
///     "2026/08/27 10:00:00",
///     CallSite::from_parts("src/app.rs", "main", 9),
///     "first",
/// );
/// logger.write_record(&record)?;
///
/// let earlier = logger.replace_writer(Vec::new());
/// assert!(earlier.starts_with(b"[WARNING] first"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Logger<W> {
    writer: W,
    mode: LogMode,
}

impl<W> Logger<W> {
    /// Creates a logger that prints full metadata (the verbose default).
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_mode(writer, LogMode::Verbose)
    }

    /// Creates a logger with the provided [`LogMode`].
    #[must_use]
    pub const fn with_mode(writer: W, mode: LogMode) -> Self {
        Self { writer, mode }
    }

    /// Returns the active verbosity mode.
    #[must_use]
    pub const fn mode(&self) -> LogMode {
        self.mode
    }

    /// Updates the verbosity mode used for subsequent records.
    pub fn set_mode(&mut self, mode: LogMode) {
        self.mode = mode;
    }

    /// Temporarily overrides the mode, restoring the previous one when the
    /// returned [`ModeGuard`] drops.
    pub fn scoped_mode(&mut self, mode: LogMode) -> ModeGuard<'_, W> {
        let previous = self.mode;
        self.mode = mode;
        ModeGuard::new(self, previous)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the logger and returns the writer and mode.
    #[must_use]
    pub fn into_parts(self) -> (W, LogMode) {
        (self.writer, self.mode)
    }

    /// Replaces the underlying writer while preserving the mode.
    ///
    /// The previous writer is returned so lines emitted before the
    /// replacement can be inspected or flushed before the handle is dropped.
    /// This is the only way the active destination changes after
    /// construction, and it swaps in place; there is no window in which the
    /// logger lacks a destination.
    #[must_use = "the returned writer may hold lines emitted before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }

    /// Maps the logger's writer into a different type while preserving the mode.
    ///
    /// Useful when a destination is upgraded mid-run, for example wrapping a
    /// plain file into a counting or teeing writer.
    #[must_use]
    pub fn map_writer<F, W2>(self, f: F) -> Logger<W2>
    where
        F: FnOnce(W) -> W2,
    {
        Logger {
            writer: f(self.writer),
            mode: self.mode,
        }
    }
}

impl<W> Default for Logger<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Writes one newline-terminated line for `record`, surfacing write errors.
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        record.render_line_to_writer(self.mode, &mut self.writer)
    }

    /// Best-effort emission: writes the record and discards any write error.
    ///
    /// Emission never fails observably to the caller. That is a known weak
    /// point: a full disk or a closed descriptor loses the line silently.
    /// Callers that need to observe failures use
    /// [`write_record`](Self::write_record) instead.
    pub fn log(&mut self, record: &Record) {
        let _ = self.write_record(record);
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site::CallSite;
    use crate::level::LogLevel;

    fn record(level: LogLevel, text: &'static str) -> Record {
        Record::new(
            level,
            "2026/08/27 10:00:00",
            CallSite::from_parts("src/app.rs", "main", 42),
            text,
        )
    }

    #[test]
    fn new_logger_defaults_to_verbose() {
        let logger = Logger::new(Vec::<u8>::new());
        assert_eq!(logger.mode(), LogMode::Verbose);
    }

    #[test]
    fn write_record_appends_newline_terminated_lines() {
        let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
        logger
            .write_record(&record(LogLevel::Warning, "vanished"))
            .expect("write succeeds");
        logger
            .write_record(&record(LogLevel::Error, "partial"))
            .expect("write succeeds");

        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[WARNING] vanished"));
        assert_eq!(lines.next(), Some("[ERROR] partial"));
        assert!(lines.next().is_none());
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn mode_is_read_at_emission_time() {
        let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
        logger
            .write_record(&record(LogLevel::Info, "one"))
            .expect("write succeeds");
        logger.set_mode(LogMode::Verbose);
        logger
            .write_record(&record(LogLevel::Info, "two"))
            .expect("write succeeds");

        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[INFO] one"));
        assert_eq!(
            lines.next(),
            Some("[INFO] 2026/08/27 10:00:00 src/app.rs:main:42: two")
        );
    }

    #[test]
    fn replace_writer_returns_previous_output() {
        let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
        logger.log(&record(LogLevel::Info, "first"));

        let earlier = logger.replace_writer(Vec::new());
        logger.log(&record(LogLevel::Info, "second"));

        assert_eq!(earlier, b"[INFO] first\n".to_vec());
        assert_eq!(logger.into_inner(), b"[INFO] second\n".to_vec());
    }

    #[test]
    fn map_writer_preserves_mode() {
        let logger = Logger::with_mode(Vec::<u8>::new(), LogMode::Concise);
        let mapped = logger.map_writer(std::io::Cursor::new);
        assert_eq!(mapped.mode(), LogMode::Concise);
    }

    #[test]
    fn into_parts_returns_writer_and_mode() {
        let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
        logger.log(&record(LogLevel::Info, "kept"));
        let (writer, mode) = logger.into_parts();
        assert_eq!(mode, LogMode::Concise);
        assert_eq!(writer, b"[INFO] kept\n".to_vec());
    }

    #[test]
    fn scoped_mode_restores_on_drop() {
        let mut logger = Logger::with_mode(Vec::new(), LogMode::Verbose);
        {
            let mut scoped = logger.scoped_mode(LogMode::Concise);
            scoped.log(&record(LogLevel::Info, "inside"));
            assert_eq!(scoped.mode(), LogMode::Concise);
        }
        assert_eq!(logger.mode(), LogMode::Verbose);
    }

    #[test]
    fn default_builds_verbose_logger_over_default_writer() {
        let logger: Logger<Vec<u8>> = Logger::default();
        assert_eq!(logger.mode(), LogMode::Verbose);
        assert!(logger.get_ref().is_empty());
    }
}
