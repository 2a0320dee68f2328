//! src/record.rs
//! Structured representation of one diagnostic line.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use crate::call_site::CallSite;
use crate::level::LogLevel;
use crate::mode::LogMode;

/// One leveled, timestamped diagnostic ready for emission.
///
/// A record owns everything a line can print: the [`LogLevel`], the
/// pre-formatted timestamp string captured at the call site, the
/// [`CallSite`], and the message text. Which of those fields actually appear
/// is decided at render time by the [`LogMode`], so the same record can be
/// written verbosely or concisely without being rebuilt.
///
/// # Examples
///
/// ```
/// use diaglog::{CallSite, LogLevel, LogMode, Record};
///
/// let record = Record::new(
///     LogLevel::Error,
///     "2026/08/27 10:00:00",
///     CallSite::from_parts("src/app.rs", "main", 42),
///     "failed: 7",
/// );
///
/// assert_eq!(record.format(LogMode::Concise), "[ERROR] failed: 7");
/// assert_eq!(
///     record.format(LogMode::Verbose),
///     "[ERROR] 2026/08/27 10:00:00 src/app.rs:main:42: failed: 7",
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    level: LogLevel,
    timestamp: Cow<'static, str>,
    site: CallSite,
    text: Cow<'static, str>,
}

impl Record {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        level: LogLevel,
        timestamp: impl Into<Cow<'static, str>>,
        site: CallSite,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            level,
            timestamp: timestamp.into(),
            site,
            text: text.into(),
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the timestamp string captured when the record was created.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the call site recorded for the emission.
    #[must_use]
    pub const fn site(&self) -> &CallSite {
        &self.site
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the record as a single line, without the trailing newline.
    ///
    /// Under [`LogMode::Verbose`] the line is
    /// `[LEVEL] timestamp file:function:line: message`; under
    /// [`LogMode::Concise`] it is `[LEVEL] message`.
    #[must_use]
    pub fn format(&self, mode: LogMode) -> String {
        if mode.includes_metadata() {
            format!(
                "[{}] {} {}: {}",
                self.level, self.timestamp, self.site, self.text
            )
        } else {
            format!("[{}] {}", self.level, self.text)
        }
    }

    /// Writes the record as one newline-terminated line.
    pub fn render_line_to_writer<W>(&self, mode: LogMode, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        if mode.includes_metadata() {
            writeln!(
                writer,
                "[{}] {} {}: {}",
                self.level, self.timestamp, self.site, self.text
            )
        } else {
            writeln!(writer, "[{}] {}", self.level, self.text)
        }
    }
}

impl fmt::Display for Record {
    /// Formats the record in its verbose shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.level, self.timestamp, self.site, self.text
        )
    }
}
