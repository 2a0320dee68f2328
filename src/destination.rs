//! src/destination.rs
//! Output streams a process-wide logger writes to.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// The active output stream of a logger: standard error or an open log file.
///
/// Exactly one destination is active per logger at any time. Replacing it via
/// [`Logger::replace_writer`](crate::Logger::replace_writer) or
/// [`global::set_log_file`](crate::global::set_log_file) hands the previous
/// handle back to the caller, who decides whether to flush, keep, or drop it;
/// dropping a `File` variant closes it.
///
/// # Examples
///
/// ```no_run
/// use std::io::Write;
/// use diaglog::Destination;
///
/// let mut destination = Destination::create("/tmp/app.log")?;
/// destination.write_all(b"[INFO] ready\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub enum Destination {
    /// The process's standard error stream (the default).
    Stderr,
    /// An open log file.
    File(File),
}

impl Destination {
    /// Opens `path` for writing with create/truncate semantics.
    ///
    /// On failure the error is surfaced and nothing else happens; the caller
    /// still holds whatever destination it had before.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::File(file))
    }

    /// Opens `path` for writing, preserving and appending to existing contents.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::File(file))
    }

    /// Reports whether the destination is the standard error stream.
    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self, Self::Stderr)
    }
}

impl Default for Destination {
    /// Standard error, the stream the process starts out logging to.
    fn default() -> Self {
        Self::Stderr
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr => io::stderr().write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().flush(),
            Self::File(file) => file.flush(),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().write_all(buf),
            Self::File(file) => file.write_all(buf),
        }
    }
}
