//! Process-wide logger shared by the convenience macros.
//!
//! Simple programs that do not want to thread a [`Logger`] through their call
//! graph use this module instead: one mutex-guarded instance, initialized at
//! process start with standard error and [`LogMode::Verbose`], reconfigured
//! only through the setters below, and torn down implicitly at process exit.
//!
//! The mutex is the synchronized variant of the facility; the owned
//! [`Logger`] type remains available for callers who prefer single-owner
//! state and dependency injection. Locking happens per operation, so each
//! emitted line is written atomically with respect to other threads using
//! this module.

use std::io;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::destination::Destination;
use crate::logger::Logger;
use crate::mode::LogMode;
use crate::record::Record;

static GLOBAL: Mutex<Logger<Destination>> =
    Mutex::new(Logger::with_mode(Destination::Stderr, LogMode::Verbose));

fn global() -> MutexGuard<'static, Logger<Destination>> {
    // A poisoned lock only means another thread panicked mid-operation; the
    // logger state itself stays coherent, so recover the guard.
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Opens `path` with create/truncate semantics and installs it as the active
/// destination of the process-wide logger.
///
/// Returns the previous destination so the caller controls its lifecycle;
/// dropping it closes a file handle. On failure the error is returned and the
/// active destination and mode are left untouched; the open happens before
/// any state is swapped.
///
/// # Examples
///
/// ```no_run
/// let previous = diaglog::global::set_log_file("/var/log/app.log")?;
/// drop(previous);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn set_log_file(path: impl AsRef<Path>) -> io::Result<Destination> {
    let destination = Destination::create(path)?;
    Ok(global().replace_writer(destination))
}

/// Replaces the process-wide destination with an already-open one.
///
/// Returns the previous destination, mirroring
/// [`Logger::replace_writer`]. Useful for installing an append-mode file via
/// [`Destination::append`] or restoring [`Destination::Stderr`].
#[must_use = "the returned destination may hold lines emitted before the replacement"]
pub fn replace_destination(destination: Destination) -> Destination {
    global().replace_writer(destination)
}

/// Returns the verbosity mode of the process-wide logger.
#[must_use]
pub fn log_mode() -> LogMode {
    global().mode()
}

/// Sets the verbosity mode of the process-wide logger.
pub fn set_log_mode(mode: LogMode) {
    global().set_mode(mode);
}

/// Emits one record through the process-wide logger, discarding write errors.
///
/// The destination and mode in effect at the moment of the call are used.
/// The [`diag_log!`](crate::diag_log) macros are the sanctioned entry point;
/// they capture the timestamp and call site before forwarding here.
pub fn emit(record: &Record) {
    global().log(record);
}

/// Flushes the process-wide destination.
pub fn flush() -> io::Result<()> {
    global().flush()
}
