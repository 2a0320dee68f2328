#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diaglog` is a minimal process-wide logging facility. Callers emit leveled,
//! timestamped diagnostic lines to a single configurable destination, with a
//! global verbosity toggle deciding how much call-site metadata each line
//! carries. The crate deliberately stays small: no rotation, no structured
//! key-value payloads, no asynchronous or buffered writers, no per-level
//! filtering, and no fan-out to multiple sinks.
//!
//! # Design
//!
//! The crate exposes [`Logger`], a lightweight wrapper around an
//! [`io::Write`](std::io::Write) implementor that pairs the writer with the
//! active [`LogMode`]. Diagnostics are modelled as [`Record`] values (level,
//! pre-formatted timestamp, [`CallSite`], message text) and rendered as one
//! newline-terminated line per emission. [`Destination`] covers the two
//! streams a process-wide logger targets in practice: standard error (the
//! default) and an open log file.
//!
//! Constructing and passing `Logger` values explicitly is the primary design;
//! the [`global`] module offers a mutex-guarded process-wide instance for
//! simple programs, and the [`diag_log!`] family of macros captures the
//! timestamp and caller location at the invocation point before forwarding to
//! it.
//!
//! # Invariants
//!
//! - A logger always has exactly one active destination and one active mode;
//!   reads of either are always defined.
//! - Every emission produces exactly one newline-terminated line, rendered
//!   with whichever destination and mode are active at the moment of the
//!   call. Nothing is deferred or batched.
//! - A [`LogMode::Verbose`] line carries a strict superset of the fields of
//!   the [`LogMode::Concise`] line for the same record.
//! - Lines emitted from a single thread appear in call order. Across threads
//!   the global instance serializes whole lines through its mutex; plain
//!   `Logger` values make no cross-thread promise beyond what the underlying
//!   writer provides.
//!
//! # Errors
//!
//! Opening a destination surfaces [`std::io::Error`] and leaves the previous
//! destination and mode untouched. Best-effort emission via [`Logger::log`]
//! and [`global::emit`] discards write failures, a deliberate and documented
//! weak point; [`Logger::write_record`] surfaces them for callers that need
//! to observe the failure.
//!
//! # Examples
//!
//! Render diagnostics into an in-memory buffer and inspect the output:
//!
//! ```
//! use diaglog::{LogLevel, LogMode, Logger};
//!
//! let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
//! diaglog::diag_log!(to: logger, LogLevel::Warning, "cache miss on {}", "index");
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output, "[WARNING] cache miss on index\n");
//! ```

mod call_site;
mod destination;
mod level;
mod logger;
mod macros;
mod mode;
mod record;

pub mod global;
pub mod timestamp;

pub use call_site::CallSite;
pub use destination::Destination;
pub use level::LogLevel;
pub use logger::{Logger, ModeGuard};
pub use mode::LogMode;
pub use record::Record;
