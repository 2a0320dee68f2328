//! src/timestamp.rs
//! Wall-clock capture for the convenience macros.
//!
//! Timestamps are rendered once at the call site and travel through the
//! emission path as plain strings, so the printed time reflects the instant
//! of invocation even if the write itself is delayed.

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Format applied to captured timestamps, e.g. `2026/08/27 14:03:59`.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// Returns the current wall-clock time as a human-readable string.
///
/// Uses the local UTC offset when it can be determined and falls back to UTC
/// otherwise, so the call never fails.
///
/// # Examples
///
/// ```
/// let stamp = diaglog::timestamp::now();
/// assert_eq!(stamp.len(), "2026/08/27 14:03:59".len());
/// ```
#[must_use]
pub fn now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format(now)
}

fn format(moment: OffsetDateTime) -> String {
    moment
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| String::from("????/??/?? ??:??:??"))
}
