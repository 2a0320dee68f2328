//! src/level.rs
//! Severity taxonomy for emitted log lines.

use std::fmt;

/// Severity attached to a single log line, independent of the verbosity mode.
///
/// Levels are ordered numerically with `Critical` as the most severe (0) and
/// `Info` as the least (3). [`LogLevel::Invalid`] is a sentinel used as the
/// fallback for out-of-range numeric values; it renders with its own label
/// rather than being rejected, so a record carrying it is still emitted.
///
/// # Examples
///
/// ```
/// use diaglog::LogLevel;
///
/// assert!(LogLevel::Critical < LogLevel::Info);
/// assert_eq!(LogLevel::from(1), LogLevel::Error);
/// assert_eq!(LogLevel::from(200), LogLevel::Invalid);
/// assert_eq!(LogLevel::Warning.label(), "WARNING");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// Unrecoverable failure; the process is unlikely to continue.
    Critical = 0,
    /// An operation failed.
    Error = 1,
    /// Something suspicious happened but the operation continued.
    Warning = 2,
    /// Informational message.
    Info = 3,
    /// Sentinel for values outside the defined severities.
    Invalid = 4,
}

impl LogLevel {
    /// Returns the label printed at the start of each log line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Invalid => "INVALID",
        }
    }

    /// Reports whether the level is a real severity rather than the sentinel.
    #[must_use]
    pub const fn is_severity(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<u8> for LogLevel {
    /// Converts the numeric encoding into a level.
    ///
    /// Values 0 through 3 map to the defined severities; everything else
    /// folds into [`LogLevel::Invalid`]. The conversion is total, so callers
    /// never need to validate the input themselves.
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Critical,
            1 => Self::Error,
            2 => Self::Warning,
            3 => Self::Info,
            _ => Self::Invalid,
        }
    }
}

impl From<LogLevel> for u8 {
    /// Returns the numeric encoding of the level.
    fn from(level: LogLevel) -> Self {
        level as Self
    }
}
