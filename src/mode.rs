//! src/mode.rs
//! Output verbosity modes.

/// Controls how much metadata a [`Logger`](crate::Logger) prints per line.
///
/// `Verbose` lines carry the timestamp and caller file/function/line in
/// addition to the level label and message; `Concise` lines carry only the
/// label and message. The verbose rendering is a strict field superset of the
/// concise one, and both are deterministic for a given record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogMode {
    /// Include the timestamp and caller file/function/line with every line.
    Verbose,
    /// Print only the level label and the message text.
    Concise,
}

impl LogMode {
    /// Reports whether lines rendered under this mode carry timestamp and
    /// call-site metadata.
    ///
    /// Exposing the behaviour as a method avoids requiring callers to
    /// pattern-match on the enum when mirroring the logger's formatting
    /// policy elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use diaglog::LogMode;
    ///
    /// assert!(LogMode::Verbose.includes_metadata());
    /// assert!(!LogMode::Concise.includes_metadata());
    /// ```
    #[must_use]
    pub const fn includes_metadata(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl Default for LogMode {
    /// The process starts out verbose.
    fn default() -> Self {
        Self::Verbose
    }
}

impl From<bool> for LogMode {
    /// Converts a boolean verbosity flag into a [`LogMode`].
    ///
    /// `true` selects [`LogMode::Verbose`] while `false` selects
    /// [`LogMode::Concise`], so call sites that already track verbosity as a
    /// flag can adopt the enum without branching on the variants themselves.
    fn from(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Concise }
    }
}

impl From<LogMode> for bool {
    /// Converts a [`LogMode`] back into a boolean verbosity flag.
    ///
    /// Delegates to [`LogMode::includes_metadata`] so the mapping stays
    /// consistent if further variants are ever introduced.
    fn from(mode: LogMode) -> Self {
        mode.includes_metadata()
    }
}
