use super::Logger;
use crate::mode::LogMode;

/// RAII guard that temporarily overrides a [`Logger`]'s [`LogMode`].
///
/// Instances are created by [`Logger::scoped_mode`]. While the guard is
/// alive, records written through it use the scoped mode; dropping the guard
/// restores the mode that was active before. The guard implements
/// [`Deref`](std::ops::Deref) and [`DerefMut`](std::ops::DerefMut) so callers
/// can invoke logger methods on it without additional boilerplate.
///
/// # Examples
///
/// ```
/// use diaglog::{CallSite, LogLevel, LogMode, Logger, Record};
///
/// let mut logger = Logger::with_mode(Vec::new(), LogMode::Verbose);
/// let record = Record::new(
///     LogLevel::Info,
///     "2026/08/27 10:00:00",
///     CallSite::from_parts("src/app.rs", "main", 3),
///     "brief",
/// );
///
/// {
///     let mut scoped = logger.scoped_mode(LogMode::Concise);
///     scoped.log(&record);
/// }
///
/// assert_eq!(logger.mode(), LogMode::Verbose);
/// assert_eq!(logger.into_inner(), b"[INFO] brief\n".to_vec());
/// ```
#[must_use = "dropping the guard immediately restores the previous mode"]
pub struct ModeGuard<'a, W> {
    logger: Option<&'a mut Logger<W>>,
    previous: LogMode,
}

impl<'a, W> ModeGuard<'a, W> {
    pub(crate) const fn new(logger: &'a mut Logger<W>, previous: LogMode) -> Self {
        Self {
            logger: Some(logger),
            previous,
        }
    }

    /// Returns the [`LogMode`] that will be restored when the guard drops.
    #[must_use]
    pub const fn previous_mode(&self) -> LogMode {
        self.previous
    }

    /// Consumes the guard without restoring the previous [`LogMode`].
    ///
    /// The temporary override becomes the logger's new baseline, and the
    /// underlying [`Logger`] is returned so the caller can keep writing or
    /// adjust the mode again explicitly.
    pub fn into_inner(mut self) -> &'a mut Logger<W> {
        self.logger
            .take()
            .expect("mode guard must own a logger")
    }
}

impl<W> Drop for ModeGuard<'_, W> {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            logger.set_mode(self.previous);
        }
    }
}

impl<W> std::ops::Deref for ModeGuard<'_, W> {
    type Target = Logger<W>;

    fn deref(&self) -> &Self::Target {
        self.logger
            .as_deref()
            .expect("mode guard remains active while borrowed")
    }
}

impl<W> std::ops::DerefMut for ModeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
            .as_deref_mut()
            .expect("mode guard remains active while borrowed")
    }
}
