//! src/call_site.rs
//! Caller location metadata attached to verbose log lines.

use std::borrow::Cow;
use std::fmt;

/// Source location of a logging call: file, enclosing function, and line.
///
/// The [`call_site!`](crate::call_site) macro captures the current location;
/// [`CallSite::from_parts`] builds one from explicit values, which tests and
/// bindings that thread their own location metadata use directly.
///
/// # Examples
///
/// ```
/// use diaglog::CallSite;
///
/// let site = CallSite::from_parts("src/app.rs", "main", 42);
/// assert_eq!(site.to_string(), "src/app.rs:main:42");
///
/// let site = diaglog::call_site!();
/// assert!(site.file().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    file: Cow<'static, str>,
    function: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Creates a call site from its parts.
    #[must_use]
    pub fn from_parts(
        file: impl Into<Cow<'static, str>>,
        function: impl Into<Cow<'static, str>>,
        line: u32,
    ) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Returns the source file recorded for the call.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the enclosing function name recorded for the call.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns the line number recorded for the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}
