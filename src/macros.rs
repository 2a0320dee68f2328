//! src/macros.rs
//! Call-site capture and the convenience logging macros.

/// Captures the caller's file, function, and line as a
/// [`CallSite`](crate::CallSite).
///
/// # Examples
///
/// ```
/// let site = diaglog::call_site!();
/// assert!(site.file().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::from_parts(file!(), $crate::__function_name!(), line!())
    };
}

// Resolves the enclosing function's name from the type name of a local item,
// trimming the module path and any closure segments.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.strip_suffix("::{{closure}}").unwrap_or(name);
        match name.rfind("::") {
            Some(position) => &name[position + 2..],
            None => name,
        }
    }};
}

/// Emits one formatted record, capturing the timestamp and call site at the
/// invocation point.
///
/// The two-argument form writes through the process-wide logger in
/// [`global`](crate::global); the `to:` form writes through an explicit
/// [`Logger`](crate::Logger). The message is built with [`std::fmt`], so
/// placeholder/argument mismatches are compile errors rather than runtime
/// hazards. This macro family is the sanctioned way application code emits
/// diagnostics; it exists so call sites need not thread timestamps and
/// locations through every call.
///
/// # Examples
///
/// ```
/// use diaglog::{LogLevel, LogMode, Logger};
///
/// let mut logger = Logger::with_mode(Vec::new(), LogMode::Concise);
/// diaglog::diag_log!(to: logger, LogLevel::Error, "failed: {}", 7);
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[ERROR] failed: 7\n");
/// ```
#[macro_export]
macro_rules! diag_log {
    (to: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let record = $crate::Record::new(
            $level,
            $crate::timestamp::now(),
            $crate::call_site!(),
            ::std::format!($($arg)+),
        );
        $logger.log(&record);
    }};
    ($level:expr, $($arg:tt)+) => {{
        let record = $crate::Record::new(
            $level,
            $crate::timestamp::now(),
            $crate::call_site!(),
            ::std::format!($($arg)+),
        );
        $crate::global::emit(&record);
    }};
}

/// Emits a `CRITICAL` record through the process-wide logger.
#[macro_export]
macro_rules! diag_critical {
    ($($arg:tt)+) => {
        $crate::diag_log!($crate::LogLevel::Critical, $($arg)+)
    };
}

/// Emits an `ERROR` record through the process-wide logger.
#[macro_export]
macro_rules! diag_error {
    ($($arg:tt)+) => {
        $crate::diag_log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Emits a `WARNING` record through the process-wide logger.
#[macro_export]
macro_rules! diag_warning {
    ($($arg:tt)+) => {
        $crate::diag_log!($crate::LogLevel::Warning, $($arg)+)
    };
}

/// Emits an `INFO` record through the process-wide logger.
#[macro_export]
macro_rules! diag_info {
    ($($arg:tt)+) => {
        $crate::diag_log!($crate::LogLevel::Info, $($arg)+)
    };
}
