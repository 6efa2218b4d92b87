//! Call-site macros
//!
//! The macros wrap the formatting call in a thunk and capture the
//! call-site location, then funnel into [`dispatcher::log`](crate::dispatcher::log).
//! Formatting runs only if a handler realizes the thunk.
//!
//! Libraries that always log under one subsystem can pin it in their own
//! wrapper macros:
//!
//! ```
//! macro_rules! app_log_info {
//!     ($category:expr, $($arg:tt)+) => {
//!         logseam::log_info!(Some("com.myapp"), $category, $($arg)+)
//!     };
//! }
//!
//! app_log_info!(Some("Weather"), "temperature is {}", 23);
//! ```

/// Generic macro for logging a message with an explicit [`LogLevel`](crate::LogLevel).
///
/// `$subsystem` and `$category` are `Option<&str>` expressions; the rest
/// is a standard `format!` string with arguments.
#[macro_export]
macro_rules! log {
    ($level:expr, $subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::dispatcher::log(
            &|| ::std::format!($($arg)+),
            $level,
            $subsystem,
            $category,
            ::std::file!(),
            ::std::module_path!(),
            ::std::line!(),
        )
    };
}

/// Log a message at the verbose level.
#[macro_export]
macro_rules! log_verbose {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Verbose, $subsystem, $category, $($arg)+)
    };
}

/// Log a message at the debug level.
#[macro_export]
macro_rules! log_debug {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $subsystem, $category, $($arg)+)
    };
}

/// Log a message at the info level.
#[macro_export]
macro_rules! log_info {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $subsystem, $category, $($arg)+)
    };
}

/// Log a message at the warning level.
#[macro_export]
macro_rules! log_warning {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $subsystem, $category, $($arg)+)
    };
}

/// Log a message at the error level.
#[macro_export]
macro_rules! log_error {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $subsystem, $category, $($arg)+)
    };
}
