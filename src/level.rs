//! Log level definition

use std::fmt;

/// Severity tag attached to every message.
///
/// The facility itself never filters on the level; it is an opaque,
/// ordered tag forwarded to the handler, which decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed technical information
    Verbose,
    /// Information useful for debugging
    Debug,
    /// Information helpful for troubleshooting
    Info,
    /// Conditions which might lead to a failure
    Warning,
    /// Failures
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}
