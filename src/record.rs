//! Per-call log record and message thunk types

use crate::level::LogLevel;

/// Deferred message construction.
///
/// The thunk produces the formatted message text only when invoked. A
/// handler that consumes the record invokes it at most once; a handler
/// that drops the record must never invoke it. This is what makes
/// suppressed logging free of formatting cost.
pub type MessageThunk<'a> = &'a dyn Fn() -> String;

/// Call-site metadata accompanying a message.
///
/// Created transiently per log call and borrowed for the duration of the
/// handler invocation; never stored or shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Severity of the message
    pub level: LogLevel,
    /// Caller-supplied tag identifying the emitting library or application
    pub subsystem: Option<&'a str>,
    /// Caller-supplied tag identifying the part of the code involved
    pub category: Option<&'a str>,
    /// Source file of the call site
    pub file: &'a str,
    /// Enclosing context (module path) of the call site
    pub context: &'a str,
    /// Source line of the call site
    pub line: u32,
}
