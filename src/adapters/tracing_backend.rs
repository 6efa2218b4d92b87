//! `tracing` ecosystem handler

use std::sync::Arc;

use crate::handler::{LogHandler, SharedHandler};
use crate::level::LogLevel;
use crate::record::{LogRecord, MessageThunk};

/// A handler that forwards messages as `tracing` events.
///
/// Levels map onto [`tracing::Level`]; subsystem, category and the
/// call-site location travel as event fields. The message is realized
/// only when the installed subscriber actually enables the event, so
/// filtered-out messages still cost no formatting work.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl TracingHandler {
    /// Create a new tracing handler.
    pub fn new() -> Self {
        Self
    }
}

impl LogHandler for TracingHandler {
    fn log(&self, message: MessageThunk<'_>, record: &LogRecord<'_>) {
        let subsystem = record.subsystem.unwrap_or("");
        let category = record.category.unwrap_or("");
        // The event macros evaluate their fields only when the event is
        // enabled, which keeps the thunk unrealized for filtered levels.
        match record.level {
            LogLevel::Verbose => tracing::trace!(
                subsystem,
                category,
                loc.file = record.file,
                loc.line = record.line,
                loc.context = record.context,
                "{}",
                message()
            ),
            LogLevel::Debug => tracing::debug!(
                subsystem,
                category,
                loc.file = record.file,
                loc.line = record.line,
                loc.context = record.context,
                "{}",
                message()
            ),
            LogLevel::Info => tracing::info!(
                subsystem,
                category,
                loc.file = record.file,
                loc.line = record.line,
                loc.context = record.context,
                "{}",
                message()
            ),
            LogLevel::Warning => tracing::warn!(
                subsystem,
                category,
                loc.file = record.file,
                loc.line = record.line,
                loc.context = record.context,
                "{}",
                message()
            ),
            LogLevel::Error => tracing::error!(
                subsystem,
                category,
                loc.file = record.file,
                loc.line = record.line,
                loc.context = record.context,
                "{}",
                message()
            ),
        }
    }
}

/// Tracing handler factory.
///
/// Returns `None` until a global `tracing` dispatcher has been installed,
/// the crate's signal that the backend is actually wired up. Adapter
/// unavailability is an expected outcome, not an error.
pub fn tracing_handler() -> Option<SharedHandler> {
    if !tracing::dispatcher::has_been_set() {
        return None;
    }
    Some(Arc::new(TracingHandler::new()))
}
