//! Basic console handler

use std::sync::Arc;

use crate::handler::{LogHandler, SharedHandler};
use crate::record::{LogRecord, MessageThunk};

/// A handler that writes one formatted line per message to stderr.
///
/// Always available, and always realizes the message, so it can be quite
/// verbose and slow the application down. It is the last-resort fallback
/// for simple setups and is only ever installed by explicit opt-in via
/// [`set_handler`](crate::set_handler), never by default selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHandler;

impl ConsoleHandler {
    /// Create a new console handler.
    pub fn new() -> Self {
        Self
    }
}

fn format_line(message: &str, record: &LogRecord<'_>) -> String {
    let tags = match (record.subsystem, record.category) {
        (Some(subsystem), Some(category)) => format!("({}|{}) ", subsystem, category),
        (Some(subsystem), None) => format!("({}) ", subsystem),
        (None, Some(category)) => format!("({}) ", category),
        (None, None) => String::new(),
    };
    format!(
        "[{}] {}{} ({}:{} {})",
        record.level, tags, message, record.file, record.line, record.context
    )
}

impl LogHandler for ConsoleHandler {
    fn log(&self, message: MessageThunk<'_>, record: &LogRecord<'_>) {
        eprintln!("{}", format_line(&message(), record));
    }
}

/// Console handler factory. Always available.
pub fn console_handler() -> Option<SharedHandler> {
    Some(Arc::new(ConsoleHandler::new()))
}
