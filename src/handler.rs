//! Handler trait definition

use std::sync::Arc;

use crate::record::{LogRecord, MessageThunk};

/// The capability every backend adapter implements.
///
/// A handler receives every log call with the message still unevaluated
/// and decides whether to realize and forward it or drop it untouched.
///
/// Implementations:
/// - [`ConsoleHandler`](crate::adapters::ConsoleHandler): one line per message on stderr
/// - [`TracingHandler`](crate::adapters::TracingHandler): forwards into the `tracing` ecosystem
/// - [`LogFacadeHandler`](crate::adapters::LogFacadeHandler): forwards into the `log` facade
/// - any `Fn(MessageThunk, &LogRecord) + Send + Sync` closure (see below)
///
/// # Thread safety
///
/// Handlers are invoked from whatever thread the application logs from,
/// so implementations must be `Send + Sync` and are responsible for any
/// synchronization their backend requires.
///
/// # Laziness
///
/// A handler that drops the record must not invoke the thunk at all, and
/// a handler that consumes it invokes it at most once.
pub trait LogHandler: Send + Sync {
    /// Receive one log call.
    fn log(&self, message: MessageThunk<'_>, record: &LogRecord<'_>);
}

/// Type alias for the shared handler reference held by the dispatcher.
pub type SharedHandler = Arc<dyn LogHandler>;

// Closures are handlers, so tests and ad-hoc adapters need no newtype.
impl<F> LogHandler for F
where
    F: Fn(MessageThunk<'_>, &LogRecord<'_>) + Send + Sync,
{
    fn log(&self, message: MessageThunk<'_>, record: &LogRecord<'_>) {
        self(message, record)
    }
}
