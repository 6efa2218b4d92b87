//! Process-wide dispatch through the single active handler
//!
//! All call sites funnel through [`log`], which reads the one global
//! handler slot and invokes the handler synchronously on the calling
//! thread. [`set_handler`] is the sole mutator of the slot.
//!
//! The slot is initialized lazily, at most once, on first use (first log
//! call or first explicit replacement) by probing the built-in adapters
//! in a fixed priority order: the `tracing` adapter, then the `log`
//! facade adapter, then disabled. The console adapter is never selected
//! automatically because it is unconditionally verbose.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::handler::SharedHandler;
use crate::level::LogLevel;
use crate::record::{LogRecord, MessageThunk};

/// The process-wide handler slot.
///
/// Holds the currently active handler, or `None` when logging is
/// disabled. Reads and writes go through the lock, so every log call
/// observes a single consistent handler value.
struct Dispatcher {
    slot: RwLock<Option<SharedHandler>>,
}

impl Dispatcher {
    fn with_default_handler() -> Self {
        Self {
            slot: RwLock::new(select_default_handler()),
        }
    }

    #[cfg(test)]
    fn with_handler(handler: Option<SharedHandler>) -> Self {
        Self {
            slot: RwLock::new(handler),
        }
    }

    /// Atomically install a new handler and return the prior one.
    fn replace(&self, handler: Option<SharedHandler>) -> Option<SharedHandler> {
        let mut slot = self.slot.write();
        std::mem::replace(&mut *slot, handler)
    }

    /// Invoke the active handler, if any.
    ///
    /// The handler reference is cloned out of the slot and the lock is
    /// released before the invocation, so a slow handler never blocks
    /// replacement and a handler that logs recursively cannot deadlock
    /// the slot. Behavior of recursive logging beyond that is undefined.
    fn dispatch(&self, message: MessageThunk<'_>, record: &LogRecord<'_>) {
        let handler = self.slot.read().clone();
        if let Some(handler) = handler {
            handler.log(message, record);
        }
    }
}

// Lazy gives the one-time, race-free default selection: concurrent first
// calls block until a single initializer run completes, so the adapter
// probes execute at most once per process.
static DISPATCHER: Lazy<Dispatcher> = Lazy::new(Dispatcher::with_default_handler);

/// Probe the built-in adapters in priority order.
fn select_default_handler() -> Option<SharedHandler> {
    #[cfg(feature = "tracing-backend")]
    if let Some(handler) = crate::adapters::tracing_handler() {
        return Some(handler);
    }
    #[cfg(feature = "log-backend")]
    if let Some(handler) = crate::adapters::log_facade_handler() {
        return Some(handler);
    }
    None
}

/// Replace the active handler.
///
/// Passing `None` disables logging entirely. Returns the previously
/// active handler so it can be restored later, which is how tests
/// install a recording handler and put the prior one back:
///
/// ```
/// use logseam::{set_handler, console_handler};
///
/// let prior = set_handler(console_handler());
/// // ... log something ...
/// set_handler(prior);
/// ```
///
/// Safe against concurrent calls to itself and to [`log`]; in-flight log
/// calls observe either the old or the new handler, never a torn value.
/// This operation cannot fail.
pub fn set_handler(handler: Option<SharedHandler>) -> Option<SharedHandler> {
    DISPATCHER.replace(handler)
}

/// Log a message. Not meant to be called directly; use the leveled
/// macros, which capture the call-site location automatically.
///
/// Dispatches synchronously on the calling thread: no buffering, no
/// batching, no asynchrony. If no handler is active the call returns
/// immediately without touching the thunk. This operation cannot fail.
#[allow(clippy::too_many_arguments)]
pub fn log(
    message: MessageThunk<'_>,
    level: LogLevel,
    subsystem: Option<&str>,
    category: Option<&str>,
    file: &str,
    context: &str,
    line: u32,
) {
    let record = LogRecord {
        level,
        subsystem,
        category,
        file,
        context,
        line,
    };
    DISPATCHER.dispatch(message, &record);
}
