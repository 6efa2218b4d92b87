//! Logseam
//!
//! A minimal, pluggable logging seam. Call sites emit leveled, lazily
//! formatted messages tagged with an optional subsystem and category; a
//! single globally installed handler decides what happens to them
//! (forward to a backend, print, or discard).
//!
//! ## Logging
//!
//! To log a message, call the macro matching the desired level, with an
//! optional subsystem (identifying your library or application) and / or
//! category (identifying the part of the code the log relates to):
//!
//! ```
//! use logseam::log_info;
//!
//! let temperature = 23;
//! log_info!(Some("com.myapp"), Some("Weather"), "temperature is {}", temperature);
//! ```
//!
//! The message is forwarded to the active handler together with the level,
//! subsystem, category and call-site location. By default the handler is
//! selected lazily on first use: the `tracing` adapter if a global
//! dispatcher is installed, otherwise the `log` facade adapter if a
//! consumer is installed, otherwise logging is disabled. The console
//! handler is available only by explicit opt-in because it logs
//! everything unconditionally.
//!
//! ## Interfacing with other loggers
//!
//! If the default handler does not suit your needs (or you want to
//! inhibit logging), call [`set_handler`] with your own handler (or
//! `None`). Any `Fn(MessageThunk, &LogRecord) + Send + Sync` closure is a
//! handler, so forwarding into another framework is a few lines:
//!
//! ```
//! use logseam::{set_handler, MessageThunk, LogRecord};
//! use std::sync::Arc;
//!
//! let prior = set_handler(Some(Arc::new(
//!     |message: MessageThunk<'_>, record: &LogRecord<'_>| {
//!         eprintln!("{:?}: {}", record.level, message());
//!     },
//! )));
//! # logseam::set_handler(prior);
//! ```
//!
//! ## Laziness
//!
//! The message is passed to the handler as an unevaluated thunk. A
//! handler that drops the record never invokes it, so suppressed logging
//! costs no formatting work.

pub mod adapters;
pub mod dispatcher;
pub mod handler;
pub mod level;
mod macros;
pub mod record;

pub use adapters::{console_handler, ConsoleHandler};
#[cfg(feature = "log-backend")]
pub use adapters::{log_facade_handler, LogFacadeHandler};
#[cfg(feature = "tracing-backend")]
pub use adapters::{tracing_handler, TracingHandler};
pub use dispatcher::{log, set_handler};
pub use handler::{LogHandler, SharedHandler};
pub use level::LogLevel;
pub use record::{LogRecord, MessageThunk};

/// Official version number of the facility.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
