//! Built-in handler adapters
//!
//! Each adapter wraps one concrete backend behind the
//! [`LogHandler`](crate::handler::LogHandler) contract and is exposed
//! through a factory returning `Option<SharedHandler>`. `None` means the
//! backend is unavailable in the current environment; that is an expected
//! signal consumed by the default-selection policy, not an error.

mod console;
#[cfg(feature = "log-backend")]
mod log_facade;
#[cfg(feature = "tracing-backend")]
mod tracing_backend;

pub use console::{console_handler, ConsoleHandler};
#[cfg(feature = "log-backend")]
pub use log_facade::{log_facade_handler, LogFacadeHandler};
#[cfg(feature = "tracing-backend")]
pub use tracing_backend::{tracing_handler, TracingHandler};
