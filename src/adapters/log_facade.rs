//! `log` facade handler

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::handler::{LogHandler, SharedHandler};
use crate::level::LogLevel;
use crate::record::{LogRecord, MessageThunk};

/// A handler that forwards messages through the `log` facade.
///
/// Subsystem and category compose into the record target
/// (`subsystem.category`), the established routing/filtering key of that
/// ecosystem, and the call-site file/line/context travel in the record
/// metadata. The installed consumer is asked whether the record is
/// enabled before the message is realized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeHandler;

impl LogFacadeHandler {
    /// Create a new log facade handler.
    pub fn new() -> Self {
        Self
    }
}

// One interned target per distinct subsystem+category pair, kept for the
// process lifetime. `log` records borrow their target, so interning gives
// each pair a stable `'static` string while bounding allocations to the
// number of distinct pairs.
static TARGETS: Lazy<Mutex<HashMap<(Option<String>, Option<String>), &'static str>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn target_for(subsystem: Option<&str>, category: Option<&str>) -> &'static str {
    let key = (
        subsystem.map(str::to_owned),
        category.map(str::to_owned),
    );
    let mut cache = TARGETS.lock();
    if let Some(target) = cache.get(&key) {
        return target;
    }
    let composed = match (subsystem, category) {
        (Some(subsystem), Some(category)) => format!("{}.{}", subsystem, category),
        (Some(subsystem), None) => subsystem.to_owned(),
        (None, Some(category)) => category.to_owned(),
        (None, None) => env!("CARGO_PKG_NAME").to_owned(),
    };
    let interned: &'static str = Box::leak(composed.into_boxed_str());
    cache.insert(key, interned);
    interned
}

fn severity(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Verbose => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

impl LogHandler for LogFacadeHandler {
    fn log(&self, message: MessageThunk<'_>, record: &LogRecord<'_>) {
        let target = target_for(record.subsystem, record.category);
        let level = severity(record.level);
        let logger = log::logger();
        let metadata = log::Metadata::builder().level(level).target(target).build();
        if !logger.enabled(&metadata) {
            return;
        }
        let text = message();
        logger.log(
            &log::Record::builder()
                .args(format_args!("{}", text))
                .level(level)
                .target(target)
                .file(Some(record.file))
                .line(Some(record.line))
                .module_path(Some(record.context))
                .build(),
        );
    }
}

/// Log facade handler factory.
///
/// Returns `None` while the facade's max level is `Off`, its resting
/// state until a consumer installs itself and raises the level. Adapter
/// unavailability is an expected outcome, not an error.
pub fn log_facade_handler() -> Option<SharedHandler> {
    if log::max_level() == log::LevelFilter::Off {
        return None;
    }
    Some(Arc::new(LogFacadeHandler::new()))
}
