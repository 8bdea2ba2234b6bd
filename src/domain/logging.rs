//! Structured logging for every layer.
//!
//! Domain and application code log through the `log_*!` macros; the sink and
//! the clock are installed once at start-up by the presentation layer. Until
//! then entries go nowhere and timestamps come from a counter, which is what
//! native test runs see.

use derive_more::Display;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = "INFO")]
    Info,
    #[display(fmt = "WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer and component that produced an entry
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// Chart container the entry is about, when there is one.
    pub container: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            container: None,
        }
    }

    pub fn for_container(self, container_id: impl Into<String>) -> Self {
        Self { container: Some(container_id.into()), ..self }
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Whether entries at `level` are kept. Checked before an entry is built.
    fn accepts(&self, _level: LogLevel) -> bool {
        true
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the process-wide logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the process-wide clock. Later calls are ignored.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &Discard,
    }
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    match TIME_PROVIDER.get() {
        Some(clock) => clock.as_ref(),
        None => &Sequence,
    }
}

/// Build and hand over one entry. Used by the `log_*!` macros.
#[doc(hidden)]
pub fn emit(level: LogLevel, component: LogComponent, message: String, container: Option<&str>) {
    let logger = get_logger();
    if !logger.accepts(level) {
        return;
    }
    let entry = LogEntry::new(level, component, message);
    logger.log(match container {
        Some(id) => entry.for_container(id),
        None => entry,
    });
}

struct Discard;

impl Logger for Discard {
    fn log(&self, _entry: LogEntry) {}

    fn accepts(&self, _level: LogLevel) -> bool {
        false
    }
}

struct Sequence;

impl TimeProvider for Sequence {
    fn current_timestamp(&self) -> u64 {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $component:expr, container = $container:expr; $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::$level,
            $component,
            format!($($arg)*),
            Some($container),
        )
    };
    ($level:ident, $component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::$level, $component, format!($($arg)*), None)
    };
}

/// Trace and debug entries are only emitted by debug builds.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::__log_at!(Trace, $($arg)*)
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::__log_at!(Debug, $($arg)*)
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::__log_at!(Info, $($arg)*) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::__log_at!(Warn, $($arg)*) };
}

/// `log_error!(component, container = id; "...")` tags the entry with a container id.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::__log_at!(Error, $($arg)*) };
}
