//! Leveled logger behind the `log` facade.
//!
//! Levels are a bitmask so single levels can be switched off independently.
//! Entries go to the sink installed with [`set_log_sink`], or to stderr.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;
use std::sync::mpsc::Sender;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};

// Bitflags for log levels
pub const LOG_LEVEL_ERROR: u8 = 1;
pub const LOG_LEVEL_WARN: u8 = 2;
pub const LOG_LEVEL_INFO: u8 = 4;
pub const LOG_LEVEL_TRACE: u8 = 8;

pub const LOG_LEVEL_NONE: u8 = 0;
pub const LOG_LEVEL_ALL: u8 = LOG_LEVEL_ERROR | LOG_LEVEL_WARN | LOG_LEVEL_INFO | LOG_LEVEL_TRACE;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 1,
    Warning = 2,
    Info = 4,
    Trace = 8,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warning,
            Level::Info => LogLevel::Info,
            // debug shares the trace bit
            Level::Debug | Level::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
    pub thread_id: u32,
}

// Global state
pub static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LOG_LEVEL_ERROR | LOG_LEVEL_WARN | LOG_LEVEL_INFO); // Default safe mask
pub static GLOBAL_LOG_SENDER: OnceLock<Sender<LogEntry>> = OnceLock::new();

static LOGGER: PluginLogger = PluginLogger;

pub struct PluginLogger;

fn level_enabled(mask: u8, level: LogLevel) -> bool {
    mask & (level as u8) != 0
}

#[cfg(windows)]
fn current_thread_id() -> u32 {
    // Manual binding for GetCurrentThreadId
    #[link(name = "kernel32")]
    unsafe extern "system" {
        fn GetCurrentThreadId() -> u32;
    }
    unsafe { GetCurrentThreadId() }
}

#[cfg(not(windows))]
fn current_thread_id() -> u32 {
    0
}

impl Log for PluginLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        level_enabled(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed), metadata.level().into())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let entry = LogEntry {
            timestamp,
            level: record.level().into(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            thread_id: current_thread_id(),
        };

        match GLOBAL_LOG_SENDER.get() {
            Some(tx) => {
                let _ = tx.send(entry);
            }
            None => eprintln!(
                "[{}] {:5} {} (tid {}): {}",
                entry.timestamp,
                entry.level.as_str(),
                entry.target,
                entry.thread_id,
                entry.message
            ),
        }
    }

    fn flush(&self) {}
}

/// Install the logger with the given level mask. Safe to call more than
/// once; only the mask changes after the first call.
pub fn init_logger(mask: u8) {
    set_log_level(mask);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Set the global log level mask
pub fn set_log_level(mask: u8) {
    GLOBAL_LOG_LEVEL.store(mask, Ordering::Relaxed);
}

/// Route entries to `tx` instead of stderr. Only the first sink is kept.
pub fn set_log_sink(tx: Sender<LogEntry>) -> bool {
    GLOBAL_LOG_SENDER.set(tx).is_ok()
}
