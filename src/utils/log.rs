// src/utils/log.rs

//! Logging collaborator injected into the client.
//!
//! The library never installs a global logger. [`LogFacade`] forwards to the
//! `log` crate (the CLI wires it to `env_logger`); [`MemoryLog`] keeps records
//! in memory so tests can inspect them.

use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter};

/// Sink for log messages emitted by the client.
pub trait EventLog: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards every message to the `log` crate under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new("pantip")
    }
}

impl EventLog for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{}", message);
    }
}

/// Records messages in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All records in emission order.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Messages logged at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl EventLog for MemoryLog {
    fn log(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }
}

/// Parse a configured level name, falling back to `Info`.
pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
