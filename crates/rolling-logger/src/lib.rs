//! Rolling Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! and into a fixed-size ring buffer that can be dumped later.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

/// Fixed-size buffer; pushing past capacity drops the oldest line
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(_) => Vec::new(),
        }
    }

    /// Replay the buffer to the console, oldest first. Returns the line count.
    pub fn dump(&self) -> usize {
        let lines = self.recent_lines();
        emit(Level::Info, &format!("--- last {} log lines ---", lines.len()));
        for line in &lines {
            emit(Level::Info, line);
        }
        lines.len()
    }
}

/// `[LEVEL target] message`
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Calling it twice is an error from `log`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Dump the installed logger's buffer to the console
pub fn dump_recent() -> usize {
    LOGGER.get().map(ConsoleLogger::dump).unwrap_or(0)
}
