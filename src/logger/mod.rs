//! Console sink for the `log` facade.
//!
//! Natively, warnings and errors go to stderr and everything else to stdout. In the browser
//! (`wasm-web`) lines go to `console.log`, `console.warn` and `console.error`.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use log::{LevelFilter, Log, Metadata, Record};

pub const LOGGER_NAME: &str = "web-login-demo";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Silent => LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" => Ok(LogLevel::Silent),
            other => Err(LogError::InvalidLogLevel(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogError {
    InvalidLogLevel(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::InvalidLogLevel(level) => write!(f, "Invalid log level: {level}"),
        }
    }
}

impl std::error::Error for LogError {}

#[derive(Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.to_level_filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_line(&record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] as the global logger. Returns `false` when a logger was already
/// installed, in which case only the max level is updated.
pub fn init_logging(level: LogLevel) -> bool {
    let installed = log::set_boxed_logger(Box::new(ConsoleLogger::new(level))).is_ok();
    log::set_max_level(level.to_level_filter());
    installed
}

fn format_line(message: &str) -> String {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    if message.is_empty() {
        format!("[{now}]  {LOGGER_NAME}:")
    } else {
        format!("[{now}]  {LOGGER_NAME}: {message}")
    }
}

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
fn write_line(level: log::Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        log::Level::Error => web_sys::console::error_1(&value),
        log::Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(all(feature = "wasm-web", target_arch = "wasm32")))]
fn write_line(level: log::Level, line: &str) {
    match level {
        log::Level::Error | log::Level::Warn => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}
