//! Production logger backed by `tracing`
//!
//! Each message is stamped with local time and handed to the `tracing`
//! dispatcher at the matching level. Where it ends up is decided by whichever
//! subscriber the application installs.

use super::{LogLevel, Logger};
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings for a [`TracingLogger`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Replaces the level name as the line prefix when set
    pub module: Option<String>,
    /// Messages below this level are dropped
    pub min_level: LogLevel,
}

impl LoggerConfig {
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    config: LoggerConfig,
}

impl TracingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        TracingLogger { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build the line for `message`, or None if `level` is filtered out
    fn format(&self, level: LogLevel, message: &str) -> Option<String> {
        if level < self.config.min_level {
            return None;
        }

        let prefix = match &self.config.module {
            Some(module) => format!("{}:", module),
            None => level.as_str().to_string(),
        };
        let now = Local::now().format(TIMESTAMP_FORMAT);

        Some(format!("{} {} [{}]", prefix, message, now))
    }

    fn log(&self, level: LogLevel, message: &str) -> String {
        let Some(line) = self.format(level, message) else {
            return String::new();
        };

        match level {
            LogLevel::Info => tracing::info!("{}", line),
            LogLevel::Warning => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }

        line
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) -> String {
        self.log(LogLevel::Info, message)
    }

    fn warn(&self, message: &str) -> String {
        self.log(LogLevel::Warning, message)
    }

    fn error(&self, message: &str) -> String {
        self.log(LogLevel::Error, message)
    }
}
