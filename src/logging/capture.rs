//! Capturing logger for tests

use super::Logger;
use std::sync::{Mutex, MutexGuard};

/// Records every message in memory, one list per level.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

// A poisoned list is still a valid list of strings
fn lock(list: &Mutex<Vec<String>>) -> MutexGuard<'_, Vec<String>> {
    list.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn record(list: &Mutex<Vec<String>>, message: &str) -> String {
    lock(list).push(message.to_string());
    message.to_string()
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        lock(&self.infos).clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        lock(&self.warnings).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn has_info(&self, message: &str) -> bool {
        lock(&self.infos).iter().any(|m| m == message)
    }

    pub fn has_warning(&self, message: &str) -> bool {
        lock(&self.warnings).iter().any(|m| m == message)
    }

    pub fn has_error(&self, message: &str) -> bool {
        lock(&self.errors).iter().any(|m| m == message)
    }

    pub fn info_count(&self) -> usize {
        lock(&self.infos).len()
    }

    pub fn warning_count(&self) -> usize {
        lock(&self.warnings).len()
    }

    pub fn error_count(&self) -> usize {
        lock(&self.errors).len()
    }

    /// Clear all captured messages
    pub fn reset(&self) {
        lock(&self.infos).clear();
        lock(&self.warnings).clear();
        lock(&self.errors).clear();
    }
}

impl Logger for CaptureLogger {
    fn info(&self, message: &str) -> String {
        record(&self.infos, message)
    }

    fn warn(&self, message: &str) -> String {
        record(&self.warnings, message)
    }

    fn error(&self, message: &str) -> String {
        record(&self.errors, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_capture_by_level() {
        let logger = CaptureLogger::new();
        assert_eq!(logger.info("starting"), "starting");
        logger.warn("Source port is set to 0");
        logger.error("data cannot be empty");

        assert!(logger.has_info("starting"));
        assert!(logger.has_warning("Source port is set to 0"));
        assert!(logger.has_error("data cannot be empty"));
        assert!(!logger.has_warning("starting"));
        assert_eq!(
            (logger.info_count(), logger.warning_count(), logger.error_count()),
            (1, 1, 1)
        );
    }

    #[test]
    fn test_reset() {
        let logger = CaptureLogger::new();
        logger.warn("one");
        logger.warn("two");
        assert_eq!(logger.warnings(), vec!["one", "two"]);

        logger.reset();
        assert_eq!(logger.warning_count(), 0);
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn test_concurrent_capture() {
        let logger = Arc::new(CaptureLogger::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for j in 0..50 {
                        logger.warn(&format!("warning {}-{}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(logger.warning_count(), 400);
    }
}
