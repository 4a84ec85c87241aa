//! Unit tests for the Engine logging facade
//!
//! IMPORTANT: the logger slot is global and shared across all tests.
//! All tests are marked with #[serial].

use crate::kk::Engine;
use crate::kk::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

// ============================================================================
// LOGGER SLOT TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_set_logger_receives_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "kk::test", "hello".to_string());
    Engine::log(LogSeverity::Warn, "kk::test", "careful".to_string());

    assert_eq!(
        *entries.lock().unwrap(),
        vec!["Info: hello".to_string(), "Warn: careful".to_string()]
    );

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_reset_logger_detaches_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::log(LogSeverity::Info, "kk::test", "captured".to_string());

    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "kk::test", "not captured".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_engine_macros_route_through_logger() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    crate::engine_trace!("kk::test", "t{}", 1);
    crate::engine_debug!("kk::test", "d{}", 2);
    crate::engine_info!("kk::test", "i{}", 3);
    crate::engine_warn!("kk::test", "w{}", 4);
    crate::engine_error!("kk::test", "e{}", 5);

    assert_eq!(
        *entries.lock().unwrap(),
        vec![
            "Trace: t1".to_string(),
            "Debug: d2".to_string(),
            "Info: i3".to_string(),
            "Warn: w4".to_string(),
            "Error: e5".to_string(),
        ]
    );

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_log_without_custom_logger_does_not_panic() {
    Engine::reset_logger();
    Engine::log(LogSeverity::Debug, "kk::test", "to stdout".to_string());
    Engine::log_detailed(LogSeverity::Error, "kk::test", "to stdout".to_string(), "engine.rs", 1);
}
