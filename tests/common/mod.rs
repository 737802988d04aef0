//! Common test utilities for integration tests

use chrono::NaiveDate;
use daily_todo::TodoApp;
use daily_todo::todo::Clock;
use tempfile::NamedTempFile;

/// Fixed-date clock for deterministic grouping and deadline checks
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The "today" used across the spec scenarios
pub fn test_today() -> NaiveDate {
    date(2024, 1, 3)
}

/// Create a test app with temporary storage and a fixed clock
pub fn get_test_app() -> (TodoApp, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let app = TodoApp::new(temp_file.path(), Box::new(FixedClock(test_today())));
    (app, temp_file)
}

/// Reopen an app over the same storage file, as a fresh session would
pub fn reopen(temp_file: &NamedTempFile) -> TodoApp {
    TodoApp::new(temp_file.path(), Box::new(FixedClock(test_today())))
}
