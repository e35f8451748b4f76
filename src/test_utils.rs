//! Shared test utilities.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::db::{migrations, Database};
use crate::reminders::{Notifier, NotifyError};
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Notifier double that records every call instead of touching a
/// platform subsystem.
#[derive(Default)]
pub struct RecordingNotifier {
    permission_denied: bool,
    cancels: AtomicUsize,
    pending: Mutex<Vec<(u32, String, String)>>,
    failing_hours: Mutex<Vec<u32>>,
}

impl RecordingNotifier {
    pub fn denying() -> Self {
        Self {
            permission_denied: true,
            ..Self::default()
        }
    }

    /// Make submissions for `hour` fail from now on.
    pub fn fail_hour(&self, hour: u32) {
        self.failing_hours.lock().unwrap().push(hour);
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    pub fn pending_hours(&self) -> Vec<u32> {
        self.pending.lock().unwrap().iter().map(|r| r.0).collect()
    }

    pub fn pending_bodies(&self) -> Vec<String> {
        self.pending
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.2.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn request_permission(&self) -> bool {
        !self.permission_denied
    }

    fn permission_granted(&self) -> bool {
        !self.permission_denied
    }

    fn cancel_all_pending(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        self.pending.lock().unwrap().clear();
    }

    fn schedule_daily(&self, hour: u32, title: &str, body: &str) -> Result<(), NotifyError> {
        if self.failing_hours.lock().unwrap().contains(&hour) {
            return Err(NotifyError {
                hour,
                reason: "submission refused".to_string(),
            });
        }
        self.pending
            .lock()
            .unwrap()
            .push((hour, title.to_string(), body.to_string()));
        Ok(())
    }
}
