mod notifier;
pub use notifier::{LogNotifier, Notifier, NotifyError};

use chrono::{DateTime, Local, TimeZone, Timelike};
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::db::Database;
use crate::error::AppError;
use crate::models::{Settings, WaterEntry};
use crate::stats;

/// Minimum interval between debounced rebuilds. App-foreground events
/// arrive in bursts; anything inside this window is a no-op.
const RESCHEDULE_DEBOUNCE: Duration = Duration::from_secs(5 * 60);

pub const REMINDER_TITLE: &str = "Time to Hydrate! 💧";

/// Rebuilds the set of pending hydration reminders from the current
/// settings and today's remaining-goal state.
pub struct ReminderScheduler<N: Notifier> {
    db: Arc<Mutex<Database>>,
    notifier: N,
    /// Instant of the last completed rebuild, for debouncing.
    last_rebuild: Mutex<Option<Instant>>,
}

impl<N: Notifier> ReminderScheduler<N> {
    pub fn new(db: Arc<Mutex<Database>>, notifier: N) -> Self {
        Self {
            db,
            notifier,
            last_rebuild: Mutex::new(None),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Forward a permission request to the platform subsystem.
    pub fn request_permission(&self) -> bool {
        self.notifier.request_permission()
    }

    /// Drop every pending reminder without touching stored settings.
    pub fn cancel_all(&self) {
        self.notifier.cancel_all_pending();
    }

    /// Debounced entry point for app-foreground events. Returns whether
    /// a rebuild actually ran.
    pub fn reschedule_if_needed(&self) -> Result<bool, AppError> {
        {
            let last = self
                .last_rebuild
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(at) = *last {
                if at.elapsed() < RESCHEDULE_DEBOUNCE {
                    return Ok(false);
                }
            }
        }

        self.rebuild(&Local::now())?;
        Ok(true)
    }

    /// Rebuild unconditionally. Called right after an intake change so
    /// reminder bodies reflect the new remaining amount.
    pub fn update_now(&self) -> Result<usize, AppError> {
        self.rebuild(&Local::now())
    }

    /// Clear the previous schedule and submit a fresh one. Returns the
    /// number of reminders submitted.
    fn rebuild<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<usize, AppError> {
        let (settings, total) = {
            let db = self.lock_db();
            let conn = db.connection();
            let settings = Settings::get_or_create(conn)?;
            let entries = WaterEntry::find_all(conn)?;
            (settings, stats::today_total(&entries, now))
        };

        if !settings.notifications_enabled {
            self.notifier.cancel_all_pending();
            self.stamp_rebuilt();
            return Ok(0);
        }

        let hours = retain_upcoming(
            candidate_hours(
                settings.start_hour(),
                settings.end_hour(),
                settings.notification_interval,
            ),
            now.hour(),
            now.minute(),
        );

        let remaining = stats::remaining(total, settings.daily_goal);
        let body = reminder_body(remaining, settings.daily_goal);

        // Cancelling first keeps repeated reconfiguration from stacking
        // duplicate or stale reminders.
        self.notifier.cancel_all_pending();

        let mut scheduled = 0;
        for hour in hours {
            match self.notifier.schedule_daily(hour, REMINDER_TITLE, &body) {
                Ok(()) => scheduled += 1,
                // A single refused submission does not abort the batch.
                Err(e) => warn!("{}", e),
            }
        }

        info!("Scheduled {} hydration reminder(s)", scheduled);
        self.stamp_rebuilt();
        Ok(scheduled)
    }

    fn stamp_rebuilt(&self) {
        let mut last = self
            .last_rebuild
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *last = Some(Instant::now());
    }

    fn lock_db(&self) -> MutexGuard<'_, Database> {
        match self.db.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("ReminderScheduler: database mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

/// Hours hit by stepping from `start` to `end` inclusive in `interval`
/// steps. An interval that does not divide the range still starts at
/// `start` and stops at or before `end`.
pub fn candidate_hours(start: u32, end: u32, interval: u32) -> Vec<u32> {
    if interval == 0 {
        return Vec::new();
    }
    (start..=end).step_by(interval as usize).collect()
}

/// Elapsed-hour policy: a candidate whose top of the hour has already
/// passed today is dropped. At exactly minute zero the current hour
/// still counts as upcoming. Evaluated once, at schedule-build time.
pub fn retain_upcoming(hours: Vec<u32>, current_hour: u32, current_minute: u32) -> Vec<u32> {
    if current_minute == 0 {
        return hours;
    }
    hours.into_iter().filter(|&h| h > current_hour).collect()
}

/// Reminder body computed from live remaining-goal state.
pub fn reminder_body(remaining: i64, goal: i64) -> String {
    if remaining > 0 {
        format!(
            "You need {} more oz to reach your daily goal of {} oz!",
            remaining, goal
        )
    } else {
        format!(
            "Great job! You've reached your daily goal of {} oz! Keep it up! 🎉",
            goal
        )
    }
}
