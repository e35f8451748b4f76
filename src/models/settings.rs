use rusqlite::{params, Connection, Result};

use crate::constants::{
    DEFAULT_DAILY_GOAL, DEFAULT_REMINDER_END, DEFAULT_REMINDER_INTERVAL_HOURS,
    DEFAULT_REMINDER_START,
};

/// App-wide preferences. Exactly one row exists in the database; it is
/// created lazily with defaults on first read.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Daily intake goal in ounces.
    pub daily_goal: i64,
    pub notifications_enabled: bool,
    /// Reminder window start in HH:MM format (24-hour).
    pub notification_start: String,
    /// Reminder window end in HH:MM format (24-hour).
    pub notification_end: String,
    /// Hours between reminders.
    pub notification_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
            notifications_enabled: false,
            notification_start: DEFAULT_REMINDER_START.to_string(),
            notification_end: DEFAULT_REMINDER_END.to_string(),
            notification_interval: DEFAULT_REMINDER_INTERVAL_HOURS,
        }
    }
}

impl Settings {
    /// Fetch the settings row, inserting the defaults if none exists yet.
    pub fn get_or_create(conn: &Connection) -> Result<Self> {
        let mut stmt = conn.prepare(
            "SELECT daily_goal, notifications_enabled, notification_start,
                    notification_end, notification_interval
             FROM settings WHERE id = 1",
        )?;

        let mut rows = stmt.query([])?;

        if let Some(row) = rows.next()? {
            return Ok(Self {
                daily_goal: row.get(0)?,
                notifications_enabled: row.get::<_, i64>(1)? != 0,
                notification_start: row.get(2)?,
                notification_end: row.get(3)?,
                notification_interval: row.get(4)?,
            });
        }

        let settings = Self::default();
        conn.execute(
            "INSERT INTO settings (id, daily_goal, notifications_enabled,
             notification_start, notification_end, notification_interval)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            params![
                settings.daily_goal,
                settings.notifications_enabled as i64,
                settings.notification_start,
                settings.notification_end,
                settings.notification_interval,
            ],
        )?;

        Ok(settings)
    }

    /// Persist the current field values to the singleton row.
    pub fn update(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "UPDATE settings
             SET daily_goal = ?1, notifications_enabled = ?2,
                 notification_start = ?3, notification_end = ?4,
                 notification_interval = ?5
             WHERE id = 1",
            params![
                self.daily_goal,
                self.notifications_enabled as i64,
                self.notification_start,
                self.notification_end,
                self.notification_interval,
            ],
        )?;
        Ok(())
    }

    /// Hour component of the reminder window start.
    pub fn start_hour(&self) -> u32 {
        hour_of(&self.notification_start)
    }

    /// Hour component of the reminder window end.
    pub fn end_hour(&self) -> u32 {
        hour_of(&self.notification_end)
    }
}

fn hour_of(time: &str) -> u32 {
    time.split(':')
        .next()
        .and_then(|h| h.parse().ok())
        .unwrap_or(0)
}
