/// Default daily goal in ounces; also the value stale pre-ounce goals
/// are reset to by the schema migration.
pub const DEFAULT_DAILY_GOAL: i64 = 100;

/// Smallest amount a single entry can record, in ounces.
pub const MIN_ENTRY_AMOUNT: i64 = 1;

/// Largest amount a single entry can record, in ounces.
pub const MAX_ENTRY_AMOUNT: i64 = 40;

/// Maximum configurable daily goal in ounces.
pub const MAX_DAILY_GOAL: i64 = 1000;

/// Maximum hours between reminders.
pub const MAX_REMINDER_INTERVAL_HOURS: u32 = 24;

/// Default reminder window start (HH:MM, 24-hour).
pub const DEFAULT_REMINDER_START: &str = "08:00";

/// Default reminder window end (HH:MM, 24-hour).
pub const DEFAULT_REMINDER_END: &str = "22:00";

/// Default hours between reminders.
pub const DEFAULT_REMINDER_INTERVAL_HOURS: u32 = 2;
