use crate::constants::*;
use crate::error::AppError;

/// Validate a single entry amount in ounces.
pub fn validate_entry_amount(amount: i64) -> Result<(), AppError> {
    if amount < MIN_ENTRY_AMOUNT {
        return Err(AppError::InvalidInput {
            field: "amount",
            reason: "must be positive".into(),
        });
    }
    if amount > MAX_ENTRY_AMOUNT {
        return Err(AppError::InvalidInput {
            field: "amount",
            reason: format!("cannot exceed {} oz", MAX_ENTRY_AMOUNT),
        });
    }
    Ok(())
}

/// Validate the daily goal in ounces.
pub fn validate_daily_goal(goal: i64) -> Result<(), AppError> {
    if goal <= 0 {
        return Err(AppError::InvalidInput {
            field: "daily_goal",
            reason: "must be positive".into(),
        });
    }
    if goal > MAX_DAILY_GOAL {
        return Err(AppError::InvalidInput {
            field: "daily_goal",
            reason: format!("cannot exceed {} oz", MAX_DAILY_GOAL),
        });
    }
    Ok(())
}

/// Validate time format (HH:MM, 24-hour format).
pub fn validate_time_format(time: &str) -> Result<(), AppError> {
    let err = |reason: &str| AppError::InvalidInput {
        field: "time",
        reason: reason.into(),
    };

    if time.len() != 5 || &time[2..3] != ":" {
        return Err(err("must be in HH:MM format"));
    }

    let hours: u32 = time[0..2].parse().map_err(|_| err("invalid hours"))?;
    let minutes: u32 = time[3..5].parse().map_err(|_| err("invalid minutes"))?;

    if hours >= 24 {
        return Err(err("hours must be 00-23"));
    }
    if minutes >= 60 {
        return Err(err("minutes must be 00-59"));
    }

    Ok(())
}

/// Validate the hours between reminders.
pub fn validate_interval_hours(interval: u32) -> Result<(), AppError> {
    if interval == 0 {
        return Err(AppError::InvalidInput {
            field: "notification_interval",
            reason: "must be at least 1 hour".into(),
        });
    }
    if interval > MAX_REMINDER_INTERVAL_HOURS {
        return Err(AppError::InvalidInput {
            field: "notification_interval",
            reason: format!("cannot exceed {} hours", MAX_REMINDER_INTERVAL_HOURS),
        });
    }
    Ok(())
}
