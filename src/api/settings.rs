use std::sync::{Arc, Mutex};

use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::events::{ChangeHub, StoreChange};
use crate::models::Settings;
use crate::reminders::{Notifier, ReminderScheduler};
use crate::validation::{validate_daily_goal, validate_interval_hours, validate_time_format};

use super::{refresh_reminders, SettingsResponse};

pub fn get_settings(db: &Arc<Mutex<Database>>) -> Result<SettingsResponse, AppError> {
    let settings = with_connection(db, "load settings", Settings::get_or_create)?;
    Ok(settings.into())
}

/// Change the daily goal. Reminder bodies pick the new goal up on the
/// next (debounced) rebuild.
pub fn update_daily_goal(
    db: &Arc<Mutex<Database>>,
    hub: &ChangeHub,
    goal: i64,
) -> Result<SettingsResponse, AppError> {
    validate_daily_goal(goal)?;

    let settings = with_connection(db, "update daily goal", |conn| {
        let mut settings = Settings::get_or_create(conn)?;
        settings.daily_goal = goal;
        settings.update(conn)?;
        Ok(settings)
    })?;

    hub.emit(StoreChange::Settings);
    Ok(settings.into())
}

/// Turn reminders on or off. Returns whether notification permission is
/// granted; a denial leaves the flag enabled so the caller can surface
/// a one-shot alert and the user can retry from system settings.
pub fn set_notifications_enabled<N: Notifier>(
    db: &Arc<Mutex<Database>>,
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    enabled: bool,
) -> Result<bool, AppError> {
    with_connection(db, "update notification toggle", |conn| {
        let mut settings = Settings::get_or_create(conn)?;
        settings.notifications_enabled = enabled;
        settings.update(conn)
    })?;

    hub.emit(StoreChange::Settings);

    if !enabled {
        scheduler.cancel_all();
        return Ok(true);
    }

    if !scheduler.request_permission() {
        return Ok(false);
    }

    refresh_reminders(scheduler);
    Ok(true)
}

pub fn update_notification_start<N: Notifier>(
    db: &Arc<Mutex<Database>>,
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    time: &str,
) -> Result<SettingsResponse, AppError> {
    validate_time_format(time)?;

    let settings = with_connection(db, "update notification start", |conn| {
        let mut settings = Settings::get_or_create(conn)?;
        settings.notification_start = time.to_string();
        settings.update(conn)?;
        Ok(settings)
    })?;

    finish_window_update(scheduler, hub, settings)
}

pub fn update_notification_end<N: Notifier>(
    db: &Arc<Mutex<Database>>,
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    time: &str,
) -> Result<SettingsResponse, AppError> {
    validate_time_format(time)?;

    let settings = with_connection(db, "update notification end", |conn| {
        let mut settings = Settings::get_or_create(conn)?;
        settings.notification_end = time.to_string();
        settings.update(conn)?;
        Ok(settings)
    })?;

    finish_window_update(scheduler, hub, settings)
}

pub fn update_notification_interval<N: Notifier>(
    db: &Arc<Mutex<Database>>,
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    interval: u32,
) -> Result<SettingsResponse, AppError> {
    validate_interval_hours(interval)?;

    let settings = with_connection(db, "update notification interval", |conn| {
        let mut settings = Settings::get_or_create(conn)?;
        settings.notification_interval = interval;
        settings.update(conn)?;
        Ok(settings)
    })?;

    finish_window_update(scheduler, hub, settings)
}

fn finish_window_update<N: Notifier>(
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    settings: Settings,
) -> Result<SettingsResponse, AppError> {
    hub.emit(StoreChange::Settings);
    if settings.notifications_enabled {
        refresh_reminders(scheduler);
    }
    Ok(settings.into())
}
