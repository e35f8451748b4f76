use std::sync::{Arc, Mutex};

use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::events::{ChangeHub, StoreChange};
use crate::models::WaterEntry;
use crate::reminders::{Notifier, ReminderScheduler};
use crate::validation::validate_entry_amount;

use super::{refresh_reminders, WaterEntryResponse};

/// Log a drink and immediately refresh reminder bodies so they state
/// the new remaining amount.
pub fn add_entry<N: Notifier>(
    db: &Arc<Mutex<Database>>,
    scheduler: &ReminderScheduler<N>,
    hub: &ChangeHub,
    amount: i64,
) -> Result<WaterEntryResponse, AppError> {
    validate_entry_amount(amount)?;

    let entry = with_connection(db, "save water entry", |conn| {
        let mut entry = WaterEntry::new(amount);
        entry.save(conn)?;
        Ok(entry)
    })?;

    hub.emit(StoreChange::Entries);
    refresh_reminders(scheduler);

    Ok(entry.into())
}

/// All entries, newest first.
pub fn list_entries(db: &Arc<Mutex<Database>>) -> Result<Vec<WaterEntryResponse>, AppError> {
    let entries = with_connection(db, "load water entries", WaterEntry::find_all)?;
    Ok(entries.into_iter().map(WaterEntryResponse::from).collect())
}

/// Change the amount on an existing entry; the timestamp stays fixed.
pub fn update_entry_amount(
    db: &Arc<Mutex<Database>>,
    hub: &ChangeHub,
    id: i64,
    amount: i64,
) -> Result<WaterEntryResponse, AppError> {
    validate_entry_amount(amount)?;

    let entry = {
        let db = db.lock().map_err(|_| AppError::LockPoisoned)?;
        let conn = db.connection();

        let mut entry = WaterEntry::find_by_id(conn, id)?.ok_or(AppError::NotFound {
            entity: "Water entry",
        })?;
        entry.update_amount(conn, amount)?;
        entry
    };

    hub.emit(StoreChange::Entries);
    Ok(entry.into())
}

pub fn delete_entry(
    db: &Arc<Mutex<Database>>,
    hub: &ChangeHub,
    id: i64,
) -> Result<bool, AppError> {
    let deleted = with_connection(db, "delete water entry", |conn| {
        WaterEntry::delete(conn, id)
    })?;

    if deleted {
        hub.emit(StoreChange::Entries);
    }
    Ok(deleted)
}
