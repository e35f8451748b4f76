use log::info;
use rusqlite::{Connection, Result};

use super::schema::SCHEMA;
use crate::constants::DEFAULT_DAILY_GOAL;

/// Current schema version. Version 2 switched the volume unit from
/// milliliters to ounces.
pub const SCHEMA_VERSION: i32 = 2;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;

    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < 2 {
        reset_milliliter_goals(conn)?;
    }
    if version != SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

/// Databases below version 2 stored the daily goal in milliliters.
/// A hand-picked goal has no reliable conversion, so it is reset to the
/// ounce default. Runs at most once per database; goals configured
/// after the version bump are never touched.
fn reset_milliliter_goals(conn: &Connection) -> Result<()> {
    let updated = conn.execute(
        "UPDATE settings SET daily_goal = ?1",
        [DEFAULT_DAILY_GOAL],
    )?;
    if updated > 0 {
        info!(
            "Reset pre-ounce daily goal to the default of {} oz",
            DEFAULT_DAILY_GOAL
        );
    }
    Ok(())
}
