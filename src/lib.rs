//! Backend for a local-first hydration tracker: a SQLite record store,
//! pure daily-intake aggregation, and a goal-aware reminder scheduler.
//! The GUI shell binds to the `api` module, subscribes to `events`, and
//! supplies the platform `reminders::Notifier`.

pub mod api;
pub mod constants;
pub mod db;
pub mod error;
pub mod events;
pub mod models;
pub mod reminders;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod test_utils;

use directories::ProjectDirs;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::db::{migrations, Database};

/// Error type for initialization failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Could not determine project directories")]
    NoProjectDirs,

    #[error("Could not create data directory: {0}")]
    DataDirCreation(#[source] std::io::Error),

    #[error("Failed to open database: {0}")]
    DatabaseOpen(#[source] rusqlite::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(#[source] rusqlite::Error),
}

/// Default on-disk location for the store, creating the data directory
/// if needed.
pub fn default_db_path() -> Result<PathBuf, InitError> {
    let proj_dirs =
        ProjectDirs::from("com", "aqualog", "Aqualog").ok_or(InitError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(InitError::DataDirCreation)?;
    Ok(data_dir.join("aqualog.db"))
}

/// Open the store at its default location and bring the schema up to
/// date. The embedding shell calls this once at startup and wraps the
/// result in its shared state.
pub fn initialize() -> Result<Database, InitError> {
    let path = default_db_path()?;
    let db = Database::open(&path).map_err(InitError::DatabaseOpen)?;
    migrations::run(db.connection()).map_err(InitError::Migration)?;
    info!("Opened store at {}", path.display());
    Ok(db)
}
