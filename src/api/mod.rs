// View-facing operations organized by screen: the GUI shell binds these
// directly and re-queries them on StoreChange events.

mod dtos;
pub mod entries;
pub mod settings;
pub mod stats;

pub use dtos::*;

use crate::reminders::{Notifier, ReminderScheduler};
use log::warn;

/// Rebuild the reminder schedule after a store mutation that already
/// succeeded; a scheduling failure here is logged, not returned.
fn refresh_reminders<N: Notifier>(scheduler: &ReminderScheduler<N>) {
    if let Err(e) = scheduler.update_now() {
        warn!("Failed to rebuild reminder schedule: {}", e);
    }
}
