use log::{debug, info};
use thiserror::Error;

/// Failure to submit a single reminder; the rest of the batch continues.
#[derive(Debug, Error)]
#[error("Failed to schedule reminder at {hour:02}:00: {reason}")]
pub struct NotifyError {
    pub hour: u32,
    pub reason: String,
}

/// The platform notification subsystem, injected by the embedding shell
/// so the scheduler stays testable without it.
pub trait Notifier {
    /// Ask the user to authorize notifications. Returns whether the
    /// request was granted.
    fn request_permission(&self) -> bool;

    /// Whether notifications are currently authorized.
    fn permission_granted(&self) -> bool;

    /// Remove every reminder previously submitted by this app.
    /// Idempotent; safe to call with none pending.
    fn cancel_all_pending(&self);

    /// Submit one reminder that fires every day at `hour`:00 until
    /// cancelled.
    fn schedule_daily(&self, hour: u32, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Stand-in notifier that only logs. Useful in headless runs and until
/// the embedding shell wires up a platform implementation.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn request_permission(&self) -> bool {
        true
    }

    fn permission_granted(&self) -> bool {
        true
    }

    fn cancel_all_pending(&self) {
        debug!("Cancelling all pending reminders");
    }

    fn schedule_daily(&self, hour: u32, title: &str, body: &str) -> Result<(), NotifyError> {
        info!("Daily reminder at {:02}:00 - {}: {}", hour, title, body);
        Ok(())
    }
}
