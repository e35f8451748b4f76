use log::warn;
use std::sync::{Mutex, MutexGuard};

/// Which part of the store a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Entries,
    Settings,
}

type Listener = Box<dyn Fn(StoreChange) + Send + Sync>;

/// Subscription registry for store mutations. The UI subscribes once
/// and re-queries the api layer whenever a change arrives; the store
/// itself never pushes data.
#[derive(Default)]
pub struct ChangeHub {
    listeners: Mutex<Vec<Listener>>,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(StoreChange) + Send + Sync + 'static,
    {
        self.lock().push(Box::new(listener));
    }

    pub fn emit(&self, change: StoreChange) {
        for listener in self.lock().iter() {
            listener(change);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Listener>> {
        match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("ChangeHub: listener list mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_emit_reaches_every_listener() {
        let hub = ChangeHub::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        hub.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        hub.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        hub.emit(StoreChange::Entries);
        hub.emit(StoreChange::Settings);

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_sees_the_change_kind() {
        let hub = ChangeHub::new();
        let entry_changes = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&entry_changes);
        hub.subscribe(move |change| {
            if change == StoreChange::Entries {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        hub.emit(StoreChange::Entries);
        hub.emit(StoreChange::Settings);
        hub.emit(StoreChange::Entries);

        assert_eq!(entry_changes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_with_no_listeners_is_a_no_op() {
        let hub = ChangeHub::new();
        hub.emit(StoreChange::Entries);
    }
}
