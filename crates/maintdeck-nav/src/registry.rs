//! Ordered listener registry with RAII subscription guards

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use maintdeck_core::NavigationContext;

/// Callback notified on every committed navigation event.
pub type NavigationListener = Arc<dyn Fn(&NavigationContext) + Send + Sync>;

/// Identifier for one registered listener, unique per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListenerId(pub(crate) u64);

/// Mutex lock that survives poisoning.
///
/// Listener callbacks never run while any of these locks are held, so a
/// contained panic cannot leave a guard mid-mutation.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct TableInner {
    entries: Vec<(ListenerId, NavigationListener)>,
    next_id: u64,
}

/// Ordered listener table. Delivery order is registration order.
#[derive(Default)]
pub(crate) struct ListenerTable {
    inner: Arc<Mutex<TableInner>>,
}

impl ListenerTable {
    /// Append a listener and hand back its guard.
    pub(crate) fn subscribe(&self, listener: NavigationListener) -> Subscription {
        let mut inner = lock(&self.inner);
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((id, listener));
        Subscription {
            id,
            table: Arc::downgrade(&self.inner),
        }
    }

    /// Snapshot the current registration order.
    ///
    /// Dispatch iterates the snapshot, so a listener registered while an
    /// event is being delivered only sees subsequent events.
    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, NavigationListener)> {
        lock(&self.inner).entries.clone()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }
}

/// Guard for one registered listener.
///
/// The listener stays registered while this guard is alive; dropping it
/// releases the registration. `unsubscribe` may be called any number of
/// times; only the first has an effect.
pub struct Subscription {
    id: ListenerId,
    table: Weak<Mutex<TableInner>>,
}

impl Subscription {
    /// Remove the listener from the table. Idempotent.
    pub fn unsubscribe(&mut self) {
        if let Some(table) = self.table.upgrade() {
            lock(&table).entries.retain(|(id, _)| *id != self.id);
        }
        self.table = Weak::new();
    }

    /// True until `unsubscribe`/`detach` is called or the table is gone.
    pub fn is_active(&self) -> bool {
        self.table.upgrade().is_some()
    }

    /// Keep the listener registered for the lifetime of the router.
    ///
    /// Used by consumers that outlive any scope, like the hosting shell.
    pub fn detach(mut self) {
        self.table = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintdeck_core::ViewId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_context(sequence: u64) -> NavigationContext {
        NavigationContext {
            source_view: ViewId::Dashboard,
            target_view: ViewId::Teams,
            params: None,
            sequence,
        }
    }

    fn counting_listener(counter: &Arc<AtomicUsize>) -> NavigationListener {
        let counter = Arc::clone(counter);
        Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let table = ListenerTable::default();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut subs = Vec::new();
        for tag in ["first", "second", "third"] {
            let calls = Arc::clone(&calls);
            subs.push(table.subscribe(Arc::new(move |_| {
                lock(&calls).push(tag);
            })));
        }

        let context = test_context(1);
        for (_, listener) in table.snapshot() {
            listener(&context);
        }

        assert_eq!(*lock(&calls), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_drop_releases_registration() {
        let table = ListenerTable::default();
        let counter = Arc::new(AtomicUsize::new(0));

        {
            let _sub = table.subscribe(counting_listener(&counter));
            assert_eq!(table.len(), 1);
        }

        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let table = ListenerTable::default();
        let counter = Arc::new(AtomicUsize::new(0));

        let mut sub = table.subscribe(counting_listener(&counter));
        assert!(sub.is_active());

        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(table.len(), 0);

        // Second call is a no-op, even with another listener registered.
        let _other = table.subscribe(counting_listener(&counter));
        sub.unsubscribe();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_detach_keeps_listener_registered() {
        let table = ListenerTable::default();
        let counter = Arc::new(AtomicUsize::new(0));

        table.subscribe(counting_listener(&counter)).detach();
        assert_eq!(table.len(), 1);

        let context = test_context(1);
        for (_, listener) in table.snapshot() {
            listener(&context);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
