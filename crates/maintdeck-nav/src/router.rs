//! Core router: single source of truth for the active view
//!
//! Owns the current navigation context and the history stack, and is the
//! only component that mutates either. Constructed once at process start
//! and shared by handle (`Arc<Router>`); there is no global instance.

use std::collections::VecDeque;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

use maintdeck_core::prelude::*;
use maintdeck_core::{NavigationContext, NavigationParams, ReturnValue, ViewId};

use crate::registry::{lock, ListenerTable, Subscription};

/// Callback invoked with the caller-supplied result when the context
/// created by this request is dismissed by `go_back`. `None` means
/// cancellation.
pub type OnReturn = Box<dyn FnOnce(Option<ReturnValue>) + Send>;

/// One transition request, usually built through [`crate::ViewBinding`].
pub struct NavigationRequest {
    pub source_view: ViewId,
    pub target_view: ViewId,
    pub params: Option<NavigationParams>,
    pub on_return: Option<OnReturn>,
}

impl NavigationRequest {
    pub fn new(source_view: ViewId, target_view: ViewId) -> Self {
        Self {
            source_view,
            target_view,
            params: None,
            on_return: None,
        }
    }

    pub fn with_params(mut self, params: NavigationParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_on_return(
        mut self,
        callback: impl FnOnce(Option<ReturnValue>) + Send + 'static,
    ) -> Self {
        self.on_return = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationRequest")
            .field("source_view", &self.source_view)
            .field("target_view", &self.target_view)
            .field("params", &self.params)
            .field("on_return", &self.on_return.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// A committed context plus the return callback it still owes its source.
struct Entry {
    context: NavigationContext,
    on_return: Option<OnReturn>,
}

/// Operation accepted while a notification loop is in flight.
enum QueuedOp {
    Navigate(NavigationRequest),
    GoBack(Option<ReturnValue>),
}

struct RouterState {
    current: Option<Entry>,
    history: Vec<Entry>,
    next_sequence: u64,
    /// True while a notification loop runs; re-entrant requests queue.
    dispatching: bool,
    queued: VecDeque<QueuedOp>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current: None,
            history: Vec::new(),
            next_sequence: 1,
            dispatching: false,
            queued: VecDeque::new(),
        }
    }
}

/// Process-wide view coordinator.
///
/// All operations are infallible and synchronous. Multi-thread callers are
/// serialized behind the internal mutex; the mutex is released before any
/// listener runs, so listeners may call back into the router (their
/// requests queue until the in-flight notification loop completes).
#[derive(Default)]
pub struct Router {
    state: Mutex<RouterState>,
    listeners: ListenerTable,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for committed navigation events.
    ///
    /// Observers are notified in registration order. A listener registered
    /// while an event is being delivered is not invoked for that event.
    pub fn subscribe(
        &self,
        listener: impl Fn(&NavigationContext) + Send + Sync + 'static,
    ) -> Subscription {
        self.listeners.subscribe(std::sync::Arc::new(listener))
    }

    /// Commit a transition and notify observers.
    ///
    /// Never fails: the prior current context (if any) is pushed onto the
    /// history stack and the new context becomes current.
    pub fn navigate(&self, request: NavigationRequest) {
        self.submit(QueuedOp::Navigate(request));
    }

    /// Pop the history stack and restore the previous context.
    ///
    /// If the context being left behind carried an `on_return`, it is
    /// invoked with `result` before observers hear about the restored
    /// context. With an empty stack this is a no-op: no state change, no
    /// notification.
    pub fn go_back(&self, result: Option<ReturnValue>) {
        self.submit(QueuedOp::GoBack(result));
    }

    /// The active context, if any.
    pub fn current_context(&self) -> Option<NavigationContext> {
        self.state().current.as_ref().map(|e| e.context.clone())
    }

    /// Snapshot of the history stack, oldest first.
    pub fn history(&self) -> Vec<NavigationContext> {
        self.state()
            .history
            .iter()
            .map(|e| e.context.clone())
            .collect()
    }

    pub fn can_go_back(&self) -> bool {
        !self.state().history.is_empty()
    }

    /// Reset the stack and the current context.
    ///
    /// For session boundaries (logout), not normal navigation. Queued
    /// re-entrant requests are left alone; events are never dropped.
    pub fn clear_history(&self) {
        let mut state = self.state();
        state.history.clear();
        state.current = None;
        debug!("navigation history cleared");
    }

    fn state(&self) -> MutexGuard<'_, RouterState> {
        lock(&self.state)
    }

    /// Run `op`, then drain anything observers queued while it ran.
    fn submit(&self, op: QueuedOp) {
        {
            let mut state = self.state();
            if state.dispatching {
                state.queued.push_back(op);
                return;
            }
            state.dispatching = true;
        }

        let mut next = Some(op);
        while let Some(op) = next {
            self.process(op);
            let mut state = self.state();
            next = state.queued.pop_front();
            if next.is_none() {
                state.dispatching = false;
            }
        }
    }

    fn process(&self, op: QueuedOp) {
        match op {
            QueuedOp::Navigate(request) => {
                let context = {
                    let mut state = self.state();
                    let sequence = state.next_sequence;
                    state.next_sequence += 1;

                    let context = NavigationContext {
                        source_view: request.source_view,
                        target_view: request.target_view,
                        params: request.params,
                        sequence,
                    };

                    if let Some(previous) = state.current.take() {
                        state.history.push(previous);
                    }
                    state.current = Some(Entry {
                        context: context.clone(),
                        on_return: request.on_return,
                    });
                    context
                };

                debug!(
                    source = %context.source_view,
                    target = %context.target_view,
                    sequence = context.sequence,
                    "navigation committed"
                );
                self.notify(&context);
            }

            QueuedOp::GoBack(result) => {
                let (context, on_return) = {
                    let mut state = self.state();
                    let Some(entry) = state.history.pop() else {
                        trace!("go_back ignored: history is empty");
                        return;
                    };
                    let context = entry.context.clone();
                    let left = std::mem::replace(&mut state.current, Some(entry));
                    (context, left.and_then(|e| e.on_return))
                };

                // The source's return handler observes the result before any
                // observer hears about the restored context.
                if let Some(callback) = on_return {
                    callback(result);
                }

                debug!(
                    restored = %context.target_view,
                    sequence = context.sequence,
                    "navigated back"
                );
                self.notify(&context);
            }
        }
    }

    /// Deliver `context` to every observer registered before this event.
    ///
    /// A panicking observer is contained and logged; the remaining
    /// observers still receive the event, and the caller of
    /// `navigate`/`go_back` never sees the failure.
    fn notify(&self, context: &NavigationContext) {
        for (id, listener) in self.listeners.snapshot() {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(context)));
            if outcome.is_err() {
                warn!(
                    listener = id.0,
                    target = %context.target_view,
                    "navigation listener panicked; continuing with remaining listeners"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn request(source: ViewId, target: ViewId) -> NavigationRequest {
        NavigationRequest::new(source, target)
    }

    #[test]
    fn test_first_navigate_pushes_nothing() {
        let router = Router::new();
        router.navigate(request(ViewId::Dashboard, ViewId::Teams));

        assert!(!router.can_go_back());
        assert!(router.history().is_empty());
        let current = router.current_context().unwrap();
        assert_eq!(current.target_view, ViewId::Teams);
    }

    #[test]
    fn test_history_depth_after_n_navigations() {
        let router = Router::new();
        let targets = [
            ViewId::Teams,
            ViewId::Equipment,
            ViewId::Maintenance,
            ViewId::Reporting,
        ];
        for target in targets {
            router.navigate(request(ViewId::Dashboard, target));
        }

        // First navigate pushes nothing; each later one pushes one entry.
        assert!(router.can_go_back());
        assert_eq!(router.history().len(), targets.len() - 1);
    }

    #[test]
    fn test_round_trip_restores_previous_context() {
        let router = Router::new();
        router.navigate(request(ViewId::Dashboard, ViewId::Dashboard));
        router.navigate(request(ViewId::Dashboard, ViewId::Teams));

        router.go_back(None);

        let current = router.current_context().unwrap();
        assert_eq!(current.target_view, ViewId::Dashboard);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_on_return_invoked_exactly_once_with_result() {
        let router = Router::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        router.navigate(request(ViewId::Dashboard, ViewId::Maintenance));
        let sink = Arc::clone(&received);
        router.navigate(
            request(ViewId::Maintenance, ViewId::Teams).with_on_return(move |result| {
                sink.lock().unwrap().push(result);
            }),
        );

        router.go_back(Some(json!({ "team_id": "t-4" })));
        // A second go_back has nothing to pop and must not re-invoke.
        router.go_back(Some(json!("ignored")));

        let calls = received.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], Some(json!({ "team_id": "t-4" })));
    }

    #[test]
    fn test_on_return_none_means_cancellation() {
        let router = Router::new();
        let cancelled = Arc::new(AtomicUsize::new(0));

        router.navigate(request(ViewId::Dashboard, ViewId::Maintenance));
        let flag = Arc::clone(&cancelled);
        router.navigate(
            request(ViewId::Maintenance, ViewId::Teams).with_on_return(move |result| {
                if result.is_none() {
                    flag.fetch_add(1, Ordering::SeqCst);
                }
            }),
        );

        router.go_back(None);
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_on_return_runs_before_notification() {
        let router = Router::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let listener_order = Arc::clone(&order);
        let _sub = router.subscribe(move |context| {
            listener_order
                .lock()
                .unwrap()
                .push(format!("notify:{}", context.target_view));
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Maintenance));
        let return_order = Arc::clone(&order);
        router.navigate(
            request(ViewId::Maintenance, ViewId::Teams).with_on_return(move |_| {
                return_order.lock().unwrap().push("on_return".to_string());
            }),
        );

        router.go_back(None);

        let calls = order.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "notify:maintenance",
                "notify:teams",
                "on_return",
                "notify:maintenance",
            ]
        );
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        let router = Router::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut subs = Vec::new();
        for tag in ["L1", "L2", "L3"] {
            let calls = Arc::clone(&calls);
            subs.push(router.subscribe(move |_| {
                calls.lock().unwrap().push(tag);
            }));
        }

        router.navigate(request(ViewId::Dashboard, ViewId::Equipment));

        assert_eq!(*calls.lock().unwrap(), vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn test_panicking_listener_does_not_block_others() {
        let router = Router::new();
        let reached = Arc::new(AtomicUsize::new(0));

        let _bad = router.subscribe(|_| panic!("listener fault"));
        let counter = Arc::clone(&reached);
        let _good = router.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Teams));

        assert_eq!(reached.load(Ordering::SeqCst), 1);
        // The navigation itself still committed.
        assert_eq!(
            router.current_context().unwrap().target_view,
            ViewId::Teams
        );
    }

    #[test]
    fn test_listener_not_invoked_after_unsubscribe() {
        let router = Router::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let mut sub = router.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        sub.unsubscribe();
        sub.unsubscribe();
        router.navigate(request(ViewId::Teams, ViewId::Equipment));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_registered_during_notification_skips_inflight_event() {
        let router = Arc::new(Router::new());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let registrar_router = Arc::clone(&router);
        let late = Arc::clone(&late_calls);
        let registered = Arc::new(Mutex::new(Vec::new()));
        let holder = Arc::clone(&registered);
        let _sub = router.subscribe(move |_| {
            let late = Arc::clone(&late);
            let sub = registrar_router.subscribe(move |_| {
                late.fetch_add(1, Ordering::SeqCst);
            });
            holder.lock().unwrap().push(sub);
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        router.navigate(request(ViewId::Teams, ViewId::Equipment));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_navigate_is_queued_not_interleaved() {
        let router = Arc::new(Router::new());
        let events = Arc::new(Mutex::new(Vec::new()));

        // L1 issues a follow-up navigation the first time it runs, and
        // records what the router considered current right after asking.
        let reentrant_router = Arc::clone(&router);
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_flag = Arc::clone(&fired);
        let l1_events = Arc::clone(&events);
        let _l1 = router.subscribe(move |context| {
            l1_events
                .lock()
                .unwrap()
                .push(format!("L1:{}", context.target_view));
            if fired_flag.fetch_add(1, Ordering::SeqCst) == 0 {
                reentrant_router.navigate(NavigationRequest::new(
                    context.target_view,
                    ViewId::Reporting,
                ));
                // The queued event has not been applied yet.
                let seen = reentrant_router.current_context().unwrap().target_view;
                l1_events.lock().unwrap().push(format!("still:{seen}"));
            }
        });

        let l2_events = Arc::clone(&events);
        let _l2 = router.subscribe(move |context| {
            l2_events
                .lock()
                .unwrap()
                .push(format!("L2:{}", context.target_view));
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Teams));

        // Both listeners finish the first event before either sees the second.
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "L1:teams",
                "still:teams",
                "L2:teams",
                "L1:reporting",
                "L2:reporting",
            ]
        );
        assert_eq!(
            router.current_context().unwrap().target_view,
            ViewId::Reporting
        );
    }

    #[test]
    fn test_empty_stack_go_back_is_noop() {
        let router = Router::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let _sub = router.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        router.go_back(None);

        // No notification fired and the context is unchanged.
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            router.current_context().unwrap().target_view,
            ViewId::Teams
        );
    }

    #[test]
    fn test_clear_history_resets_stack_and_context() {
        let router = Router::new();
        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        router.navigate(request(ViewId::Teams, ViewId::Equipment));

        router.clear_history();

        assert!(router.current_context().is_none());
        assert!(!router.can_go_back());
        assert!(router.history().is_empty());
    }

    #[test]
    fn test_history_snapshot_is_isolated() {
        let router = Router::new();
        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        router.navigate(request(ViewId::Teams, ViewId::Equipment));

        let mut snapshot = router.history();
        snapshot.clear();

        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_params_are_delivered_with_the_context() {
        let router = Router::new();
        router.navigate(
            request(ViewId::Dashboard, ViewId::Equipment).with_params(
                NavigationParams::new().with_status_filter("in-repair"),
            ),
        );

        let params = router.current_context().unwrap().params.unwrap();
        assert_eq!(params.status_filter.as_deref(), Some("in-repair"));
    }

    #[test]
    fn test_sequence_is_monotonic_across_operations() {
        let router = Router::new();
        router.navigate(request(ViewId::Dashboard, ViewId::Teams));
        let first = router.current_context().unwrap().sequence;
        router.navigate(request(ViewId::Teams, ViewId::Equipment));
        let second = router.current_context().unwrap().sequence;

        assert!(second > first);
    }
}
