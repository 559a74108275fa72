use lg_core::gate::{AppState, ConfigurationIssue, GateSnapshot, GateStatus};
use tokio::sync::{watch, Mutex, MutexGuard};

/// Shared gate state plus the dispatch lock.
///
/// ## Lock Ordering
/// `dispatch_lock` serialises transition methods; the snapshot lives in a
/// `watch` channel and is never locked across an await, so reads do not
/// contend with a running transition.
pub(crate) struct GateContext {
    snapshot: watch::Sender<GateSnapshot>,
    dispatch_lock: Mutex<()>,
}

impl GateContext {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(GateSnapshot::initial());
        Self {
            snapshot,
            dispatch_lock: Mutex::new(()),
        }
    }

    pub(crate) fn snapshot(&self) -> GateSnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn state(&self) -> AppState {
        self.snapshot.borrow().state
    }

    pub(crate) fn status(&self) -> GateStatus {
        self.snapshot.borrow().status
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<GateSnapshot> {
        self.snapshot.subscribe()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Writes the state; observers are only woken on an actual change.
    pub(crate) fn set_state(&self, state: AppState) -> bool {
        self.snapshot.send_if_modified(|snapshot| {
            if snapshot.state == state {
                return false;
            }
            snapshot.state = state;
            true
        })
    }

    pub(crate) fn set_initial_gate_completed(&self, completed: bool) {
        self.snapshot.send_if_modified(|snapshot| {
            let changed = snapshot.status.has_completed_initial_gate != completed;
            snapshot.status.has_completed_initial_gate = completed;
            changed
        });
    }

    pub(crate) fn set_configuration_issue(&self, issue: Option<ConfigurationIssue>) {
        self.snapshot.send_if_modified(|snapshot| {
            let changed = snapshot.configuration_issue != issue;
            snapshot.configuration_issue = issue;
            changed
        });
    }

    fn set_verifying(&self, verifying: bool) {
        self.snapshot.send_if_modified(|snapshot| {
            let changed = snapshot.status.is_verifying_subscription != verifying;
            snapshot.status.is_verifying_subscription = verifying;
            changed
        });
    }

    /// Raises `is_verifying_subscription` until the guard drops.
    pub(crate) fn verifying(&self) -> VerifyingGuard<'_> {
        self.set_verifying(true);
        VerifyingGuard { context: self }
    }
}

/// Clears `is_verifying_subscription` on every exit path, including a
/// dropped (cancelled) future.
pub(crate) struct VerifyingGuard<'a> {
    context: &'a GateContext,
}

impl Drop for VerifyingGuard<'_> {
    fn drop(&mut self) {
        self.context.set_verifying(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifying_guard_resets_flag_on_drop() {
        let context = GateContext::new();
        {
            let _guard = context.verifying();
            assert!(context.status().is_verifying_subscription);
        }
        assert!(!context.status().is_verifying_subscription);
    }

    #[test]
    fn observers_are_not_woken_for_identical_state() {
        let context = GateContext::new();
        let mut rx = context.subscribe();
        rx.borrow_and_update();

        assert!(!context.set_state(AppState::LaunchLoading));
        assert!(!rx.has_changed().unwrap());

        assert!(context.set_state(AppState::Paywall));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().state, AppState::Paywall);
    }
}
