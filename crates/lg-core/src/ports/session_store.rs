use std::time::Duration;

use async_trait::async_trait;

/// Session Store: wraps the backend auth client for the launch gate.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Whether a credential from a prior sign-in is persisted locally.
    ///
    /// Cheap and synchronous. A heuristic only, never proof of authentication.
    fn has_local_credential(&self) -> bool;

    /// Wait up to `max_wait` for a session to be restored from persisted
    /// storage. Returns `false` on timeout; never fails.
    async fn wait_for_restored_session(&self, max_wait: Duration) -> bool;
}
