use async_trait::async_trait;

/// Errors from the authoritative subscription sync.
#[derive(Debug, thiserror::Error)]
pub enum SubscriptionSyncError {
    #[error("billing service unreachable: {0}")]
    Network(String),
    #[error("billing service rejected the request: {0}")]
    Server(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Subscription Oracle: answers whether the entitlement is active.
#[async_trait]
pub trait SubscriptionOraclePort: Send + Sync {
    /// Local cache read. Best-effort, may be stale, never fails.
    async fn is_active_cached(&self) -> bool;

    /// Sync with the server and return the authoritative status.
    async fn sync_authoritative(&self) -> Result<bool, SubscriptionSyncError>;
}
