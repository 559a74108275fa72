use async_trait::async_trait;

/// Backend Profile Sync: mirrors the premium flag to the backend profile.
///
/// The billing SDK stays the source of truth for gating; this mirror is
/// best-effort.
#[async_trait]
pub trait ProfileSyncPort: Send + Sync {
    /// Identifier of the signed-in backend user, if any.
    async fn current_user_id(&self) -> anyhow::Result<Option<String>>;

    async fn push_subscription_state(&self, is_premium: bool, status: &str) -> anyhow::Result<()>;

    /// Premium flag stored on `user_id`'s profile row. A missing row reads as
    /// not premium.
    async fn fetch_subscription_state(&self, user_id: &str) -> anyhow::Result<bool>;
}
