use async_trait::async_trait;

/// Backend auth client, as seen by session restoration.
#[async_trait]
pub trait AuthSessionPort: Send + Sync {
    /// Whether a sign-in credential was persisted on this device.
    fn has_persisted_credential(&self) -> bool;

    /// Currently restored user, if the client has one yet.
    async fn current_user(&self) -> anyhow::Result<Option<String>>;
}
