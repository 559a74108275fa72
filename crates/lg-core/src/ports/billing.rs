use async_trait::async_trait;

use crate::ports::SubscriptionSyncError;
use crate::subscription::EntitlementSet;

/// Billing SDK wrapper.
#[async_trait]
pub trait BillingPort: Send + Sync {
    /// Entitlements from the SDK's local customer cache.
    async fn cached_entitlements(&self) -> anyhow::Result<EntitlementSet>;

    /// Entitlements fetched from the billing server.
    async fn refresh_entitlements(&self) -> Result<EntitlementSet, SubscriptionSyncError>;
}
