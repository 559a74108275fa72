use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use lg_core::ports::{BillingPort, SubscriptionSyncError};
use lg_core::subscription::EntitlementSet;
use tokio::sync::RwLock;

/// Billing SDK stand-in. The cache always answers; a refresh fails while
/// the store is marked offline.
pub struct InMemoryBilling {
    entitlements: RwLock<EntitlementSet>,
    offline: AtomicBool,
}

impl InMemoryBilling {
    pub fn new(entitlements: EntitlementSet) -> Self {
        Self {
            entitlements: RwLock::new(entitlements),
            offline: AtomicBool::new(false),
        }
    }

    pub async fn set_entitlements(&self, entitlements: EntitlementSet) {
        *self.entitlements.write().await = entitlements;
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl BillingPort for InMemoryBilling {
    async fn cached_entitlements(&self) -> anyhow::Result<EntitlementSet> {
        Ok(self.entitlements.read().await.clone())
    }

    async fn refresh_entitlements(&self) -> Result<EntitlementSet, SubscriptionSyncError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SubscriptionSyncError::Network(
                "billing service unreachable".to_string(),
            ));
        }
        Ok(self.entitlements.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_refresh_fails_but_cache_answers() {
        let billing = InMemoryBilling::new(EntitlementSet::new(["pro"]));
        billing.set_offline(true);

        let err = billing.refresh_entitlements().await.unwrap_err();
        assert!(matches!(err, SubscriptionSyncError::Network(_)));
        assert_eq!(billing.cached_entitlements().await.unwrap().active_count(), 1);
    }
}
