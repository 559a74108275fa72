use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lg_core::ports::{
    BillingPort, ErrorCategory, ErrorReporterPort, ProfileSyncPort, SubscriptionOraclePort,
    SubscriptionSyncError,
};
use lg_core::subscription::{EntitlementSet, SubscriptionStatus};
use tokio::time::Instant;
use tracing::{error, info, info_span, warn, Instrument};

/// Outcome of the most recent sync or customer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastSync {
    pub status: SubscriptionStatus,
    pub at: Instant,
}

/// Production Subscription Oracle.
///
/// Reads entitlements through the billing SDK and mirrors the resulting
/// premium flag to the backend profile. The billing SDK is the source of truth;
/// backend mirror failures are reported and swallowed.
pub struct EntitlementSubscriptionOracle {
    billing: Arc<dyn BillingPort>,
    profile: Arc<dyn ProfileSyncPort>,
    reporter: Arc<dyn ErrorReporterPort>,
    entitlement_id: Option<String>,
    last_sync: Mutex<Option<LastSync>>,
}

impl EntitlementSubscriptionOracle {
    pub fn new(
        billing: Arc<dyn BillingPort>,
        profile: Arc<dyn ProfileSyncPort>,
        reporter: Arc<dyn ErrorReporterPort>,
        entitlement_id: Option<String>,
    ) -> Self {
        Self {
            billing,
            profile,
            reporter,
            entitlement_id,
            last_sync: Mutex::new(None),
        }
    }

    pub fn last_sync(&self) -> Option<LastSync> {
        self.last_sync.lock().ok().and_then(|guard| *guard)
    }

    /// Premium flag currently stored on the backend profile, or `None` when
    /// no backend user is signed in. Diagnostic only; gating never reads it.
    pub async fn backend_mirror(&self) -> anyhow::Result<Option<bool>> {
        match self.profile.current_user_id().await? {
            Some(user_id) if !user_id.is_empty() => {
                let premium = self.profile.fetch_subscription_state(&user_id).await?;
                Ok(Some(premium))
            }
            _ => Ok(None),
        }
    }

    /// Customer info pushed by the billing SDK (purchase, restore, renewal).
    pub async fn apply_customer_update(&self, entitlements: EntitlementSet) -> bool {
        let active = self.grants(&entitlements);
        info!(
            active,
            active_count = entitlements.active_count(),
            "customer update received"
        );
        self.mirror_to_backend(active).await;
        self.record(active);
        active
    }

    fn grants(&self, entitlements: &EntitlementSet) -> bool {
        entitlements.grants(self.entitlement_id.as_deref())
    }

    fn record(&self, active: bool) {
        if let Ok(mut guard) = self.last_sync.lock() {
            *guard = Some(LastSync {
                status: SubscriptionStatus::from_active(active),
                at: Instant::now(),
            });
        }
    }

    async fn mirror_to_backend(&self, active: bool) {
        let user_id = match self.profile.current_user_id().await {
            Ok(Some(user_id)) if !user_id.is_empty() => user_id,
            Ok(_) => {
                warn!("no backend user; skipping subscription mirror");
                return;
            }
            Err(err) => {
                warn!(error = %err, "backend user lookup failed; skipping subscription mirror");
                return;
            }
        };

        let status = SubscriptionStatus::from_active(active);
        if let Err(err) = self
            .profile
            .push_subscription_state(active, status.backend_label())
            .await
        {
            self.reporter.report(&err, ErrorCategory::SubscriptionSync);
            error!(error = %err, "backend subscription push failed");
            return;
        }
        info!(user_id = %user_id, active, "subscription mirrored to backend");
    }
}

#[async_trait]
impl SubscriptionOraclePort for EntitlementSubscriptionOracle {
    async fn is_active_cached(&self) -> bool {
        match self.billing.cached_entitlements().await {
            Ok(entitlements) => {
                let active = self.grants(&entitlements);
                info!(
                    active,
                    active_count = entitlements.active_count(),
                    "cached entitlement read"
                );
                active
            }
            Err(err) => {
                self.reporter.report(&err, ErrorCategory::Iap);
                error!(error = %err, "cached entitlement read failed");
                false
            }
        }
    }

    async fn sync_authoritative(&self) -> Result<bool, SubscriptionSyncError> {
        let span = info_span!("usecase.subscription_oracle.sync_authoritative");
        async {
            let entitlements = self.billing.refresh_entitlements().await?;
            let active = self.grants(&entitlements);
            info!(active, "authoritative entitlement refresh");
            self.mirror_to_backend(active).await;
            self.record(active);
            Ok(active)
        }
        .instrument(span)
        .await
    }
}
