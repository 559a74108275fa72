use std::sync::Arc;

use lg_core::ports::{ErrorCategory, ErrorReporterPort, SubscriptionOraclePort};
use lg_core::subscription::SubscriptionCheck;
use tracing::{info, warn};

/// Subscription reconciliation policy used by the launch gate.
///
/// The gate always receives a binary answer: an authoritative sync that fails
/// falls back to the cached entitlement read instead of surfacing "unknown".
pub struct SubscriptionReconciler {
    oracle: Arc<dyn SubscriptionOraclePort>,
    reporter: Arc<dyn ErrorReporterPort>,
}

impl SubscriptionReconciler {
    pub fn new(oracle: Arc<dyn SubscriptionOraclePort>, reporter: Arc<dyn ErrorReporterPort>) -> Self {
        Self { oracle, reporter }
    }

    /// Authoritative check with cached fallback.
    ///
    /// `operation` names the calling gate operation in logs.
    pub async fn resolve(&self, operation: &'static str) -> SubscriptionCheck {
        match self.oracle.sync_authoritative().await {
            Ok(active) => {
                info!(operation, active, "authoritative subscription sync");
                SubscriptionCheck::authoritative(active)
            }
            Err(err) => {
                let err = anyhow::Error::new(err);
                self.reporter.report(&err, ErrorCategory::Navigation);
                warn!(
                    operation,
                    error = %err,
                    "subscription sync failed; falling back to cached entitlement"
                );
                let active = self.oracle.is_active_cached().await;
                info!(operation, active, "cached subscription fallback");
                SubscriptionCheck::cached_fallback(active)
            }
        }
    }

    /// Cached entitlement read only.
    pub async fn cached(&self, operation: &'static str) -> SubscriptionCheck {
        let active = self.oracle.is_active_cached().await;
        info!(operation, active, "cached subscription check");
        SubscriptionCheck::cached(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lg_core::ports::SubscriptionSyncError;
    use lg_core::subscription::{SubscriptionSource, SubscriptionStatus};
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub Oracle {}

        #[async_trait]
        impl SubscriptionOraclePort for Oracle {
            async fn is_active_cached(&self) -> bool;
            async fn sync_authoritative(&self) -> Result<bool, SubscriptionSyncError>;
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Mutex<Vec<(String, ErrorCategory)>>,
    }

    impl ErrorReporterPort for RecordingReporter {
        fn report(&self, error: &anyhow::Error, category: ErrorCategory) {
            self.reports
                .lock()
                .unwrap()
                .push((error.to_string(), category));
        }
    }

    #[tokio::test]
    async fn authoritative_answer_skips_cache() {
        let mut oracle = MockOracle::new();
        oracle.expect_sync_authoritative().times(1).returning(|| Ok(true));
        oracle.expect_is_active_cached().never();
        let reporter = Arc::new(RecordingReporter::default());

        let reconciler = SubscriptionReconciler::new(Arc::new(oracle), reporter.clone());
        let check = reconciler.resolve("test").await;

        assert_eq!(check.status, SubscriptionStatus::Active);
        assert_eq!(check.source, SubscriptionSource::Authoritative);
        assert!(reporter.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sync_failure_falls_back_to_cache_and_reports() {
        let mut oracle = MockOracle::new();
        oracle
            .expect_sync_authoritative()
            .times(1)
            .returning(|| Err(SubscriptionSyncError::Network("offline".into())));
        oracle.expect_is_active_cached().times(1).returning(|| true);
        let reporter = Arc::new(RecordingReporter::default());

        let reconciler = SubscriptionReconciler::new(Arc::new(oracle), reporter.clone());
        let check = reconciler.resolve("test").await;

        assert_eq!(check.status, SubscriptionStatus::Active);
        assert_eq!(check.source, SubscriptionSource::CachedFallback);
        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].1, ErrorCategory::Navigation);
        assert!(reports[0].0.contains("offline"));
    }

    #[tokio::test]
    async fn cached_read_never_syncs() {
        let mut oracle = MockOracle::new();
        oracle.expect_sync_authoritative().never();
        oracle.expect_is_active_cached().times(1).returning(|| false);

        let reconciler =
            SubscriptionReconciler::new(Arc::new(oracle), Arc::new(RecordingReporter::default()));
        let check = reconciler.cached("test").await;

        assert_eq!(check.status, SubscriptionStatus::Inactive);
        assert_eq!(check.source, SubscriptionSource::Cached);
    }
}
