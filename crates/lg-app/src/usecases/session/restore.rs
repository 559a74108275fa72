use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lg_core::ports::{AuthSessionPort, SessionStorePort};
use tokio::time::{sleep, Instant};
use tracing::{debug, info_span, Instrument};

/// Production Session Store: polls the auth client until a persisted session
/// is restored or the budget runs out.
pub struct RestoringSessionStore {
    auth: Arc<dyn AuthSessionPort>,
    poll_interval: Duration,
}

impl RestoringSessionStore {
    pub fn new(auth: Arc<dyn AuthSessionPort>, poll_interval: Duration) -> Self {
        Self {
            auth,
            poll_interval,
        }
    }

    /// Lookup errors are treated as "not restored yet".
    async fn has_user(&self) -> bool {
        match self.auth.current_user().await {
            Ok(user) => user.is_some(),
            Err(err) => {
                debug!(error = %err, "session lookup failed; treating as not restored");
                false
            }
        }
    }
}

#[async_trait]
impl SessionStorePort for RestoringSessionStore {
    fn has_local_credential(&self) -> bool {
        self.auth.has_persisted_credential()
    }

    async fn wait_for_restored_session(&self, max_wait: Duration) -> bool {
        let span = info_span!("usecase.session.wait_for_restored_session", max_wait = ?max_wait);
        async {
            let deadline = Instant::now() + max_wait;
            if self.has_user().await {
                return true;
            }
            while Instant::now() < deadline {
                let nap = self
                    .poll_interval
                    .min(deadline.saturating_duration_since(Instant::now()));
                sleep(nap).await;
                if self.has_user().await {
                    return true;
                }
            }
            debug!("session not restored within budget");
            false
        }
        .instrument(span)
        .await
    }
}
