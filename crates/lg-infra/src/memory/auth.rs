use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lg_core::ports::AuthSessionPort;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct PendingSession {
    user_id: String,
    available_at: Instant,
}

/// Auth client whose persisted session becomes visible after a delay,
/// mimicking an SDK restoring its session in the background.
pub struct InMemoryAuthSession {
    persisted_credential: AtomicBool,
    session: RwLock<Option<PendingSession>>,
}

impl InMemoryAuthSession {
    /// Fresh install: no credential, no session.
    pub fn new() -> Self {
        Self {
            persisted_credential: AtomicBool::new(false),
            session: RwLock::new(None),
        }
    }

    /// Returning user whose session restores after `restore_delay`.
    pub fn with_persisted_session(user_id: impl Into<String>, restore_delay: Duration) -> Self {
        Self {
            persisted_credential: AtomicBool::new(true),
            session: RwLock::new(Some(PendingSession {
                user_id: user_id.into(),
                available_at: Instant::now() + restore_delay,
            })),
        }
    }

    /// A credential is on disk but the session never comes back (revoked token).
    pub fn with_stale_credential() -> Self {
        Self {
            persisted_credential: AtomicBool::new(true),
            session: RwLock::new(None),
        }
    }

    pub async fn sign_in(&self, user_id: impl Into<String>) {
        *self.session.write().await = Some(PendingSession {
            user_id: user_id.into(),
            available_at: Instant::now(),
        });
        self.persisted_credential.store(true, Ordering::SeqCst);
    }

    pub async fn sign_out(&self) {
        *self.session.write().await = None;
        self.persisted_credential.store(false, Ordering::SeqCst);
    }
}

impl Default for InMemoryAuthSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthSessionPort for InMemoryAuthSession {
    fn has_persisted_credential(&self) -> bool {
        self.persisted_credential.load(Ordering::SeqCst)
    }

    async fn current_user(&self) -> anyhow::Result<Option<String>> {
        let session = self.session.read().await;
        Ok(session
            .as_ref()
            .filter(|pending| Instant::now() >= pending.available_at)
            .map(|pending| pending.user_id.clone()))
    }
}
