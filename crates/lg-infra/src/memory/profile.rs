use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use lg_core::ports::ProfileSyncPort;
use lg_core::subscription::ProfileSubscriptionRow;
use tokio::sync::RwLock;

/// One write to the backend `profiles` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePush {
    pub user_id: String,
    pub is_premium: bool,
    pub status: String,
}

/// Backend profile table stand-in that records every subscription push.
pub struct InMemoryProfileSync {
    user_id: RwLock<Option<String>>,
    rows: RwLock<HashMap<String, ProfileSubscriptionRow>>,
    pushes: RwLock<Vec<ProfilePush>>,
    reject_pushes: AtomicBool,
}

impl InMemoryProfileSync {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id: RwLock::new(user_id),
            rows: RwLock::new(HashMap::new()),
            pushes: RwLock::new(Vec::new()),
            reject_pushes: AtomicBool::new(false),
        }
    }

    pub async fn set_user(&self, user_id: Option<String>) {
        *self.user_id.write().await = user_id;
    }

    /// Store a profile row as the backend would return it.
    pub async fn seed_row(&self, user_id: &str, row: ProfileSubscriptionRow) {
        self.rows.write().await.insert(user_id.to_string(), row);
    }

    /// Make every subsequent push fail (e.g. row-level security rejection).
    pub fn set_reject_pushes(&self, reject: bool) {
        self.reject_pushes.store(reject, Ordering::SeqCst);
    }

    pub async fn pushes(&self) -> Vec<ProfilePush> {
        self.pushes.read().await.clone()
    }
}

#[async_trait]
impl ProfileSyncPort for InMemoryProfileSync {
    async fn current_user_id(&self) -> anyhow::Result<Option<String>> {
        Ok(self.user_id.read().await.clone())
    }

    async fn push_subscription_state(&self, is_premium: bool, status: &str) -> anyhow::Result<()> {
        if self.reject_pushes.load(Ordering::SeqCst) {
            anyhow::bail!("profile update rejected by backend");
        }
        let user_id = self
            .user_id
            .read()
            .await
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no signed-in backend user"))?;

        self.rows.write().await.insert(
            user_id.clone(),
            ProfileSubscriptionRow {
                is_premium: Some(is_premium),
                subscription_status: Some(status.to_string()),
            },
        );
        self.pushes.write().await.push(ProfilePush {
            user_id,
            is_premium,
            status: status.to_string(),
        });
        Ok(())
    }

    async fn fetch_subscription_state(&self, user_id: &str) -> anyhow::Result<bool> {
        Ok(self
            .rows
            .read()
            .await
            .get(user_id)
            .is_some_and(ProfileSubscriptionRow::is_premium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_requires_a_user() {
        let profile = InMemoryProfileSync::new(None);
        assert!(profile.push_subscription_state(true, "active").await.is_err());

        profile.set_user(Some("user-1".to_string())).await;
        profile.push_subscription_state(true, "active").await.unwrap();
        assert_eq!(
            profile.pushes().await,
            vec![ProfilePush {
                user_id: "user-1".to_string(),
                is_premium: true,
                status: "active".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn fetch_reads_back_pushed_state() {
        let profile = InMemoryProfileSync::new(Some("user-1".to_string()));
        assert!(!profile.fetch_subscription_state("user-1").await.unwrap());

        profile.push_subscription_state(true, "active").await.unwrap();
        assert!(profile.fetch_subscription_state("user-1").await.unwrap());

        profile.push_subscription_state(false, "free").await.unwrap();
        assert!(!profile.fetch_subscription_state("user-1").await.unwrap());
    }

    #[tokio::test]
    async fn fetch_falls_back_to_status_text() {
        let profile = InMemoryProfileSync::new(None);
        profile
            .seed_row(
                "legacy",
                ProfileSubscriptionRow {
                    is_premium: None,
                    subscription_status: Some("Subscribed".to_string()),
                },
            )
            .await;
        profile
            .seed_row("blank", ProfileSubscriptionRow::default())
            .await;

        assert!(profile.fetch_subscription_state("legacy").await.unwrap());
        assert!(!profile.fetch_subscription_state("blank").await.unwrap());
        assert!(!profile.fetch_subscription_state("unknown").await.unwrap());
    }
}
