use serde::{Deserialize, Serialize};

/// Subscription columns of a backend `profiles` row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubscriptionRow {
    pub is_premium: Option<bool>,
    pub subscription_status: Option<String>,
}

impl ProfileSubscriptionRow {
    /// `is_premium` wins when present. Otherwise the status text decides;
    /// a row with neither is not premium.
    pub fn is_premium(&self) -> bool {
        if let Some(flag) = self.is_premium {
            return flag;
        }
        self.subscription_status
            .as_deref()
            .map(|status| {
                matches!(
                    status.to_lowercase().as_str(),
                    "active" | "premium" | "subscribed"
                )
            })
            .unwrap_or(false)
    }
}
