use serde::{Deserialize, Serialize};

/// Entitlement state as seen by the gate.
///
/// `Unknown` only exists while an authoritative check is failing; the
/// reconciliation policy replaces it with a cached read before the gate
/// decides anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Unknown,
}

impl SubscriptionStatus {
    pub fn from_active(active: bool) -> Self {
        if active {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    /// Status label mirrored to the backend profile.
    pub fn backend_label(&self) -> &'static str {
        if self.is_active() {
            "active"
        } else {
            "free"
        }
    }
}

/// Where a subscription answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionSource {
    /// Server round-trip succeeded.
    Authoritative,
    /// Server round-trip failed; local cache used instead.
    CachedFallback,
    /// Local cache read on purpose.
    Cached,
}

/// Binary subscription answer plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCheck {
    pub status: SubscriptionStatus,
    pub source: SubscriptionSource,
}

impl SubscriptionCheck {
    pub fn authoritative(active: bool) -> Self {
        Self {
            status: SubscriptionStatus::from_active(active),
            source: SubscriptionSource::Authoritative,
        }
    }

    pub fn cached_fallback(active: bool) -> Self {
        Self {
            status: SubscriptionStatus::from_active(active),
            source: SubscriptionSource::CachedFallback,
        }
    }

    pub fn cached(active: bool) -> Self {
        Self {
            status: SubscriptionStatus::from_active(active),
            source: SubscriptionSource::Cached,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
