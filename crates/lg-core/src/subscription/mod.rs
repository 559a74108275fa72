//! Subscription domain module.

pub mod entitlement;
pub mod profile;
pub mod status;

pub use entitlement::EntitlementSet;
pub use profile::ProfileSubscriptionRow;
pub use status::{SubscriptionCheck, SubscriptionSource, SubscriptionStatus};
