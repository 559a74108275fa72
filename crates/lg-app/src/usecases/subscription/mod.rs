//! Subscription use cases.
//!
//! `SubscriptionReconciler` is the policy the launch gate consults;
//! `EntitlementSubscriptionOracle` is the production oracle behind it.

mod oracle;
mod reconcile;

pub use oracle::{EntitlementSubscriptionOracle, LastSync};
pub use reconcile::SubscriptionReconciler;
