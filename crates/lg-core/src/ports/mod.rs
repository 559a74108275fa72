//! Port interfaces for the application layer
//!
//! Ports define the contract between the gate use cases and the vendor SDK
//! wrappers that implement them. The gate only ever sees these traits, so every
//! collaborator has a production adapter and a trivially substitutable test
//! double.

pub mod auth_session;
pub mod billing;
pub mod error_reporter;
pub mod gate_event;
pub mod profile_sync;
pub mod session_store;
pub mod subscription_oracle;

pub use auth_session::AuthSessionPort;
pub use billing::BillingPort;
pub use error_reporter::{ErrorCategory, ErrorReporterPort};
pub use gate_event::GateEventPort;
pub use profile_sync::ProfileSyncPort;
pub use session_store::SessionStorePort;
pub use subscription_oracle::{SubscriptionOraclePort, SubscriptionSyncError};
