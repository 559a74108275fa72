//! Business logic use cases
//!
//! [SessionStorePort]      [SubscriptionOraclePort]
//         ↓                         ↓
//  RestoringSessionStore   SubscriptionReconciler ← EntitlementSubscriptionOracle
//         ↓                         ↓
// ---------------------------------------------
//                      ↓
//                 LaunchGate → AppState (watch) → presentation surface

pub mod launch_gate;
pub mod session;
pub mod subscription;
pub mod validate_configuration;

pub use launch_gate::{HoldOutcome, LaunchGate, LaunchGateError, MinimumDisplay};
pub use session::RestoringSessionStore;
pub use subscription::{EntitlementSubscriptionOracle, LastSync, SubscriptionReconciler};
pub use validate_configuration::{ConfigurationError, ValidateConfiguration};
