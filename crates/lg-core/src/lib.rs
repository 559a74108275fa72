//! # lg-core
//!
//! Core domain models and business logic for LaunchGate.
//!
//! This crate contains the launch/subscription gate state machine, the
//! configuration DTOs and the ports the gate consumes. It has no runtime or
//! infrastructure dependencies.

pub mod config;
pub mod gate;
pub mod ports;
pub mod subscription;

// Re-export commonly used types at the crate root
pub use config::{GateConfig, LaunchTimings, ServiceConfig};
pub use gate::{AppState, GateAction, GateEvent, GateSnapshot, GateStateMachine, GateStatus};
pub use subscription::{EntitlementSet, SubscriptionCheck, SubscriptionSource, SubscriptionStatus};
