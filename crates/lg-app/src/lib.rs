//! LaunchGate Application Orchestration Layer
//!
//! This crate contains the launch gate orchestrator and the subscription and
//! session use cases it is built from.

pub mod deps;
pub mod usecases;

pub use deps::GateDeps;
pub use usecases::{LaunchGate, SubscriptionReconciler};
