//! Gate domain module.
//!
//! This module defines the application routing tag and the launch/subscription
//! gate state machine types.

pub mod state;
pub mod state_machine;
pub mod status;

pub use state::AppState;
pub use state_machine::{GateAction, GateEvent, GateStateMachine};
pub use status::{ConfigurationIssue, GateSnapshot, GateStatus};
