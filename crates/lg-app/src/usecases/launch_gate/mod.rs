//! Launch gate use cases.
//!
//! This module exposes the launch gate orchestrator and the anti-flicker helper.

mod context;
mod min_display;
pub mod orchestrator;

pub use min_display::{HoldOutcome, MinimumDisplay};
pub use orchestrator::{LaunchGate, LaunchGateError};
