pub mod config;
pub mod memory;
pub mod reporting;

pub use config::load_gate_config;
pub use reporting::{TracingErrorReporter, TracingGateEventEmitter};
