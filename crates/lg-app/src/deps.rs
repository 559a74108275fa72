//! # Gate Dependencies
//!
//! Dependency grouping for [`LaunchGate`](crate::usecases::LaunchGate)
//! construction. Not a builder: no build steps, no defaults, no hidden logic.

use std::sync::Arc;

use lg_core::config::GateConfig;
use lg_core::ports::{ErrorReporterPort, GateEventPort, SessionStorePort, SubscriptionOraclePort};

/// Collaborators and configuration the launch gate is constructed from.
///
/// All dependencies are required.
pub struct GateDeps {
    pub session_store: Arc<dyn SessionStorePort>,
    pub subscription_oracle: Arc<dyn SubscriptionOraclePort>,
    pub error_reporter: Arc<dyn ErrorReporterPort>,
    pub gate_events: Arc<dyn GateEventPort>,
    pub config: GateConfig,
}
