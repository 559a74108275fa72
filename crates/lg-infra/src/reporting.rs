//! Tracing-backed reporting adapters.

use async_trait::async_trait;
use lg_core::gate::GateSnapshot;
use lg_core::ports::{ErrorCategory, ErrorReporterPort, GateEventPort};
use tracing::{error, info};

/// Error reporter that writes to the log. Uncategorised (`General`) errors
/// are classified by keyword first.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporterPort for TracingErrorReporter {
    fn report(&self, err: &anyhow::Error, category: ErrorCategory) {
        let message = format!("{err:#}");
        let category = match category {
            ErrorCategory::General => ErrorCategory::infer(&message),
            category => category,
        };
        error!(category = %category, error = %message, "error reported");
    }
}

/// Gate event sink for headless runs: logs every published snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingGateEventEmitter;

#[async_trait]
impl GateEventPort for TracingGateEventEmitter {
    async fn emit_gate_changed(&self, snapshot: GateSnapshot) {
        info!(
            state = %snapshot.state,
            verifying = snapshot.status.is_verifying_subscription,
            initial_gate_completed = snapshot.status.has_completed_initial_gate,
            configuration_issue = snapshot
                .configuration_issue
                .as_ref()
                .map(|issue| issue.message.as_str()),
            "gate changed"
        );
    }
}
