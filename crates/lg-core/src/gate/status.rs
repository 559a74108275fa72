use serde::Serialize;

use crate::gate::AppState;

/// Progress flags published next to the [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GateStatus {
    /// True while a subscription check is in flight.
    pub is_verifying_subscription: bool,
    /// False until the one-time launch sequence has finished.
    pub has_completed_initial_gate: bool,
}

/// A configuration problem detected at launch, kept as display data.
///
/// 配置问题（仅展示数据，不阻塞路由）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationIssue {
    pub message: String,
    pub recovery_suggestion: String,
}

/// Everything the presentation surface observes about the gate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GateSnapshot {
    pub state: AppState,
    pub status: GateStatus,
    pub configuration_issue: Option<ConfigurationIssue>,
}

impl GateSnapshot {
    pub fn initial() -> Self {
        Self::default()
    }
}
