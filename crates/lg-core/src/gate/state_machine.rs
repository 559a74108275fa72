//! Gate state machine.
//!
//! Defines a pure state transition function for the launch / subscription gate.
//! The orchestrator performs the network calls, feeds their results back in as
//! events and executes the returned actions.

use serde::{Deserialize, Serialize};

use crate::gate::AppState;
use crate::subscription::SubscriptionStatus;

/// Events that drive the gate.
///
/// 驱动门控流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    /// The launch sequence began; show the splash screen.
    LaunchStarted,
    /// The launch sequence computed its target.
    LaunchResolved { target: AppState },
    ShowValueScreens,
    ShowSignIn,
    ShowOnboarding,
    ShowSurvey,
    /// The survey pass-through finished.
    SurveyCompleted,
    ShowPaywall,
    /// Upgrade call-to-action pressed inside the main tabs.
    UpgradeRequested,
    /// Admission granted by the caller (e.g. right after a purchase).
    AdmissionForced,
    /// Result of the authoritative-with-fallback check for admission.
    AdmissionChecked { status: SubscriptionStatus },
    /// Defensive paywall routing requested.
    PaywallRequested,
    /// Result of the cached entitlement re-check.
    CachedEntitlementChecked { status: SubscriptionStatus },
    /// Result of the resume-time subscription check.
    ResumeChecked { status: SubscriptionStatus },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateAction {
    /// Re-read the cached entitlement before settling on the paywall.
    RecheckCachedEntitlement,
    /// Subscription lapsed while the app was backgrounded.
    ReportSubscriptionLapsed,
}

/// Pure gate state machine.
///
/// 纯状态机：不包含副作用。
pub struct GateStateMachine;

impl GateStateMachine {
    pub fn transition(state: AppState, event: GateEvent) -> (AppState, Vec<GateAction>) {
        match (state, event) {
            (_, GateEvent::LaunchStarted) => (AppState::LaunchLoading, Vec::new()),
            (_, GateEvent::LaunchResolved { target }) => (target, Vec::new()),

            (_, GateEvent::ShowValueScreens) => (AppState::ValueScreens, Vec::new()),
            (_, GateEvent::ShowSignIn) => (AppState::SignIn, Vec::new()),
            (_, GateEvent::ShowOnboarding) => (AppState::Onboarding, Vec::new()),
            (_, GateEvent::ShowSurvey) => (AppState::Survey, Vec::new()),
            (_, GateEvent::ShowPaywall) => (AppState::Paywall, Vec::new()),
            (AppState::Survey, GateEvent::SurveyCompleted) => (AppState::Paywall, Vec::new()),
            (AppState::MainTabs, GateEvent::UpgradeRequested) => (AppState::Paywall, Vec::new()),

            (_, GateEvent::AdmissionForced) => (AppState::MainTabs, Vec::new()),
            (state, GateEvent::AdmissionChecked { status }) => {
                if status.is_active() {
                    (AppState::MainTabs, Vec::new())
                } else {
                    (state, vec![GateAction::RecheckCachedEntitlement])
                }
            }
            (state, GateEvent::PaywallRequested) => {
                (state, vec![GateAction::RecheckCachedEntitlement])
            }
            (_, GateEvent::CachedEntitlementChecked { status }) => {
                if status.is_active() {
                    (AppState::MainTabs, Vec::new())
                } else {
                    (AppState::Paywall, Vec::new())
                }
            }

            (AppState::MainTabs, GateEvent::ResumeChecked { status }) if !status.is_active() => (
                AppState::Paywall,
                vec![GateAction::ReportSubscriptionLapsed],
            ),
            (AppState::Paywall, GateEvent::ResumeChecked { status }) if status.is_active() => {
                (AppState::MainTabs, Vec::new())
            }

            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(state = %state, event = ?_event, "gate event ignored in current state");
                (state, Vec::new())
            }
        }
    }

    /// Target of the launch sequence.
    ///
    /// `subscription` is only consulted when a session was restored; without a
    /// session there is no basis for a subscription decision.
    pub fn launch_target(session_restored: bool, subscription: Option<SubscriptionStatus>) -> AppState {
        if !session_restored {
            return AppState::ValueScreens;
        }
        match subscription {
            Some(status) if status.is_active() => AppState::MainTabs,
            _ => AppState::Paywall,
        }
    }
}
