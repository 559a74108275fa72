//! Launch gate orchestrator.
//!
//! This module coordinates the gate state machine with session restoration,
//! subscription reconciliation and the anti-flicker hold. No operation here
//! returns an error: collaborator failures are reported and degrade to the
//! conservative route (paywall or value screens).

use std::sync::Arc;

use lg_core::config::GateConfig;
use lg_core::gate::{
    AppState, ConfigurationIssue, GateAction, GateEvent, GateSnapshot, GateStateMachine,
    GateStatus,
};
use lg_core::ports::{ErrorCategory, ErrorReporterPort, GateEventPort, SessionStorePort};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::deps::GateDeps;
use crate::usecases::launch_gate::context::GateContext;
use crate::usecases::launch_gate::min_display::{HoldOutcome, MinimumDisplay};
use crate::usecases::subscription::SubscriptionReconciler;
use crate::usecases::validate_configuration::ValidateConfiguration;

const OP_LAUNCH: &str = "run_launch_sequence";
const OP_MAIN_TABS: &str = "start_main_tabs";
const OP_RESUME: &str = "verify_on_resume";

/// Conditions the gate reports but recovers from on its own.
#[derive(Debug, thiserror::Error)]
pub enum LaunchGateError {
    #[error("subscription expired while app was in background")]
    SubscriptionLapsed,
}

/// Single owner of [`AppState`] from process start to steady state.
pub struct LaunchGate {
    context: GateContext,
    session_store: Arc<dyn SessionStorePort>,
    reconciler: SubscriptionReconciler,
    reporter: Arc<dyn ErrorReporterPort>,
    gate_events: Arc<dyn GateEventPort>,
    config: GateConfig,
    shutdown: CancellationToken,
}

impl LaunchGate {
    pub fn new(deps: GateDeps) -> Self {
        let GateDeps {
            session_store,
            subscription_oracle,
            error_reporter,
            gate_events,
            config,
        } = deps;

        Self {
            context: GateContext::new(),
            session_store,
            reconciler: SubscriptionReconciler::new(subscription_oracle, error_reporter.clone()),
            reporter: error_reporter,
            gate_events,
            config,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn snapshot(&self) -> GateSnapshot {
        self.context.snapshot()
    }

    pub fn state(&self) -> AppState {
        self.context.state()
    }

    pub fn status(&self) -> GateStatus {
        self.context.status()
    }

    /// Observe every snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<GateSnapshot> {
        self.context.subscribe()
    }

    /// Abandon any pending anti-flicker hold (process teardown).
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Runs the one-time launch sequence. A no-op once it has completed.
    pub async fn run_launch_sequence(&self) -> AppState {
        if self.context.status().has_completed_initial_gate {
            info!("launch sequence already completed; skipping");
            return self.context.state();
        }
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if self.context.status().has_completed_initial_gate {
            info!("launch sequence completed while waiting; skipping");
            return self.context.state();
        }

        let span = info_span!("usecase.launch_gate.run_launch_sequence");
        async {
            self.context.set_initial_gate_completed(false);
            self.dispatch_locked(GateEvent::LaunchStarted, OP_LAUNCH).await;
            self.revalidate_configuration();
            info!("starting launch gate");

            let min_display = MinimumDisplay::start(self.config.timings.min_launch_display());

            let has_credential = self.session_store.has_local_credential();
            let budget = self.config.timings.restore_wait(has_credential);
            let restored = if has_credential {
                self.session_store.wait_for_restored_session(budget).await
            } else {
                false
            };
            info!(has_credential, budget = ?budget, restored, "session restore finished");

            let subscription = if restored {
                let _verifying = self.context.verifying();
                Some(self.reconciler.resolve(OP_LAUNCH).await.status)
            } else {
                None
            };
            let target = GateStateMachine::launch_target(restored, subscription);

            let outcome = min_display.hold(&self.shutdown).await;
            let waited = min_display.elapsed();
            match outcome {
                HoldOutcome::Cancelled => debug!("anti-flicker hold cancelled"),
                outcome => debug!(?outcome, elapsed = ?waited, "anti-flicker hold finished"),
            }

            let state = self
                .dispatch_locked(GateEvent::LaunchResolved { target }, OP_LAUNCH)
                .await;
            self.context.set_initial_gate_completed(true);
            self.gate_events
                .emit_gate_changed(self.context.snapshot())
                .await;
            info!(state = %state, "launch gate completed");
            state
        }
        .instrument(span)
        .await
    }

    pub async fn start_value_screens(&self) -> AppState {
        self.navigate(GateEvent::ShowValueScreens, "start_value_screens").await
    }

    pub async fn start_sign_in(&self) -> AppState {
        self.navigate(GateEvent::ShowSignIn, "start_sign_in").await
    }

    pub async fn start_onboarding(&self) -> AppState {
        self.navigate(GateEvent::ShowOnboarding, "start_onboarding").await
    }

    pub async fn start_survey(&self) -> AppState {
        self.navigate(GateEvent::ShowSurvey, "start_survey").await
    }

    /// The survey is a pass-through: finishing it lands on the paywall.
    pub async fn complete_survey(&self) -> AppState {
        self.navigate(GateEvent::SurveyCompleted, "complete_survey").await
    }

    pub async fn start_paywall(&self) -> AppState {
        self.navigate(GateEvent::ShowPaywall, "start_paywall").await
    }

    /// Upgrade call-to-action from inside the main tabs.
    pub async fn upgrade_from_tabs(&self) -> AppState {
        self.navigate(GateEvent::UpgradeRequested, "upgrade_from_tabs").await
    }

    /// Admit the user to the main tabs, verifying the subscription first
    /// unless `force` is set (e.g. right after a successful purchase).
    pub async fn start_main_tabs(&self, force: bool) -> AppState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let span = info_span!("usecase.launch_gate.start_main_tabs", force);
        async {
            let _verifying = self.context.verifying();
            if force {
                info!("forcing main tabs without verification");
                return self
                    .dispatch_locked(GateEvent::AdmissionForced, OP_MAIN_TABS)
                    .await;
            }
            let check = self.reconciler.resolve(OP_MAIN_TABS).await;
            self.dispatch_locked(
                GateEvent::AdmissionChecked {
                    status: check.status,
                },
                OP_MAIN_TABS,
            )
            .await
        }
        .instrument(span)
        .await
    }

    /// Re-check the subscription when the app returns to the foreground.
    ///
    /// Ignored until the launch sequence has completed, so a resume event can
    /// never race the launch for the state write.
    pub async fn verify_on_resume(&self) -> AppState {
        if !self.resume_allowed() {
            debug!("resume verification ignored before initial gate");
            return self.context.state();
        }
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if !self.resume_allowed() {
            return self.context.state();
        }

        let span = info_span!("usecase.launch_gate.verify_on_resume");
        async {
            let _verifying = self.context.verifying();
            let check = self.reconciler.resolve(OP_RESUME).await;
            self.dispatch_locked(
                GateEvent::ResumeChecked {
                    status: check.status,
                },
                OP_RESUME,
            )
            .await
        }
        .instrument(span)
        .await
    }

    /// Defensive paywall routing: bounces to the main tabs when the cached
    /// entitlement is already active.
    pub async fn route_to_paywall_if_needed(&self) -> AppState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let span = info_span!("usecase.launch_gate.route_to_paywall_if_needed");
        async {
            let _verifying = self.context.verifying();
            self.dispatch_locked(GateEvent::PaywallRequested, "route_to_paywall_if_needed")
                .await
        }
        .instrument(span)
        .await
    }

    /// Re-run configuration validation (e.g. from a retry button).
    pub fn revalidate_configuration(&self) -> Option<ConfigurationIssue> {
        let issue = ValidateConfiguration::new(self.config.services.clone())
            .execute()
            .err()
            .map(|err| err.to_issue());
        self.context.set_configuration_issue(issue.clone());
        issue
    }

    fn resume_allowed(&self) -> bool {
        let snapshot = self.context.snapshot();
        snapshot.status.has_completed_initial_gate && snapshot.state != AppState::LaunchLoading
    }

    async fn navigate(&self, event: GateEvent, operation: &'static str) -> AppState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.dispatch_locked(event, operation).await
    }

    /// Must be called with the dispatch lock held. `operation` names the
    /// public operation in logs.
    async fn dispatch_locked(&self, event: GateEvent, operation: &'static str) -> AppState {
        let mut current = self.context.state();
        let mut pending_events = vec![event];

        while let Some(event) = pending_events.pop() {
            let from = current;
            let event_name = format!("{:?}", event);
            let (next, actions) = GateStateMachine::transition(current, event);
            info!(
                operation,
                from = %from,
                to = %next,
                event = %event_name,
                "gate state transition"
            );
            pending_events.extend(self.execute_actions(actions, operation).await);
            self.set_state_and_emit(next).await;
            current = next;
        }

        current
    }

    async fn execute_actions(
        &self,
        actions: Vec<GateAction>,
        operation: &'static str,
    ) -> Vec<GateEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "gate executing action");
            match action {
                GateAction::RecheckCachedEntitlement => {
                    let check = self.reconciler.cached(operation).await;
                    follow_up_events.push(GateEvent::CachedEntitlementChecked {
                        status: check.status,
                    });
                }
                GateAction::ReportSubscriptionLapsed => {
                    let err = anyhow::Error::new(LaunchGateError::SubscriptionLapsed);
                    self.reporter.report(&err, ErrorCategory::Navigation);
                    warn!("subscription lapsed while in main tabs; redirecting to paywall");
                }
            }
        }
        follow_up_events
    }

    async fn set_state_and_emit(&self, state: AppState) {
        if self.context.set_state(state) {
            self.gate_events
                .emit_gate_changed(self.context.snapshot())
                .await;
        }
    }
}

impl Drop for LaunchGate {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
