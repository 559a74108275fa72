//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on lg-core, lg-app and lg-infra at once.
//! Assembly only: no routing decisions are made here.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use lg_app::usecases::{EntitlementSubscriptionOracle, RestoringSessionStore};
use lg_app::{GateDeps, LaunchGate};
use lg_core::config::GateConfig;
use lg_core::subscription::EntitlementSet;
use lg_infra::memory::{InMemoryAuthSession, InMemoryBilling, InMemoryProfileSync};
use lg_infra::{TracingErrorReporter, TracingGateEventEmitter};

pub const DEMO_USER_ID: &str = "demo-user";
/// Entitlement granted in subscribed scenarios when none is configured.
pub const DEFAULT_DEMO_ENTITLEMENT: &str = "premium";
const DEMO_RESTORE_DELAY: Duration = Duration::from_millis(300);

/// Simulated device/account situations for the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoScenario {
    /// First launch: no credential on disk.
    #[default]
    FreshInstall,
    ReturningSubscriber,
    ReturningFree,
    /// Credential on disk but the session never restores.
    StaleCredential,
    /// Subscriber whose billing refresh fails; the cache still says active.
    BillingOffline,
    /// Subscriber whose entitlement expires while the app is backgrounded.
    LapsedWhileBackgrounded,
}

impl DemoScenario {
    pub const ALL: [DemoScenario; 6] = [
        DemoScenario::FreshInstall,
        DemoScenario::ReturningSubscriber,
        DemoScenario::ReturningFree,
        DemoScenario::StaleCredential,
        DemoScenario::BillingOffline,
        DemoScenario::LapsedWhileBackgrounded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoScenario::FreshInstall => "fresh-install",
            DemoScenario::ReturningSubscriber => "returning-subscriber",
            DemoScenario::ReturningFree => "returning-free",
            DemoScenario::StaleCredential => "stale-credential",
            DemoScenario::BillingOffline => "billing-offline",
            DemoScenario::LapsedWhileBackgrounded => "lapsed-while-backgrounded",
        }
    }

    fn is_subscribed(&self) -> bool {
        matches!(
            self,
            DemoScenario::ReturningSubscriber
                | DemoScenario::BillingOffline
                | DemoScenario::LapsedWhileBackgrounded
        )
    }
}

impl FromStr for DemoScenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoScenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = DemoScenario::ALL.iter().map(|s| s.as_str()).collect();
                anyhow::anyhow!("unknown scenario '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// The assembled gate plus handles on the simulated services, so a driver
/// can change the world between gate operations.
pub struct DemoWiring {
    pub gate: Arc<LaunchGate>,
    pub auth: Arc<InMemoryAuthSession>,
    pub billing: Arc<InMemoryBilling>,
    pub profile: Arc<InMemoryProfileSync>,
    pub oracle: Arc<EntitlementSubscriptionOracle>,
}

pub fn wire_demo(config: GateConfig, scenario: DemoScenario) -> DemoWiring {
    let auth = Arc::new(match scenario {
        DemoScenario::FreshInstall => InMemoryAuthSession::new(),
        DemoScenario::StaleCredential => InMemoryAuthSession::with_stale_credential(),
        _ => InMemoryAuthSession::with_persisted_session(DEMO_USER_ID, DEMO_RESTORE_DELAY),
    });

    let entitlement = config
        .entitlement_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_DEMO_ENTITLEMENT.to_string());
    let entitlements = if scenario.is_subscribed() {
        EntitlementSet::new([entitlement])
    } else {
        EntitlementSet::empty()
    };
    let billing = Arc::new(InMemoryBilling::new(entitlements));
    billing.set_offline(scenario == DemoScenario::BillingOffline);

    let backend_user = match scenario {
        DemoScenario::FreshInstall | DemoScenario::StaleCredential => None,
        _ => Some(DEMO_USER_ID.to_string()),
    };
    let profile = Arc::new(InMemoryProfileSync::new(backend_user));

    let reporter = Arc::new(TracingErrorReporter);
    let oracle = Arc::new(EntitlementSubscriptionOracle::new(
        billing.clone(),
        profile.clone(),
        reporter.clone(),
        config.entitlement_id.clone(),
    ));
    let session_store = Arc::new(RestoringSessionStore::new(
        auth.clone(),
        config.timings.session_poll_interval(),
    ));

    let gate = Arc::new(LaunchGate::new(GateDeps {
        session_store,
        subscription_oracle: oracle.clone(),
        error_reporter: reporter,
        gate_events: Arc::new(TracingGateEventEmitter),
        config,
    }));

    DemoWiring {
        gate,
        auth,
        billing,
        profile,
        oracle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios_round_trip_through_their_names() {
        for scenario in DemoScenario::ALL {
            assert_eq!(scenario.as_str().parse::<DemoScenario>().unwrap(), scenario);
        }
        assert!("subscribed".parse::<DemoScenario>().is_err());
    }
}
