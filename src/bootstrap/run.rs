use lg_core::config::GateConfig;
use lg_core::gate::GateSnapshot;
use lg_core::subscription::EntitlementSet;
use tracing::{info, info_span, warn, Instrument};

use super::wiring::{wire_demo, DemoScenario};

/// Runs the launch sequence for `scenario`, then one foreground resume, and
/// returns the settled snapshot.
pub async fn run_demo(config: GateConfig, scenario: DemoScenario) -> GateSnapshot {
    let span = info_span!("demo.run", scenario = scenario.as_str());
    async {
        let wiring = wire_demo(config, scenario);
        let gate = wiring.gate.clone();

        let launched = gate.run_launch_sequence().await;
        info!(state = %launched, "launch settled");

        if scenario == DemoScenario::LapsedWhileBackgrounded {
            wiring.billing.set_entitlements(EntitlementSet::empty()).await;
        }
        let resumed = gate.verify_on_resume().await;
        info!(state = %resumed, "resume settled");

        if let Some(last_sync) = wiring.oracle.last_sync() {
            info!(status = ?last_sync.status, "last subscription sync");
        }
        match wiring.oracle.backend_mirror().await {
            Ok(Some(premium)) => info!(premium, "backend profile mirror"),
            Ok(None) => info!("no backend user; profile mirror not read"),
            Err(err) => warn!(error = %err, "backend profile read failed"),
        }

        gate.shutdown();
        gate.snapshot()
    }
    .instrument(span)
    .await
}
