use std::path::PathBuf;

use launchgate_lib::bootstrap::{init_tracing_subscriber, run_demo, DemoScenario};
use launchgate_lib::{DEFAULT_CONFIG_FILE, SCENARIO_ENV};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_subscriber()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = lg_infra::load_gate_config(&config_path)?;

    let scenario = match std::env::var(SCENARIO_ENV) {
        Ok(name) => name.parse::<DemoScenario>()?,
        Err(_) => DemoScenario::default(),
    };
    info!(config = %config_path.display(), scenario = scenario.as_str(), "starting launchgate");

    let snapshot = run_demo(config, scenario).await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
