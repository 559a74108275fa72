//! LaunchGate: launch and subscription gating for a subscription app.
//!
//! The gate itself lives in `lg-app`; this crate wires it to the adapters in
//! `lg-infra` and drives it from the command line.

pub mod bootstrap;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "launchgate.toml";
/// Environment variable selecting the demo scenario.
pub const SCENARIO_ENV: &str = "LAUNCHGATE_SCENARIO";
