//! # Gate Configuration Loader / 门控配置加载器
//!
//! Reads the TOML file, then layers `LAUNCHGATE_*` environment variables on
//! top (a `.env` file in the working directory is loaded first).
//!
//! No validation happens here: empty or malformed values are facts for
//! `ValidateConfiguration` to judge.

use std::path::Path;

use anyhow::Context;
use lg_core::config::GateConfig;
use tracing::{debug, warn};

pub const ENV_BACKEND_URL: &str = "LAUNCHGATE_BACKEND_URL";
pub const ENV_BACKEND_ANON_KEY: &str = "LAUNCHGATE_BACKEND_ANON_KEY";
pub const ENV_BILLING_API_KEY: &str = "LAUNCHGATE_BILLING_API_KEY";
pub const ENV_ENTITLEMENT_ID: &str = "LAUNCHGATE_ENTITLEMENT_ID";

/// Load the gate configuration from `config_path` plus the environment.
///
/// A missing file yields defaults; an unreadable or malformed one is an error.
pub fn load_gate_config(config_path: &Path) -> anyhow::Result<GateConfig> {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "failed to load .env; continuing without it"),
    }

    let config = read_config_file(config_path)?;
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Pure file loading. 仅读取文件，不读取环境变量。
pub fn read_config_file(config_path: &Path) -> anyhow::Result<GateConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "config file not found; using defaults");
        return Ok(GateConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    GateConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))
}

/// Overlay environment values; blank values are ignored.
pub fn apply_env_overrides<F>(mut config: GateConfig, lookup: F) -> GateConfig
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = value(ENV_BACKEND_URL) {
        config.services.backend_url = url;
    }
    if let Some(key) = value(ENV_BACKEND_ANON_KEY) {
        config.services.backend_anon_key = key;
    }
    if let Some(key) = value(ENV_BILLING_API_KEY) {
        config.services.billing_api_key = key;
    }
    if let Some(id) = value(ENV_ENTITLEMENT_ID) {
        config.entitlement_id = Some(id);
    }
    config
}
