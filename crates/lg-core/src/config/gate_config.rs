use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_MIN_LAUNCH_DISPLAY_MS: u64 = 700;
const DEFAULT_RESTORE_WAIT_WITH_CREDENTIAL_MS: u64 = 1_200;
const DEFAULT_RESTORE_WAIT_WITHOUT_CREDENTIAL_MS: u64 = 150;
const DEFAULT_SESSION_POLL_INTERVAL_MS: u64 = 200;

/// Gate configuration DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub timings: LaunchTimings,
    pub services: ServiceConfig,
    /// Entitlement that unlocks the app; any active entitlement when unset.
    pub entitlement_id: Option<String>,
}

impl GateConfig {
    /// Parse from TOML text. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Launch timing budgets, in milliseconds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTimings {
    /// Minimum time the splash screen stays up.
    pub min_launch_display_ms: u64,
    /// Session restore budget when a local credential exists.
    pub restore_wait_with_credential_ms: u64,
    /// Session restore budget when no local credential exists.
    pub restore_wait_without_credential_ms: u64,
    pub session_poll_interval_ms: u64,
}

impl Default for LaunchTimings {
    fn default() -> Self {
        Self {
            min_launch_display_ms: DEFAULT_MIN_LAUNCH_DISPLAY_MS,
            restore_wait_with_credential_ms: DEFAULT_RESTORE_WAIT_WITH_CREDENTIAL_MS,
            restore_wait_without_credential_ms: DEFAULT_RESTORE_WAIT_WITHOUT_CREDENTIAL_MS,
            session_poll_interval_ms: DEFAULT_SESSION_POLL_INTERVAL_MS,
        }
    }
}

impl LaunchTimings {
    pub fn min_launch_display(&self) -> Duration {
        Duration::from_millis(self.min_launch_display_ms)
    }

    /// Session restore budget for the given credential presence.
    pub fn restore_wait(&self, has_local_credential: bool) -> Duration {
        if has_local_credential {
            Duration::from_millis(self.restore_wait_with_credential_ms)
        } else {
            Duration::from_millis(self.restore_wait_without_credential_ms)
        }
    }

    pub fn session_poll_interval(&self) -> Duration {
        Duration::from_millis(self.session_poll_interval_ms)
    }
}

/// External service credentials (path-like facts, not validated here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub backend_url: String,
    pub backend_anon_key: String,
    pub billing_api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = GateConfig::from_toml_str("").unwrap();
        assert_eq!(config, GateConfig::default());
        assert_eq!(config.timings.min_launch_display(), Duration::from_millis(700));
        assert_eq!(config.timings.restore_wait(true), Duration::from_millis(1_200));
        assert_eq!(config.timings.restore_wait(false), Duration::from_millis(150));
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = GateConfig::from_toml_str(
            r#"
            entitlement_id = "pro"

            [timings]
            min_launch_display_ms = 250

            [services]
            backend_url = "https://example.supabase.co"
            "#,
        )
        .unwrap();

        assert_eq!(config.entitlement_id.as_deref(), Some("pro"));
        assert_eq!(config.timings.min_launch_display_ms, 250);
        assert_eq!(config.timings.session_poll_interval_ms, 200);
        assert_eq!(config.services.backend_url, "https://example.supabase.co");
        assert!(config.services.billing_api_key.is_empty());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(GateConfig::from_toml_str("[timings\nmin_launch_display_ms = 1").is_err());
    }
}
