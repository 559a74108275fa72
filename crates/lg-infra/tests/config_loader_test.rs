use std::io::Write;
use std::time::Duration;

use lg_core::config::GateConfig;
use lg_infra::config::{apply_env_overrides, read_config_file, ENV_BACKEND_ANON_KEY};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn reads_full_config_file() {
    let toml_content = r#"
        entitlement_id = "pro"

        [timings]
        min_launch_display_ms = 500
        restore_wait_with_credential_ms = 2000

        [services]
        backend_url = "https://project.supabase.co"
        backend_anon_key = "anon"
        billing_api_key = "appl_public"
    "#;
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = read_config_file(temp_file.path()).unwrap();

    assert_eq!(config.entitlement_id.as_deref(), Some("pro"));
    assert_eq!(config.timings.min_launch_display(), Duration::from_millis(500));
    assert_eq!(config.timings.restore_wait(true), Duration::from_millis(2_000));
    // Keys left out keep their defaults.
    assert_eq!(config.timings.restore_wait(false), Duration::from_millis(150));
    assert_eq!(config.services.billing_api_key, "appl_public");
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();

    let config = read_config_file(&dir.path().join("launchgate.toml")).unwrap();

    assert_eq!(config, GateConfig::default());
}

#[test]
fn malformed_file_is_an_error_with_path_context() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[timings\nmin_launch_display_ms = ").unwrap();

    let err = read_config_file(temp_file.path()).unwrap_err();

    assert!(format!("{err}").contains("Failed to parse config as TOML"));
}

#[test]
fn empty_values_are_accepted_as_facts() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[services]\nbackend_url = \"\"\n")
        .unwrap();

    let config = read_config_file(temp_file.path()).unwrap();

    assert_eq!(config.services.backend_url, "");
}

#[test]
fn environment_wins_over_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[services]\nbackend_anon_key = \"from-file\"\n")
        .unwrap();
    let config = read_config_file(temp_file.path()).unwrap();

    let config = apply_env_overrides(config, |key| {
        (key == ENV_BACKEND_ANON_KEY).then(|| "from-env".to_string())
    });

    assert_eq!(config.services.backend_anon_key, "from-env");
}
