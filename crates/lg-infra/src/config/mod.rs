mod loader;

pub use loader::{
    apply_env_overrides, load_gate_config, read_config_file, ENV_BACKEND_ANON_KEY,
    ENV_BACKEND_URL, ENV_BILLING_API_KEY, ENV_ENTITLEMENT_ID,
};
