use lg_core::config::ServiceConfig;
use lg_core::gate::ConfigurationIssue;
use tracing::{error, info};

const MIN_BACKEND_KEY_LEN: usize = 50;
const BILLING_PUBLIC_KEY_PREFIX: &str = "appl_";

/// Configuration problems detected before the gate runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("backend URL is not configured")]
    MissingBackendUrl,
    #[error("backend URL must use HTTPS")]
    InvalidBackendUrl,
    #[error("backend anonymous key is not configured")]
    MissingBackendKey,
    #[error("backend anonymous key is invalid")]
    InvalidBackendKey,
    #[error("billing API key is not configured")]
    MissingBillingKey,
    #[error("billing API key must be a public key (starting with 'appl_')")]
    InvalidBillingKey,
}

impl ConfigurationError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConfigurationError::MissingBackendUrl | ConfigurationError::MissingBackendKey => {
                "Set LAUNCHGATE_BACKEND_URL and LAUNCHGATE_BACKEND_ANON_KEY, or fill [services] in the config file."
            }
            ConfigurationError::InvalidBackendUrl => "Use an https:// backend URL.",
            ConfigurationError::InvalidBackendKey => "Verify the backend anonymous key.",
            ConfigurationError::MissingBillingKey => {
                "Set LAUNCHGATE_BILLING_API_KEY to the public billing key."
            }
            ConfigurationError::InvalidBillingKey => {
                "Use the public billing key, not the secret one."
            }
        }
    }

    pub fn to_issue(&self) -> ConfigurationIssue {
        ConfigurationIssue {
            message: self.to_string(),
            recovery_suggestion: self.recovery_suggestion().to_string(),
        }
    }
}

/// Use case validating external service configuration.
pub struct ValidateConfiguration {
    services: ServiceConfig,
}

impl ValidateConfiguration {
    pub fn new(services: ServiceConfig) -> Self {
        Self { services }
    }

    /// Checks run in a fixed order; the first failure is returned.
    pub fn execute(&self) -> Result<(), ConfigurationError> {
        let result = self.check();
        match &result {
            Ok(()) => info!("configuration validation completed"),
            Err(err) => error!(error = %err, "configuration validation failed"),
        }
        result
    }

    fn check(&self) -> Result<(), ConfigurationError> {
        let ServiceConfig {
            backend_url,
            backend_anon_key,
            billing_api_key,
        } = &self.services;

        if backend_url.is_empty() {
            return Err(ConfigurationError::MissingBackendUrl);
        }
        if !backend_url.starts_with("https://") {
            return Err(ConfigurationError::InvalidBackendUrl);
        }
        if backend_anon_key.is_empty() {
            return Err(ConfigurationError::MissingBackendKey);
        }
        if backend_anon_key.chars().count() <= MIN_BACKEND_KEY_LEN {
            return Err(ConfigurationError::InvalidBackendKey);
        }
        if billing_api_key.is_empty() {
            return Err(ConfigurationError::MissingBillingKey);
        }
        if !billing_api_key.starts_with(BILLING_PUBLIC_KEY_PREFIX) {
            return Err(ConfigurationError::InvalidBillingKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_services() -> ServiceConfig {
        ServiceConfig {
            backend_url: "https://project.supabase.co".to_string(),
            backend_anon_key: "k".repeat(64),
            billing_api_key: "appl_public_key".to_string(),
        }
    }

    #[test]
    fn accepts_valid_configuration() {
        assert_eq!(ValidateConfiguration::new(valid_services()).execute(), Ok(()));
    }

    #[test]
    fn rejects_plain_http_backend() {
        let services = ServiceConfig {
            backend_url: "http://project.supabase.co".to_string(),
            ..valid_services()
        };
        assert_eq!(
            ValidateConfiguration::new(services).execute(),
            Err(ConfigurationError::InvalidBackendUrl)
        );
    }

    #[test]
    fn rejects_short_backend_key() {
        let services = ServiceConfig {
            backend_anon_key: "k".repeat(50),
            ..valid_services()
        };
        assert_eq!(
            ValidateConfiguration::new(services).execute(),
            Err(ConfigurationError::InvalidBackendKey)
        );
    }

    #[test]
    fn rejects_secret_billing_key() {
        let services = ServiceConfig {
            billing_api_key: "sk_secret".to_string(),
            ..valid_services()
        };
        let err = ValidateConfiguration::new(services).execute().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidBillingKey);
        assert!(err.to_string().contains("appl_"));
    }

    #[test]
    fn empty_configuration_reports_backend_url_first() {
        let err = ValidateConfiguration::new(ServiceConfig::default())
            .execute()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::MissingBackendUrl);
        assert!(!err.to_issue().recovery_suggestion.is_empty());
    }
}
