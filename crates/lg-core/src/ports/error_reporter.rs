use std::fmt;

use serde::{Deserialize, Serialize};

/// Log category attached to reported errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    Network,
    Database,
    Iap,
    Auth,
    Paywall,
    Navigation,
    SubscriptionSync,
    General,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network",
            ErrorCategory::Database => "Database",
            ErrorCategory::Iap => "IAP",
            ErrorCategory::Auth => "Auth",
            ErrorCategory::Paywall => "Paywall",
            ErrorCategory::Navigation => "Navigation",
            ErrorCategory::SubscriptionSync => "SubscriptionSync",
            ErrorCategory::General => "General",
        }
    }

    /// Keyword classification for errors reported without a category.
    ///
    /// First match wins, in declaration order of the keyword table.
    pub fn infer(message: &str) -> Self {
        const TABLE: &[(&[&str], ErrorCategory)] = &[
            (&["network", "connection", "internet"], ErrorCategory::Network),
            (&["database", "supabase", "db"], ErrorCategory::Database),
            (
                &["iap", "purchase", "subscription", "revenuecat"],
                ErrorCategory::Iap,
            ),
            (&["auth", "signin", "login"], ErrorCategory::Auth),
            (&["paywall"], ErrorCategory::Paywall),
            (&["navigate", "coordinator"], ErrorCategory::Navigation),
        ];

        let message = message.to_lowercase();
        TABLE
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(ErrorCategory::General)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error-reporting collaborator.
///
/// Fire-and-forget: implementations must not block the caller.
pub trait ErrorReporterPort: Send + Sync {
    fn report(&self, error: &anyhow::Error, category: ErrorCategory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_category_from_keywords() {
        assert_eq!(
            ErrorCategory::infer("The Internet connection appears to be offline"),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::infer("purchase was cancelled"),
            ErrorCategory::Iap
        );
        assert_eq!(ErrorCategory::infer("Login expired"), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::infer("something odd"), ErrorCategory::General);
    }

    #[test]
    fn earlier_rows_win_on_overlap() {
        // "supabase" (Database) precedes "subscription" (IAP)
        assert_eq!(
            ErrorCategory::infer("supabase subscription row missing"),
            ErrorCategory::Database
        );
    }

    #[test]
    fn iap_displays_upper_case() {
        assert_eq!(ErrorCategory::Iap.to_string(), "IAP");
    }
}
