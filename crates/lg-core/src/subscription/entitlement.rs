use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Active entitlement identifiers reported by the billing service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSet {
    active: BTreeSet<String>,
}

impl EntitlementSet {
    pub fn new<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: active.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether the user is entitled.
    ///
    /// With a configured entitlement identifier only that entitlement counts;
    /// otherwise any active entitlement does. An empty identifier is treated as
    /// not configured.
    pub fn grants(&self, entitlement_id: Option<&str>) -> bool {
        match entitlement_id.filter(|id| !id.is_empty()) {
            Some(id) => self.active.contains(id),
            None => !self.active.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_entitlement_must_be_present() {
        let set = EntitlementSet::new(["premium_monthly"]);
        assert!(!set.grants(Some("pro")));
        assert!(set.grants(Some("premium_monthly")));
    }

    #[test]
    fn any_active_entitlement_counts_without_identifier() {
        assert!(EntitlementSet::new(["anything"]).grants(None));
        assert!(EntitlementSet::new(["anything"]).grants(Some("")));
        assert!(!EntitlementSet::empty().grants(None));
    }
}
