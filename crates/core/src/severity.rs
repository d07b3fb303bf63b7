use serde::{Deserialize, Serialize};

/// Canonical severity tiers and their fixed priority weights.
///
/// Alerts carry severity as a raw string; the tier is derived only when a
/// weight is needed. Equality filtering always compares the raw string
/// case-sensitively, so `Other` never collapses two distinct spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Other,
}

impl Severity {
    /// Map a raw severity string to a tier. Unknown strings weigh zero.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "critical" => Severity::Critical,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Other,
        }
    }

    /// Fixed integer contribution to a group's priority.
    pub fn weight(self) -> i64 {
        match self {
            Severity::Critical => 10,
            Severity::Warning => 5,
            Severity::Info => 1,
            Severity::Other => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_match_tiers() {
        assert_eq!(Severity::from_raw("critical").weight(), 10);
        assert_eq!(Severity::from_raw("warning").weight(), 5);
        assert_eq!(Severity::from_raw("info").weight(), 1);
        assert_eq!(Severity::from_raw("debug").weight(), 0);
        assert_eq!(Severity::from_raw("").weight(), 0);
    }

    #[test]
    fn tiers_are_case_sensitive() {
        assert_eq!(Severity::from_raw("Critical"), Severity::Other);
        assert_eq!(Severity::from_raw("CRITICAL"), Severity::Other);
    }
}
