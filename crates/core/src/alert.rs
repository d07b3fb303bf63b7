use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TriageError;
use crate::severity::Severity;

/// Required timestamp layout, UTC with a literal `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One reported anomaly record.
///
/// Immutable once decoded. The severity and timestamp fields are kept as
/// raw strings: severity so that equality filtering stays case-sensitive
/// over arbitrary spellings, and timestamp so that a format failure
/// surfaces in the filter (where the window predicate first needs it)
/// rather than at ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: String,
    pub service: String,
    pub component: String,
    pub value: f64,
    pub threshold: f64,
    pub timestamp: String,
}

impl Alert {
    /// Severity tier for weighting; unknown strings map to `Other`.
    pub fn severity_tier(&self) -> Severity {
        Severity::from_raw(&self.severity)
    }

    /// Parse the raw timestamp against [`TIMESTAMP_FORMAT`].
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, TriageError> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| TriageError::Timestamp {
                value: self.timestamp.clone(),
            })
    }
}
