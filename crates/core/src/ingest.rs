//! Ingest: decode an alert document into a batch of [`Alert`] records.
//!
//! Only the top-level shape is validated here (an object carrying an
//! `"alerts"` array). A single malformed record aborts the whole batch;
//! there is no partial-skip policy.

use serde_json::Value;

use crate::alert::Alert;
use crate::error::TriageError;

/// Decode a JSON document string into the alert batch it carries.
pub fn parse_alerts(doc: &str) -> Result<Vec<Alert>, TriageError> {
    let value: Value =
        serde_json::from_str(doc).map_err(|e| TriageError::Structure(e.to_string()))?;
    alerts_from_value(&value)
}

/// Extract the `"alerts"` array from an already-parsed document.
pub fn alerts_from_value(value: &Value) -> Result<Vec<Alert>, TriageError> {
    let entries = value
        .get("alerts")
        .ok_or_else(|| TriageError::Structure("missing \"alerts\" key".to_string()))?
        .as_array()
        .ok_or_else(|| TriageError::Structure("\"alerts\" is not an array".to_string()))?;

    entries
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.clone()).map_err(|e| TriageError::Record(e.to_string()))
        })
        .collect()
}
