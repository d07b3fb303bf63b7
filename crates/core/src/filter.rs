//! Filter: select an order-preserving subsequence of an alert batch.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::alert::Alert;
use crate::error::TriageError;

/// Optional predicates, AND-combined when set.
///
/// Derives `Deserialize` so a hosting surface can lift it straight out of
/// a query string or request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Exact, case-sensitive severity match.
    pub severity: Option<String>,
    /// Exact, case-sensitive service match.
    pub service: Option<String>,
    /// Recency window: keep alerts no older than this many minutes.
    pub minutes: Option<i64>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.severity.is_none() && self.service.is_none() && self.minutes.is_none()
    }
}

/// Filter against the wall clock at invocation time.
pub fn filter_alerts(alerts: &[Alert], params: &FilterParams) -> Result<Vec<Alert>, TriageError> {
    filter_alerts_at(alerts, params, Utc::now())
}

/// Filter with an explicit cutoff reference.
///
/// `now` is sampled once per call so the whole batch sees one consistent
/// cutoff. Timestamps are parsed only when the window predicate is active,
/// and only for alerts the earlier predicates kept; the first unparseable
/// one aborts the batch.
pub fn filter_alerts_at(
    alerts: &[Alert],
    params: &FilterParams,
    now: DateTime<Utc>,
) -> Result<Vec<Alert>, TriageError> {
    // Validate the window once up front; minutes arrives unchecked from
    // query strings and CLI flags, and an unrepresentable value must be
    // an error, not a panic.
    let window = match params.minutes {
        Some(minutes) => Some(
            Duration::try_minutes(minutes).ok_or(TriageError::Window { minutes })?,
        ),
        None => None,
    };

    let mut kept = Vec::new();

    for alert in alerts {
        if let Some(severity) = &params.severity {
            if alert.severity != *severity {
                continue;
            }
        }
        if let Some(service) = &params.service {
            if alert.service != *service {
                continue;
            }
        }
        if let Some(window) = window {
            let ts = alert.parsed_timestamp()?;
            if now - ts > window {
                continue;
            }
        }
        kept.push(alert.clone());
    }

    Ok(kept)
}
