//! Score: reduce one alert group to a single priority scalar.

use std::collections::HashSet;

use crate::alert::Alert;
use crate::error::TriageError;

/// Priority of a non-empty alert group:
///
/// `max(severity weight) + max((value - threshold) / threshold * 100)
///  + distinct component count`
///
/// The formula deliberately mixes units (weight, percentage, count) into
/// one additive scalar; that is domain policy and must not be normalized.
/// The deviation term goes negative when every alert sits below its
/// threshold, and is not clamped. Under the (service, component) grouping
/// key the component count is always 1; differently-grouped input sees
/// larger counts.
pub fn priority(group: &[Alert]) -> Result<f64, TriageError> {
    if group.is_empty() {
        return Err(TriageError::EmptyGroup);
    }
    if let Some(bad) = group.iter().find(|a| a.threshold == 0.0) {
        return Err(TriageError::ZeroThreshold {
            service: bad.service.clone(),
            component: bad.component.clone(),
        });
    }

    let severity = group
        .iter()
        .map(|a| a.severity_tier().weight())
        .max()
        .unwrap_or(0) as f64;

    let deviation = group
        .iter()
        .map(|a| (a.value - a.threshold) / a.threshold * 100.0)
        .fold(f64::NEG_INFINITY, f64::max);

    let components: HashSet<&str> = group.iter().map(|a| a.component.as_str()).collect();

    Ok(severity + deviation + components.len() as f64)
}
