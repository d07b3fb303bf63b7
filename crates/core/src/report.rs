//! Report: run the pipeline over a batch and render triage lines.

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::error::TriageError;
use crate::filter::{filter_alerts_at, FilterParams};
use crate::group::group_alerts;
use crate::score::priority;

/// Render the triage report against the wall clock.
pub fn render_report(alerts: &[Alert], params: &FilterParams) -> Result<Vec<String>, TriageError> {
    render_report_at(alerts, params, Utc::now())
}

/// Render the triage report with an explicit cutoff reference.
///
/// One line per surviving group with count and priority to two decimals.
/// When the filter leaves nothing, falls back to listing every group of
/// the unfiltered batch with counts only; no priority is computed on that
/// path.
pub fn render_report_at(
    alerts: &[Alert],
    params: &FilterParams,
    now: DateTime<Utc>,
) -> Result<Vec<String>, TriageError> {
    let filtered = filter_alerts_at(alerts, params, now)?;
    let mut lines = Vec::new();

    if filtered.is_empty() {
        lines.push("No alerts found matching the filter criteria.".to_string());
        lines.push(String::new());
        lines.push("All alert groups:".to_string());
        for (key, members) in group_alerts(alerts).iter() {
            lines.push(format!(
                "Group: (\"{}\", \"{}\"), Alerts: {}",
                key.service,
                key.component,
                members.len()
            ));
        }
        return Ok(lines);
    }

    for (key, members) in group_alerts(&filtered).iter() {
        let priority = priority(members)?;
        lines.push(format!(
            "Group: (\"{}\", \"{}\"), Alerts: {}, Priority: {:.2}",
            key.service,
            key.component,
            members.len(),
            priority
        ));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alert(severity: &str, service: &str, value: f64, threshold: f64) -> Alert {
        Alert {
            severity: severity.to_string(),
            service: service.to_string(),
            component: "api".to_string(),
            value,
            threshold,
            timestamp: "2026-08-25T10:00:00Z".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 10, 30, 0).unwrap()
    }

    #[test]
    fn reports_one_line_per_group_with_priority() {
        // Reference scenario: filter on critical keeps 2 of 3, score 61.00.
        let alerts = vec![
            alert("critical", "payment-processor", 120.0, 100.0),
            alert("warning", "payment-processor", 80.0, 100.0),
            alert("critical", "payment-processor", 150.0, 100.0),
        ];
        let params = FilterParams {
            severity: Some("critical".to_string()),
            minutes: Some(60),
            ..Default::default()
        };
        let lines = render_report_at(&alerts, &params, now()).unwrap();
        assert_eq!(
            lines,
            vec!["Group: (\"payment-processor\", \"api\"), Alerts: 2, Priority: 61.00"]
        );
    }

    #[test]
    fn no_match_falls_back_to_group_counts() {
        let alerts = vec![
            alert("warning", "payment-processor", 80.0, 100.0),
            alert("info", "checkout", 10.0, 100.0),
        ];
        let params = FilterParams {
            severity: Some("critical".to_string()),
            ..Default::default()
        };
        let lines = render_report_at(&alerts, &params, now()).unwrap();
        assert_eq!(lines[0], "No alerts found matching the filter criteria.");
        assert_eq!(lines[2], "All alert groups:");
        assert_eq!(
            &lines[3..],
            &[
                "Group: (\"payment-processor\", \"api\"), Alerts: 1".to_string(),
                "Group: (\"checkout\", \"api\"), Alerts: 1".to_string(),
            ]
        );
    }

    #[test]
    fn fallback_path_never_scores() {
        // A zero threshold would fail the scorer, but the fallback path
        // only counts.
        let alerts = vec![alert("warning", "payment-processor", 80.0, 0.0)];
        let params = FilterParams {
            severity: Some("critical".to_string()),
            ..Default::default()
        };
        let lines = render_report_at(&alerts, &params, now()).unwrap();
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn zero_threshold_surfaces_on_the_scoring_path() {
        let alerts = vec![alert("critical", "payment-processor", 80.0, 0.0)];
        let params = FilterParams::default();
        let err = render_report_at(&alerts, &params, now()).unwrap_err();
        assert!(matches!(err, TriageError::ZeroThreshold { .. }));
    }
}
