//! Group: partition a batch by (service, component).

use serde::Serialize;

use crate::alert::Alert;

/// Grouping key. Every alert in a group shares this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    pub service: String,
    pub component: String,
}

/// Insertion-ordered mapping from [`GroupKey`] to its member alerts.
///
/// Keys keep first-occurrence order and members keep input order, so
/// iterating groups of the same batch is deterministic. Recomputed on
/// every run, never cached.
#[derive(Debug, Clone, Default)]
pub struct AlertGroups {
    entries: Vec<(GroupKey, Vec<Alert>)>,
}

impl AlertGroups {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[Alert]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, members)| members.as_slice())
    }

    /// Groups in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Alert])> {
        self.entries
            .iter()
            .map(|(key, members)| (key, members.as_slice()))
    }
}

/// Partition alerts by (service, component).
///
/// Batches are small; a linear key scan beats maintaining a side index.
pub fn group_alerts(alerts: &[Alert]) -> AlertGroups {
    let mut groups = AlertGroups::default();

    for alert in alerts {
        let key = GroupKey {
            service: alert.service.clone(),
            component: alert.component.clone(),
        };
        match groups.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(alert.clone()),
            None => groups.entries.push((key, vec![alert.clone()])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(service: &str, component: &str, value: f64) -> Alert {
        Alert {
            severity: "info".to_string(),
            service: service.to_string(),
            component: component.to_string(),
            value,
            threshold: 1.0,
            timestamp: "2026-08-25T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn every_alert_lands_in_exactly_one_group() {
        let alerts = vec![
            alert("payments", "api", 1.0),
            alert("payments", "db", 2.0),
            alert("checkout", "api", 3.0),
            alert("payments", "api", 4.0),
        ];
        let groups = group_alerts(&alerts);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, alerts.len());

        for (key, members) in groups.iter() {
            for member in members {
                assert_eq!(member.service, key.service);
                assert_eq!(member.component, key.component);
            }
        }
    }

    #[test]
    fn keys_keep_first_occurrence_order() {
        let alerts = vec![
            alert("payments", "db", 1.0),
            alert("checkout", "api", 2.0),
            alert("payments", "api", 3.0),
            alert("checkout", "api", 4.0),
        ];
        let groups = group_alerts(&alerts);

        let keys: Vec<(String, String)> = groups
            .iter()
            .map(|(k, _)| (k.service.clone(), k.component.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("payments".to_string(), "db".to_string()),
                ("checkout".to_string(), "api".to_string()),
                ("payments".to_string(), "api".to_string()),
            ]
        );
    }

    #[test]
    fn members_keep_input_order() {
        let alerts = vec![
            alert("payments", "api", 1.0),
            alert("checkout", "db", 2.0),
            alert("payments", "api", 3.0),
        ];
        let groups = group_alerts(&alerts);
        let key = GroupKey {
            service: "payments".to_string(),
            component: "api".to_string(),
        };
        let members = groups.get(&key).unwrap();
        assert_eq!(members[0].value, 1.0);
        assert_eq!(members[1].value, 3.0);
    }

    #[test]
    fn empty_batch_yields_no_groups() {
        assert!(group_alerts(&[]).is_empty());
    }
}
