//! Alert triage core: ingest, filter, group, and score alert batches.
//!
//! One invocation processes one static batch; nothing here does I/O or
//! holds state across calls. The pipeline is linear:
//!
//! ```text
//! ingest → filter → group → score → report
//! ```

pub mod alert;
pub mod error;
pub mod filter;
pub mod group;
pub mod ingest;
pub mod report;
pub mod score;
pub mod severity;

pub use alert::{Alert, TIMESTAMP_FORMAT};
pub use error::TriageError;
pub use filter::{filter_alerts, filter_alerts_at, FilterParams};
pub use group::{group_alerts, AlertGroups, GroupKey};
pub use ingest::{alerts_from_value, parse_alerts};
pub use report::{render_report, render_report_at};
pub use score::priority;
pub use severity::Severity;
