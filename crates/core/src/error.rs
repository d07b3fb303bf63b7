use thiserror::Error;

/// Error taxonomy for the triage pipeline.
///
/// Every failure is fatal for the batch: inputs are complete, static, and
/// local, so there is nothing to retry or partially skip. Presentation
/// (exit codes, HTTP status) is the caller's concern.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TriageError {
    /// Top-level document is missing the "alerts" key or it is not an array.
    #[error("invalid alert document: {0}")]
    Structure(String),

    /// An individual alert record failed to decode.
    #[error("malformed alert record: {0}")]
    Record(String),

    /// A timestamp field does not match the required layout.
    #[error("timestamp {value:?} does not match YYYY-MM-DDTHH:MM:SSZ")]
    Timestamp { value: String },

    /// The recency window cannot be represented as a duration.
    #[error("minutes window {minutes} is out of range")]
    Window { minutes: i64 },

    /// The scorer was handed an empty group; no maximum is defined.
    #[error("cannot score an empty alert group")]
    EmptyGroup,

    /// Deviation is undefined for a zero threshold.
    #[error("zero threshold in group ({service}, {component})")]
    ZeroThreshold { service: String, component: String },
}
