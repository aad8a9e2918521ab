//! Error taxonomy for schedule runs.

use thiserror::Error;

/// Reasons a schedule run is refused.
///
/// Every variant is terminal: no partial schedule is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// Malformed single-activity data (negative duration, empty or duplicate id,
    /// self-reference).
    #[error("Invalid activity '{id}': {reason}")]
    InvalidActivity { id: String, reason: String },
    /// A predecessor id with no matching activity in the supplied set.
    #[error("Activity '{activity_id}' references unknown predecessor '{missing_id}'")]
    UnknownPredecessor {
        activity_id: String,
        missing_id: String,
    },
    /// The predecessor relation contains a cycle through the listed activities.
    #[error("Circular dependency detected among activities: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),
}

impl SchedulingError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidActivity {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Activity ids a caller should highlight for this failure.
    pub fn offending_ids(&self) -> Vec<&str> {
        match self {
            Self::InvalidActivity { id, .. } => vec![id.as_str()],
            Self::UnknownPredecessor { activity_id, .. } => vec![activity_id.as_str()],
            Self::CyclicDependency(ids) => ids.iter().map(|s| s.as_str()).collect(),
        }
    }
}
