//! Core data types for the CPM engine.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::error::SchedulingError;

// Note: We use std HashMap here for PyO3 interface compatibility

/// Split a comma-separated predecessor list into trimmed, non-empty ids.
///
/// `"A, B,,C "` becomes `["A", "B", "C"]`.
pub fn parse_predecessors(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// One schedule node: a unit of work and the activities it must wait for.
///
/// Fields are fixed at construction; edits between runs produce a new value.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    #[pyo3(get)]
    id: String,
    #[pyo3(get)]
    name: String,
    #[pyo3(get)]
    duration: i64,
    #[pyo3(get)]
    predecessors: Vec<String>,
    #[pyo3(get)]
    resource: Option<String>,
    #[pyo3(get)]
    description: Option<String>,
}

impl Activity {
    /// Create a validated activity.
    ///
    /// Ids and names are trimmed; predecessor ids are trimmed, blanks dropped and
    /// duplicates collapsed in first-seen order.
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: i64,
        predecessors: I,
    ) -> Result<Self, SchedulingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(SchedulingError::invalid(&id, "id must be a non-empty string"));
        }
        if duration < 0 {
            return Err(SchedulingError::invalid(
                &id,
                format!("duration must be non-negative, got {duration}"),
            ));
        }

        let mut preds: Vec<String> = Vec::new();
        for pred in predecessors {
            let pred = pred.into().trim().to_string();
            if pred.is_empty() || preds.contains(&pred) {
                continue;
            }
            if pred == id {
                return Err(SchedulingError::invalid(&id, "activity lists itself as a predecessor"));
            }
            preds.push(pred);
        }

        Ok(Self {
            id,
            name: name.into().trim().to_string(),
            duration,
            predecessors: preds,
            resource: None,
            description: None,
        })
    }

    /// Create an activity from a comma-separated predecessor list (`"A, B"`).
    pub fn parse(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: i64,
        predecessors: &str,
    ) -> Result<Self, SchedulingError> {
        Self::new(id, name, duration, parse_predecessors(predecessors))
    }

    /// Attach the responsible resource or team. Informational only.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = non_blank(resource.into());
        self
    }

    /// Attach free-form scope notes. Informational only.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn predecessors(&self) -> &[String] {
        &self.predecessors
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[pymethods]
impl Activity {
    #[new]
    #[pyo3(signature = (id, name, duration, predecessors=None, resource=None, description=None))]
    fn py_new(
        id: String,
        name: String,
        duration: i64,
        predecessors: Option<Vec<String>>,
        resource: Option<String>,
        description: Option<String>,
    ) -> PyResult<Self> {
        let mut activity = Self::new(id, name, duration, predecessors.unwrap_or_default())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        if let Some(resource) = resource {
            activity = activity.with_resource(resource);
        }
        if let Some(description) = description {
            activity = activity.with_description(description);
        }
        Ok(activity)
    }

    /// Build an activity from a comma-separated predecessor string.
    #[staticmethod]
    #[pyo3(name = "parse")]
    fn py_parse(id: String, name: String, duration: i64, predecessors: &str) -> PyResult<Self> {
        Self::parse(id, name, duration, predecessors)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Activity(id={:?}, name={:?}, duration={}, predecessors={:?})",
            self.id, self.name, self.duration, self.predecessors
        )
    }
}

/// Computed timing for one activity.
#[pyclass(frozen)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleResult {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: i64,
    /// Earliest possible start (forward pass).
    #[pyo3(get)]
    pub early_start: i64,
    /// `early_start + duration`.
    #[pyo3(get)]
    pub early_finish: i64,
    /// Latest start that does not delay the project (backward pass).
    #[pyo3(get)]
    pub late_start: i64,
    /// `late_start + duration`.
    #[pyo3(get)]
    pub late_finish: i64,
    /// `late_start - early_start`.
    #[pyo3(get)]
    pub total_float: i64,
    /// Slip available without delaying any immediate successor's early start.
    #[pyo3(get)]
    pub free_float: i64,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl ScheduleResult {
    /// True when the activity can slip without moving the project finish.
    pub fn has_float(&self) -> bool {
        self.total_float > 0
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(id={:?}, ES={}, EF={}, LS={}, LF={}, TF={}, critical={})",
            self.id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.total_float,
            self.is_critical
        )
    }
}

/// Output of one schedule run.
#[pyclass(frozen)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSchedule {
    /// Per-activity results keyed by activity id.
    #[pyo3(get)]
    pub activities: HashMap<String, ScheduleResult>,
    /// Longest path length; zero for an empty project.
    #[pyo3(get)]
    pub project_duration: i64,
    /// One zero-float chain from a source to a sink, in execution order.
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    /// The order both passes walked (predecessors before successors).
    #[pyo3(get)]
    pub topological_order: Vec<String>,
}

impl ProjectSchedule {
    pub fn get(&self, id: &str) -> Option<&ScheduleResult> {
        self.activities.get(id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[pymethods]
impl ProjectSchedule {
    /// Ids of every zero-float activity, sorted.
    ///
    /// This covers all critical chains, not only the one traced in `critical_path`.
    pub fn critical_activities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .activities
            .values()
            .filter(|r| r.is_critical)
            .map(|r| r.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Results in topological order, for tabular display.
    pub fn ordered_results(&self) -> Vec<ScheduleResult> {
        self.topological_order
            .iter()
            .filter_map(|id| self.activities.get(id).cloned())
            .collect()
    }

    #[pyo3(name = "get")]
    fn py_get(&self, id: &str) -> Option<ScheduleResult> {
        self.get(id).cloned()
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ProjectSchedule(activities={}, project_duration={}, critical_path={:?})",
            self.activities.len(),
            self.project_duration,
            self.critical_path
        )
    }
}
