//! Rust implementation of the CPM (Critical Path Method) scheduling engine.
//!
//! Computes early/late start and finish, total and free float, and the critical
//! path for a network of finish-to-start activities. The engine is a pure
//! function of its input: no state survives between runs.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod config;
mod error;
pub mod graph;
pub mod interner;
pub mod logging;
mod models;
pub mod report;
pub mod sample;
pub mod scheduler;

pub use config::ScheduleConfig;
pub use error::SchedulingError;
pub use models::{parse_predecessors, Activity, ProjectSchedule, ScheduleResult};
pub use sample::sample_activities;
pub use scheduler::{schedule, schedule_with_config};

/// Run the CPM engine over a batch of activities.
///
/// # Arguments
/// * `activities` - The complete activity set for this run
/// * `config` - Optional run configuration (verbosity)
///
/// # Returns
/// * ProjectSchedule with per-activity timing, project duration and critical path
///
/// # Raises
/// * ValueError for invalid activities, unknown predecessors or cycles
#[pyfunction]
#[pyo3(signature = (activities, config=None))]
fn run_schedule(
    activities: Vec<Activity>,
    config: Option<ScheduleConfig>,
) -> PyResult<ProjectSchedule> {
    let config = config.unwrap_or_default();
    schedule_with_config(&activities, &config).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The built-in five-activity demonstration project.
#[pyfunction]
#[pyo3(name = "sample_activities")]
fn py_sample_activities() -> PyResult<Vec<Activity>> {
    sample_activities().map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Split a comma-separated predecessor string into ids.
#[pyfunction]
#[pyo3(name = "parse_predecessors")]
fn py_parse_predecessors(text: &str) -> Vec<String> {
    parse_predecessors(text)
}

/// One-line summary of an activity's computed timing.
#[pyfunction]
fn activity_summary(activity: Activity, result: ScheduleResult) -> String {
    report::activity_line(&activity, &result)
}

/// Status-bar summary of a schedule.
#[pyfunction]
fn status_summary(schedule: ProjectSchedule) -> String {
    report::status_line(&schedule)
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Activity>()?;
    m.add_class::<ScheduleResult>()?;
    m.add_class::<ProjectSchedule>()?;

    // Config types
    m.add_class::<ScheduleConfig>()?;

    // Engine
    m.add_function(wrap_pyfunction!(run_schedule, m)?)?;

    // Helpers
    m.add_function(wrap_pyfunction!(py_sample_activities, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_predecessors, m)?)?;
    m.add_function(wrap_pyfunction!(activity_summary, m)?)?;
    m.add_function(wrap_pyfunction!(status_summary, m)?)?;

    Ok(())
}
