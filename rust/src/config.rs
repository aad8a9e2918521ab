//! Configuration types for schedule runs.

use pyo3::prelude::*;

/// Per-run options for the CPM engine.
///
/// Nothing here changes the computed schedule; options only control diagnostics.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl ScheduleConfig {
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

#[pymethods]
impl ScheduleConfig {
    #[new]
    #[pyo3(signature = (verbosity=0))]
    fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn __repr__(&self) -> String {
        format!("ScheduleConfig(verbosity={})", self.verbosity)
    }
}
