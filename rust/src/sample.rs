//! Built-in demonstration project.

use crate::error::SchedulingError;
use crate::models::Activity;

/// (id, name, duration, comma-separated predecessors)
type SampleEntry = (&'static str, &'static str, i64, &'static str);

const SAMPLE_PROJECT: [SampleEntry; 5] = [
    ("A", "Start", 2, ""),
    ("B", "Foundation", 4, "A"),
    ("C", "Structure", 6, "B"),
    ("D", "Electrical", 3, "B"),
    ("E", "Finish", 2, "C, D"),
];

/// The five-activity sample network.
///
/// `A(2) -> B(4) -> {C(6), D(3)} -> E(2)`: duration 14, critical path A, B, C, E.
pub fn sample_activities() -> Result<Vec<Activity>, SchedulingError> {
    build_entries(&SAMPLE_PROJECT)
}

fn build_entries(entries: &[SampleEntry]) -> Result<Vec<Activity>, SchedulingError> {
    entries
        .iter()
        .map(|&(id, name, duration, preds)| Activity::parse(id, name, duration, preds))
        .collect()
}
