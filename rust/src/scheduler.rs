//! CPM scheduler: critical path calculation using forward and backward passes.

use std::collections::HashMap;

use crate::config::ScheduleConfig;
use crate::error::SchedulingError;
use crate::graph::ActivityGraph;
use crate::interner::ActivityId;
use crate::models::{Activity, ProjectSchedule, ScheduleResult};
use crate::log_phase;
use crate::logging::Phase;

const OUT_OF_RANGE: &str = "schedule exceeds representable range";

/// Early and late times for every activity, indexed by handle.
struct PassTimes {
    early_start: Vec<i64>,
    early_finish: Vec<i64>,
    late_start: Vec<i64>,
    late_finish: Vec<i64>,
}

impl PassTimes {
    fn total_float(&self, id: ActivityId) -> i64 {
        self.late_start[id as usize] - self.early_start[id as usize]
    }
}

/// Compute the CPM schedule for an activity set with default configuration.
///
/// See [`schedule_with_config`].
pub fn schedule(activities: &[Activity]) -> Result<ProjectSchedule, SchedulingError> {
    schedule_with_config(activities, &ScheduleConfig::default())
}

/// Compute the CPM schedule for an activity set.
///
/// This:
/// 1. Validates the set and derives a deterministic topological order
/// 2. Runs the forward pass (ES/EF) in that order
/// 3. Runs the backward pass (LS/LF) in reverse order
/// 4. Derives total float, free float and criticality
/// 5. Traces one critical chain, breaking ties by smallest id
///
/// # Returns
/// * `Ok(ProjectSchedule)`; an empty set yields an empty schedule of duration 0
/// * `Err(SchedulingError)` if any activity is invalid, references an unknown
///   predecessor, or the dependencies form a cycle. No partial result is produced.
pub fn schedule_with_config(
    activities: &[Activity],
    config: &ScheduleConfig,
) -> Result<ProjectSchedule, SchedulingError> {
    let verbosity = config.verbosity;

    let graph = ActivityGraph::build(activities)
        .inspect_err(|e| log_phase!(verbosity, Phase::Validate, "rejected: {}", e))?;
    let order = graph
        .topological_order()
        .inspect_err(|e| log_phase!(verbosity, Phase::Validate, "rejected: {}", e))?;

    log_phase!(
        verbosity,
        Phase::Validate,
        "graph ok: {} activities, {} sources, {} sinks",
        graph.len(),
        order.iter().filter(|&&id| graph.is_source(id)).count(),
        order.iter().filter(|&&id| graph.is_sink(id)).count()
    );

    let (early_start, early_finish) = forward_pass(&graph, &order, verbosity)
        .inspect_err(|e| log_phase!(verbosity, Phase::Validate, "rejected: {}", e))?;
    let (project_duration, late_start, late_finish) =
        backward_pass(&graph, &order, &early_finish, verbosity)
            .inspect_err(|e| log_phase!(verbosity, Phase::Validate, "rejected: {}", e))?;

    let times = PassTimes {
        early_start,
        early_finish,
        late_start,
        late_finish,
    };

    let critical_path: Vec<String> = trace_critical_path(&graph, &times)
        .into_iter()
        .map(|id| graph.index.resolve(id).to_string())
        .collect();
    log_phase!(verbosity, Phase::Trace, "[{}]", critical_path.join(" -> "));

    let mut results: HashMap<String, ScheduleResult> = HashMap::with_capacity(graph.len());
    for &id in &order {
        let result = build_result(&graph, &times, project_duration, id);
        log_phase!(
            verbosity,
            Phase::Float,
            "{}: TF={} FF={} critical={}",
            result.id,
            result.total_float,
            result.free_float,
            result.is_critical
        );
        results.insert(result.id.clone(), result);
    }

    log_phase!(
        verbosity,
        Phase::Summary,
        "project duration {} days, critical path [{}]",
        project_duration,
        critical_path.join(" -> ")
    );

    Ok(ProjectSchedule {
        activities: results,
        project_duration,
        critical_path,
        topological_order: order
            .iter()
            .map(|&id| graph.index.resolve(id).to_string())
            .collect(),
    })
}

/// ES = max(EF of predecessors), 0 for sources; EF = ES + duration.
///
/// Fails with `InvalidActivity` for the first activity whose finish does not fit
/// in an `i64`.
fn forward_pass(
    graph: &ActivityGraph,
    order: &[ActivityId],
    verbosity: u8,
) -> Result<(Vec<i64>, Vec<i64>), SchedulingError> {
    let n = graph.len();
    let mut early_start = vec![0i64; n];
    let mut early_finish = vec![0i64; n];

    for &id in order {
        let idx = id as usize;
        let start = graph.predecessors[idx]
            .iter()
            .map(|&pred| early_finish[pred as usize])
            .max()
            .unwrap_or(0);
        let activity = graph.activity(id);
        let finish = start
            .checked_add(activity.duration())
            .ok_or_else(|| SchedulingError::invalid(activity.id(), OUT_OF_RANGE))?;
        early_start[idx] = start;
        early_finish[idx] = finish;
        log_phase!(verbosity, Phase::Forward, "{}: ES={} EF={}", activity.id(), start, finish);
    }

    Ok((early_start, early_finish))
}

/// LF = project duration for sinks, else min(LS of successors); LS = LF - duration.
///
/// Returns the project duration alongside the late times.
fn backward_pass(
    graph: &ActivityGraph,
    order: &[ActivityId],
    early_finish: &[i64],
    verbosity: u8,
) -> Result<(i64, Vec<i64>, Vec<i64>), SchedulingError> {
    let n = graph.len();

    // The overall max EF is always reached at a sink
    let project_duration = order
        .iter()
        .filter(|&&id| graph.is_sink(id))
        .map(|&id| early_finish[id as usize])
        .max()
        .unwrap_or(0);

    let mut late_start = vec![0i64; n];
    let mut late_finish = vec![0i64; n];

    for &id in order.iter().rev() {
        let idx = id as usize;
        let finish = graph.successors[idx]
            .iter()
            .map(|&succ| late_start[succ as usize])
            .min()
            .unwrap_or(project_duration);
        let activity = graph.activity(id);
        let start = finish
            .checked_sub(activity.duration())
            .ok_or_else(|| SchedulingError::invalid(activity.id(), OUT_OF_RANGE))?;
        late_finish[idx] = finish;
        late_start[idx] = start;
        log_phase!(verbosity, Phase::Backward, "{}: LS={} LF={}", activity.id(), start, finish);
    }

    Ok((project_duration, late_start, late_finish))
}

/// Free float: room before the earliest successor start (or the project end).
fn free_float(
    graph: &ActivityGraph,
    times: &PassTimes,
    project_duration: i64,
    id: ActivityId,
) -> i64 {
    let idx = id as usize;
    let next_start = graph.successors[idx]
        .iter()
        .map(|&succ| times.early_start[succ as usize])
        .min()
        .unwrap_or(project_duration);
    next_start - times.early_finish[idx]
}

fn build_result(
    graph: &ActivityGraph,
    times: &PassTimes,
    project_duration: i64,
    id: ActivityId,
) -> ScheduleResult {
    let idx = id as usize;
    let activity = graph.activity(id);
    let total_float = times.total_float(id);

    ScheduleResult {
        id: activity.id().to_string(),
        name: activity.name().to_string(),
        duration: activity.duration(),
        early_start: times.early_start[idx],
        early_finish: times.early_finish[idx],
        late_start: times.late_start[idx],
        late_finish: times.late_finish[idx],
        total_float,
        free_float: free_float(graph, times, project_duration, id),
        is_critical: total_float == 0,
    }
}

/// Trace one zero-float chain from a source to a sink.
///
/// Starts at the critical sink with the smallest id and walks predecessors whose
/// EF equals the current ES, again preferring the smallest id. Handle order is id
/// order, so "smallest handle" is "smallest id".
fn trace_critical_path(graph: &ActivityGraph, times: &PassTimes) -> Vec<ActivityId> {
    let sink = (0..graph.len() as ActivityId)
        .find(|&id| graph.is_sink(id) && times.total_float(id) == 0);

    let Some(mut current) = sink else {
        return Vec::new();
    };

    let mut path = vec![current];
    while !graph.is_source(current) {
        let start = times.early_start[current as usize];
        let next = graph.predecessors[current as usize]
            .iter()
            .copied()
            .filter(|&pred| {
                times.total_float(pred) == 0 && times.early_finish[pred as usize] == start
            })
            .min();

        match next {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            // A critical non-source always has a driving critical predecessor
            None => break,
        }
    }

    path.reverse();
    path
}
