//! Activity dependency graph: build, validation and topological ordering.
//!
//! Edges run predecessor -> successor. Activities are interned in ascending id
//! order and successor lists are kept ascending, so every traversal below is
//! deterministic regardless of input order.

use std::collections::VecDeque;

use crate::error::SchedulingError;
use crate::interner::{ActivityId, ActivityIndex};
use crate::models::Activity;

/// Validated adjacency over one activity set.
pub struct ActivityGraph<'a> {
    /// Activity id string <-> handle mapping.
    pub index: ActivityIndex,
    /// Activities indexed by handle.
    pub activities: Vec<&'a Activity>,
    /// Deduplicated predecessor handles, in declared order.
    pub predecessors: Vec<Vec<ActivityId>>,
    /// Successor handles, ascending.
    pub successors: Vec<Vec<ActivityId>>,
}

impl<'a> ActivityGraph<'a> {
    /// Build the graph, rejecting duplicate ids, self-references and references to
    /// activities outside the set.
    ///
    /// Errors are reported for the first offender in id order.
    pub fn build(activities: &'a [Activity]) -> Result<Self, SchedulingError> {
        let mut sorted: Vec<&'a Activity> = activities.iter().collect();
        sorted.sort_by(|a, b| a.id().cmp(b.id()));

        let mut index = ActivityIndex::with_capacity(sorted.len());
        for act in &sorted {
            let (_, is_new) = index.intern(act.id());
            if !is_new {
                return Err(SchedulingError::invalid(act.id(), "duplicate activity id"));
            }
        }

        let n = sorted.len();
        let mut predecessors: Vec<Vec<ActivityId>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<ActivityId>> = vec![Vec::new(); n];

        for (idx, act) in sorted.iter().enumerate() {
            for pred in act.predecessors() {
                if pred == act.id() {
                    return Err(SchedulingError::invalid(
                        act.id(),
                        "activity lists itself as a predecessor",
                    ));
                }
                let Some(pred_id) = index.get(pred) else {
                    return Err(SchedulingError::UnknownPredecessor {
                        activity_id: act.id().to_string(),
                        missing_id: pred.clone(),
                    });
                };
                // Parallel edges collapse to one
                if predecessors[idx].contains(&pred_id) {
                    continue;
                }
                predecessors[idx].push(pred_id);
                // Outer loop is ascending, so successor lists stay sorted
                successors[pred_id as usize].push(idx as ActivityId);
            }
        }

        Ok(Self {
            index,
            activities: sorted,
            predecessors,
            successors,
        })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn activity(&self, id: ActivityId) -> &'a Activity {
        self.activities[id as usize]
    }

    pub fn is_source(&self, id: ActivityId) -> bool {
        self.predecessors[id as usize].is_empty()
    }

    pub fn is_sink(&self, id: ActivityId) -> bool {
        self.successors[id as usize].is_empty()
    }

    /// Topological order via Kahn's algorithm (predecessors before successors).
    ///
    /// Sources are seeded in ascending id order. If any activity cannot be
    /// extracted the graph has a cycle, reported with its participating ids.
    pub fn topological_order(&self) -> Result<Vec<ActivityId>, SchedulingError> {
        let n = self.len();
        let mut in_degree: Vec<usize> = self.predecessors.iter().map(Vec::len).collect();

        let mut queue: VecDeque<ActivityId> = (0..n as ActivityId)
            .filter(|&id| in_degree[id as usize] == 0)
            .collect();

        let mut order: Vec<ActivityId> = Vec::with_capacity(n);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &succ in &self.successors[id as usize] {
                let degree = &mut in_degree[succ as usize];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() != n {
            let remaining: Vec<bool> = in_degree.iter().map(|&d| d > 0).collect();
            return Err(SchedulingError::CyclicDependency(self.cycle_members(remaining)));
        }

        Ok(order)
    }

    /// Narrow the activities Kahn's algorithm left behind to the ones on a cycle.
    ///
    /// What remains after the forward extraction is everything downstream of a
    /// cycle. Peeling off nodes with no remaining successors removes the purely
    /// downstream tail, leaving cycle members (and any activity on a path between
    /// two cycles). Result is sorted by id.
    fn cycle_members(&self, mut remaining: Vec<bool>) -> Vec<String> {
        let mut out_degree: Vec<usize> = vec![0; self.len()];
        for (id, &in_rest) in remaining.iter().enumerate() {
            if in_rest {
                out_degree[id] = self.successors[id]
                    .iter()
                    .filter(|&&s| remaining[s as usize])
                    .count();
            }
        }

        let mut queue: VecDeque<ActivityId> = (0..self.len() as ActivityId)
            .filter(|&id| remaining[id as usize] && out_degree[id as usize] == 0)
            .collect();

        while let Some(id) = queue.pop_front() {
            remaining[id as usize] = false;
            for &pred in &self.predecessors[id as usize] {
                if !remaining[pred as usize] {
                    continue;
                }
                let degree = &mut out_degree[pred as usize];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(pred);
                }
            }
        }

        // Handles are in id order, so this is already sorted
        remaining
            .iter()
            .enumerate()
            .filter(|&(_, &in_cycle)| in_cycle)
            .map(|(id, _)| self.index.resolve(id as ActivityId).to_string())
            .collect()
    }
}
