use std::collections::BTreeSet;

use cpm_rust::{schedule, Activity, ProjectSchedule};
use proptest::prelude::*;

// Strategy to generate a valid activity network.
// Acyclicity is guaranteed by only letting activity N depend on activities 0..N-1.
fn dag_strategy(max_activities: usize) -> impl Strategy<Value = Vec<Activity>> {
    (0..=max_activities).prop_flat_map(|count| {
        let durations = proptest::collection::vec(0i64..20, count);
        let deps = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            count,
        );
        (durations, deps).prop_map(|(durations, raw_deps)| {
            durations
                .into_iter()
                .zip(raw_deps)
                .enumerate()
                .map(|(i, (duration, potential))| {
                    let preds: BTreeSet<String> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential
                            .into_iter()
                            .map(|d| format!("T{:02}", d % i))
                            .collect()
                    };
                    Activity::new(format!("T{:02}", i), format!("task {i}"), duration, preds)
                        .unwrap()
                })
                .collect()
        })
    })
}

fn successors_of(activities: &[Activity], id: &str) -> Vec<String> {
    activities
        .iter()
        .filter(|a| a.predecessors().iter().any(|p| p == id))
        .map(|a| a.id().to_string())
        .collect()
}

fn check_critical_path(activities: &[Activity], schedule: &ProjectSchedule) {
    if activities.is_empty() {
        assert!(schedule.critical_path.is_empty());
        return;
    }
    let path = &schedule.critical_path;
    assert!(!path.is_empty());

    let first = activities.iter().find(|a| a.id() == path[0]).unwrap();
    assert!(first.predecessors().is_empty(), "path must start at a source");
    let last = path.last().unwrap();
    assert!(successors_of(activities, last).is_empty(), "path must end at a sink");

    let mut total = 0;
    for (i, id) in path.iter().enumerate() {
        let r = schedule.get(id).unwrap();
        assert!(r.is_critical);
        total += r.duration;
        if i > 0 {
            let prev = schedule.get(&path[i - 1]).unwrap();
            let act = activities.iter().find(|a| a.id() == id).unwrap();
            assert!(act.predecessors().contains(&path[i - 1]));
            assert_eq!(prev.early_finish, r.early_start);
        }
    }
    assert_eq!(total, schedule.project_duration);
}

proptest! {
    #[test]
    fn test_timing_invariants(activities in dag_strategy(25)) {
        let schedule = schedule(&activities).unwrap();
        prop_assert_eq!(schedule.len(), activities.len());

        let max_ef = schedule.activities.values().map(|r| r.early_finish).max().unwrap_or(0);
        let max_lf = schedule.activities.values().map(|r| r.late_finish).max().unwrap_or(0);
        prop_assert_eq!(schedule.project_duration, max_ef);
        prop_assert_eq!(schedule.project_duration, max_lf);

        for act in &activities {
            let r = schedule.get(act.id()).unwrap();
            prop_assert!(r.early_start <= r.early_finish);
            prop_assert!(r.late_start <= r.late_finish);
            prop_assert!(r.early_start <= r.late_start);
            prop_assert!(r.early_finish <= r.late_finish);
            prop_assert_eq!(r.early_finish - r.early_start, act.duration());
            prop_assert_eq!(r.late_finish - r.late_start, act.duration());
            prop_assert!(r.total_float >= 0);
            prop_assert!(r.free_float >= 0);
            prop_assert!(r.free_float <= r.total_float);
            prop_assert_eq!(r.is_critical, r.total_float == 0);

            if act.predecessors().is_empty() {
                prop_assert_eq!(r.early_start, 0);
            }
            if successors_of(&activities, act.id()).is_empty() && r.total_float == 0 {
                prop_assert_eq!(r.early_finish, schedule.project_duration);
            }
        }

        check_critical_path(&activities, &schedule);
    }

    #[test]
    fn test_schedule_is_idempotent(activities in dag_strategy(15)) {
        let first = schedule(&activities).unwrap();
        let second = schedule(&activities).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_input_order_does_not_matter(activities in dag_strategy(15)) {
        let mut reversed = activities.clone();
        reversed.reverse();
        prop_assert_eq!(schedule(&activities).unwrap(), schedule(&reversed).unwrap());
    }
}
