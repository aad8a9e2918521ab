//! Plain-text summaries of a computed schedule.
//!
//! Used by table and status-bar views that want one line per activity or one line
//! per project.

use crate::models::{Activity, ProjectSchedule, ScheduleResult};

/// One-line description of an activity and its computed timing.
///
/// `[CRITICAL] A | Start | dur=2 | pred=[—] | ES=0 EF=2 LS=0 LF=2 | TF=0 FF=0`
pub fn activity_line(activity: &Activity, result: &ScheduleResult) -> String {
    let tag = if result.is_critical {
        "[CRITICAL]".to_string()
    } else {
        format!("[float={:>3}]", result.total_float)
    };
    let preds = if activity.predecessors().is_empty() {
        "—".to_string()
    } else {
        activity.predecessors().join(",")
    };
    format!(
        "{} {} | {} | dur={} | pred=[{}] | ES={} EF={} LS={} LF={} | TF={} FF={}",
        tag,
        result.id,
        result.name,
        result.duration,
        preds,
        result.early_start,
        result.early_finish,
        result.late_start,
        result.late_finish,
        result.total_float,
        result.free_float
    )
}

/// Status-bar summary: activity count, project duration and critical chain.
pub fn status_line(schedule: &ProjectSchedule) -> String {
    if schedule.is_empty() {
        return "Activities: 0 | Project Duration: — | Critical Path: —".to_string();
    }
    let path = if schedule.critical_path.is_empty() {
        "none".to_string()
    } else {
        schedule.critical_path.join(" → ")
    };
    format!(
        "Activities: {} | Project Duration: {} days | Critical: {}",
        schedule.len(),
        schedule.project_duration,
        path
    )
}

/// Activity lines for a whole set, in the schedule's topological order.
///
/// Activities missing from the schedule are skipped.
pub fn schedule_table(activities: &[Activity], schedule: &ProjectSchedule) -> Vec<String> {
    schedule
        .topological_order
        .iter()
        .filter_map(|id| {
            let activity = activities.iter().find(|a| a.id() == id)?;
            let result = schedule.get(id)?;
            Some(activity_line(activity, result))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule;
    use crate::sample::sample_activities;

    #[test]
    fn test_activity_line() {
        let acts = sample_activities().unwrap();
        let schedule = schedule(&acts).unwrap();

        let a = &acts[0];
        assert_eq!(
            activity_line(a, schedule.get("A").unwrap()),
            "[CRITICAL] A | Start | dur=2 | pred=[—] | ES=0 EF=2 LS=0 LF=2 | TF=0 FF=0"
        );

        let d = &acts[3];
        assert_eq!(
            activity_line(d, schedule.get("D").unwrap()),
            "[float=  3] D | Electrical | dur=3 | pred=[B] | ES=6 EF=9 LS=9 LF=12 | TF=3 FF=3"
        );
    }

    #[test]
    fn test_status_line() {
        let schedule = schedule(&sample_activities().unwrap()).unwrap();
        assert_eq!(
            status_line(&schedule),
            "Activities: 5 | Project Duration: 14 days | Critical: A → B → C → E"
        );
        assert_eq!(
            status_line(&ProjectSchedule::default()),
            "Activities: 0 | Project Duration: — | Critical Path: —"
        );
    }

    #[test]
    fn test_schedule_table_order() {
        let acts = sample_activities().unwrap();
        let schedule = schedule(&acts).unwrap();
        let table = schedule_table(&acts, &schedule);
        assert_eq!(table.len(), 5);
        assert!(table[0].contains("| Start |"));
        assert!(table[4].contains("| Finish |"));
    }
}
