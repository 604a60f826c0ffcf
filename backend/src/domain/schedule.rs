//! Schedule projection and merging.
//!
//! This is the heart of the session list: expand a dog's weekly plan
//! across a date range into planned sessions, then reconcile those with
//! what was actually recorded. Recorded outcomes always win — a record
//! for a (date, training) slot suppresses the projected entry for that
//! slot, whatever the record's own status is.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use shared::WeekSchedule;

use crate::domain::models::session::{PlannedSession, RecordedSession, Session};

/// Expand a weekly schedule across `[from, to]` inclusive.
///
/// Walks every calendar date in the range and emits one planned session
/// per training id listed under that date's weekday, in the stored slot
/// order. Output is fully ordered: date ascending, then slot order. An
/// empty schedule projects nothing.
pub fn project_sessions(
    schedule: &WeekSchedule,
    dog_id: &str,
    plan_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<PlannedSession> {
    let mut planned = Vec::new();
    let mut current = from;
    while current <= to {
        for training_id in schedule.for_weekday(current.weekday()) {
            planned.push(PlannedSession {
                dog_id: dog_id.to_string(),
                training_id: training_id.clone(),
                plan_id: plan_id.to_string(),
                date: current,
            });
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    planned
}

/// Merge projected sessions with recorded ones.
///
/// Slots are keyed by (date, training id). Any recorded session at a key
/// drops every planned entry at that key — when a plan schedules the
/// same training twice on one day, a single record suppresses both
/// projected duplicates rather than leaving one behind. Recorded
/// sessions are always kept, including ones with no projected slot at
/// all. The result is grouped by date ascending; within a date,
/// surviving planned entries come first in slot order, then recorded
/// entries in store order.
pub fn merge_sessions(
    planned: Vec<PlannedSession>,
    recorded: Vec<RecordedSession>,
) -> Vec<Session> {
    let mut merged: Vec<Session> = {
        let taken: HashSet<(NaiveDate, &str)> = recorded
            .iter()
            .map(|s| (s.date, s.training_id.as_str()))
            .collect();
        planned
            .into_iter()
            .filter(|p| !taken.contains(&(p.date, p.training_id.as_str())))
            .map(Session::Planned)
            .collect()
    };
    merged.extend(recorded.into_iter().map(Session::Recorded));
    // Stable sort keeps planned-before-recorded and slot order per date.
    merged.sort_by_key(|s| s.date());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::session::RecordedStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule_mondays(trainings: &[&str]) -> WeekSchedule {
        WeekSchedule {
            monday: trainings.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn recorded(training_id: &str, on: NaiveDate, status: RecordedStatus, score: Option<u8>) -> RecordedSession {
        RecordedSession {
            id: format!("rec-{}-{}", training_id, on),
            dog_id: "dog-1".to_string(),
            training_id: training_id.to_string(),
            plan_id: Some("plan-1".to_string()),
            date: on,
            status,
            score,
            notes: None,
        }
    }

    #[test]
    fn projects_one_session_per_slot_over_a_full_week() {
        let schedule = WeekSchedule {
            monday: vec!["t1".to_string(), "t2".to_string()],
            wednesday: vec!["t3".to_string()],
            sunday: vec!["t1".to_string()],
            ..Default::default()
        };
        // 2026-02-09 is a Monday, 2026-02-15 the following Sunday.
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 15));

        assert_eq!(planned.len(), schedule.total_slots());
        assert_eq!(planned.len(), 4);
        assert_eq!(planned[0].training_id, "t1");
        assert_eq!(planned[0].date, date(2026, 2, 9));
        assert_eq!(planned[1].training_id, "t2");
        assert_eq!(planned[1].date, date(2026, 2, 9));
        assert_eq!(planned[2].training_id, "t3");
        assert_eq!(planned[2].date, date(2026, 2, 11));
        assert_eq!(planned[3].training_id, "t1");
        assert_eq!(planned[3].date, date(2026, 2, 15));
    }

    #[test]
    fn empty_schedule_projects_nothing() {
        let planned = project_sessions(
            &WeekSchedule::default(),
            "dog-1",
            "plan-1",
            date(2026, 1, 1),
            date(2026, 12, 31),
        );
        assert!(planned.is_empty());
    }

    #[test]
    fn single_day_range_projects_only_that_weekday() {
        let schedule = schedule_mondays(&["t1"]);
        // A Monday range of one day.
        let monday = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 9));
        assert_eq!(monday.len(), 1);
        // A Tuesday range of one day.
        let tuesday = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 10), date(2026, 2, 10));
        assert!(tuesday.is_empty());
    }

    #[test]
    fn projection_walks_across_month_boundaries() {
        // 2026-02-28 (Sat) through 2026-03-02 (Mon).
        let schedule = schedule_mondays(&["t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 28), date(2026, 3, 2));
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].date, date(2026, 3, 2));
    }

    #[test]
    fn duplicate_slots_project_their_own_sessions() {
        let schedule = schedule_mondays(&["t1", "t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 9));
        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].training_id, "t1");
        assert_eq!(planned[1].training_id, "t1");
    }

    #[test]
    fn projection_is_deterministic() {
        let schedule = WeekSchedule {
            tuesday: vec!["t2".to_string(), "t1".to_string()],
            friday: vec!["t3".to_string()],
            ..Default::default()
        };
        let first = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 3, 1), date(2026, 3, 31));
        let second = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 3, 1), date(2026, 3, 31));
        assert_eq!(first, second);
    }

    #[test]
    fn recorded_session_shadows_planned_slot() {
        let schedule = schedule_mondays(&["t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 15));
        let record = recorded("t1", date(2026, 2, 9), RecordedStatus::Completed, Some(9));

        let merged = merge_sessions(planned, vec![record.clone()]);

        assert_eq!(merged.len(), 1);
        match &merged[0] {
            Session::Recorded(s) => {
                assert_eq!(s.id, record.id);
                assert_eq!(s.status, RecordedStatus::Completed);
                assert_eq!(s.score, Some(9));
            }
            Session::Planned(_) => panic!("planned session should have been shadowed"),
        }
    }

    #[test]
    fn skipped_record_also_shadows_planned_slot() {
        let schedule = schedule_mondays(&["t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 9));
        let record = recorded("t1", date(2026, 2, 9), RecordedStatus::Skipped, None);

        let merged = merge_sessions(planned, vec![record]);

        assert_eq!(merged.len(), 1);
        assert!(matches!(&merged[0], Session::Recorded(s) if s.status == RecordedStatus::Skipped));
    }

    #[test]
    fn unplanned_record_is_kept() {
        let schedule = schedule_mondays(&["t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 9));
        // Logged off-plan: a different training on the same day.
        let record = recorded("t9", date(2026, 2, 9), RecordedStatus::Completed, Some(5));

        let merged = merge_sessions(planned, vec![record]);

        assert_eq!(merged.len(), 2);
        assert!(matches!(&merged[0], Session::Planned(s) if s.training_id == "t1"));
        assert!(matches!(&merged[1], Session::Recorded(s) if s.training_id == "t9"));
    }

    #[test]
    fn merge_drops_all_duplicate_planned_slots() {
        // The plan schedules t1 twice on Monday; one record for the slot
        // suppresses both projected duplicates.
        let schedule = schedule_mondays(&["t1", "t1"]);
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 9));
        assert_eq!(planned.len(), 2);

        let record = recorded("t1", date(2026, 2, 9), RecordedStatus::Completed, Some(7));
        let merged = merge_sessions(planned, vec![record]);

        assert_eq!(merged.len(), 1);
        assert!(matches!(&merged[0], Session::Recorded(_)));
    }

    #[test]
    fn shadowing_is_keyed_by_date_and_training() {
        let schedule = schedule_mondays(&["t1"]);
        // Two scheduled Mondays; only the first has a record.
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 16));
        assert_eq!(planned.len(), 2);

        let record = recorded("t1", date(2026, 2, 9), RecordedStatus::Completed, None);
        let merged = merge_sessions(planned, vec![record]);

        assert_eq!(merged.len(), 2);
        assert!(matches!(&merged[0], Session::Recorded(s) if s.date == date(2026, 2, 9)));
        assert!(matches!(&merged[1], Session::Planned(s) if s.date == date(2026, 2, 16)));
    }

    #[test]
    fn merged_output_is_grouped_by_date_ascending() {
        let schedule = WeekSchedule {
            monday: vec!["t1".to_string()],
            tuesday: vec!["t2".to_string()],
            ..Default::default()
        };
        let planned = project_sessions(&schedule, "dog-1", "plan-1", date(2026, 2, 9), date(2026, 2, 10));
        let records = vec![
            recorded("t9", date(2026, 2, 10), RecordedStatus::Completed, Some(3)),
            recorded("t8", date(2026, 2, 9), RecordedStatus::Skipped, None),
        ];

        let merged = merge_sessions(planned, records);
        let dates: Vec<NaiveDate> = merged.iter().map(Session::date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        // Within 2026-02-09: the planned slot first, then the record.
        assert!(matches!(&merged[0], Session::Planned(s) if s.training_id == "t1"));
        assert!(matches!(&merged[1], Session::Recorded(s) if s.training_id == "t8"));
    }
}
