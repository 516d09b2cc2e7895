//! Summary of the current day for the dashboard header.

use serde::Serialize;

use crate::day::Today;
use crate::model::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodaySummary {
    /// Tasks dated today.
    pub due_today: usize,
    /// Tasks dated today that are completed.
    pub due_today_completed: usize,
    /// Tasks completed today regardless of their date.
    pub completed_today: usize,
    /// Open tasks dated before today.
    pub overdue: usize,
}

pub fn today_summary(tasks: &[Task], today: &Today) -> TodaySummary {
    let key = today.key();
    let due: Vec<&Task> = tasks.iter().filter(|t| t.day_key() == Some(key)).collect();

    TodaySummary {
        due_today: due.len(),
        due_today_completed: due.iter().filter(|t| t.is_completed).count(),
        completed_today: tasks
            .iter()
            .filter(|t| t.is_completed && today.day_key_opt(t.completed_at) == Some(key))
            .count(),
        overdue: tasks
            .iter()
            .filter(|t| !t.is_completed && t.day_key().is_some_and(|d| d < key))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn summarizes_due_completed_and_overdue() {
        let today = Today::fixed(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let dated = |id: &str, d: u32, done: bool| {
            let mut t = Task::new(id, id);
            t.date = NaiveDate::from_ymd_opt(2025, 1, d);
            t.is_completed = done;
            if done {
                t.completed_at = Some(Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap());
            }
            t
        };
        let tasks = vec![
            dated("a", 10, true),
            dated("b", 10, false),
            dated("c", 8, false),
            dated("d", 12, true),
        ];
        let s = today_summary(&tasks, &today);
        assert_eq!(s.due_today, 2);
        assert_eq!(s.due_today_completed, 1);
        assert_eq!(s.completed_today, 2);
        assert_eq!(s.overdue, 1);
    }
}
