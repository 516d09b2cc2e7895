//! Seven-day completion activity.

use serde::Serialize;

use crate::day::{DayKey, Today};
use crate::model::Task;

/// Completions on one day of the trailing week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub day_label: String,
    pub day_key: DayKey,
    pub count: usize,
    pub is_today: bool,
}

/// Completed-task counts for the seven days ending today, oldest first.
/// Tasks without a valid completion timestamp are not counted.
pub fn weekly_activity(tasks: &[Task], today: &Today) -> Vec<DayActivity> {
    let today_key = today.key();
    let completed: Vec<DayKey> = tasks
        .iter()
        .filter(|t| t.is_completed)
        .filter_map(|t| today.day_key_opt(t.completed_at))
        .collect();

    (0..7)
        .rev()
        .map(|offset| {
            let day = today_key.days_before(offset);
            DayActivity {
                day_label: day.short_weekday(),
                day_key: day,
                count: completed.iter().filter(|k| **k == day).count(),
                is_today: offset == 0,
            }
        })
        .collect()
}
