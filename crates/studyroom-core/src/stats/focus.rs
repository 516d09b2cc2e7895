//! Focus time from completed tasks.
//!
//! A completed task contributes its scheduled span when both clock times are
//! set and the span is positive, otherwise a fixed per-task estimate.

use crate::model::Task;

/// Minutes credited to a completed task without a usable time span.
pub const DEFAULT_TASK_MINUTES: u32 = 30;

/// Total focus minutes over completed tasks.
pub fn focus_minutes(tasks: &[Task], default_task_minutes: u32) -> u64 {
    tasks
        .iter()
        .filter(|t| t.is_completed)
        .map(|t| {
            t.scheduled_minutes()
                .map(|m| m as u64)
                .unwrap_or(u64::from(default_task_minutes))
        })
        .sum()
}

/// Dashboard form: hours rounded to one decimal place.
pub fn focus_hours_decimal(tasks: &[Task], default_task_minutes: u32) -> f64 {
    let minutes = focus_minutes(tasks, default_task_minutes);
    (minutes as f64 / 6.0).round() / 10.0
}

/// Stats-screen form: hours rounded to the nearest whole hour.
pub fn focus_hours_whole(tasks: &[Task], default_task_minutes: u32) -> u64 {
    let minutes = focus_minutes(tasks, default_task_minutes);
    (minutes + 30) / 60
}
