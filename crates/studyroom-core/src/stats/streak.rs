//! Consecutive-day completion streaks.
//!
//! The walk starts at today and moves backward one day at a time. A day
//! without completions ends the streak, except today itself: an empty today
//! is skipped so a run that ended yesterday still counts.

use std::collections::BTreeSet;

use crate::day::{DayKey, Today};
use crate::model::Task;

/// Completion day keys for every completed task with a valid timestamp.
pub fn completion_days(tasks: &[Task], today: &Today) -> BTreeSet<DayKey> {
    tasks
        .iter()
        .filter(|t| t.is_completed)
        .filter_map(|t| today.day_key_opt(t.completed_at))
        .collect()
}

/// Count consecutive completion days ending today (or yesterday when today
/// has no completion yet).
pub fn streak_days(completion_days: &BTreeSet<DayKey>, today: DayKey) -> u32 {
    let mut streak = 0;
    let mut offset = 0;
    loop {
        let day = today.days_before(offset);
        if completion_days.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
        offset += 1;
    }
    streak
}
