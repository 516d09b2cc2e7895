//! Dashboard metrics derived from the current task, subject and exam
//! collections. Recomputed from scratch on every call.

use serde::{Deserialize, Serialize};

use super::focus::{focus_hours_decimal, focus_hours_whole, focus_minutes, DEFAULT_TASK_MINUTES};
use super::streak::{completion_days, streak_days};
use super::subjects::{subject_breakdown, SubjectBreakdown, DEFAULT_TOP_SUBJECTS};
use super::weekly::{weekly_activity, DayActivity};
use crate::day::Today;
use crate::model::{rounded_percent, Exam, Subject, Task};

/// Tunables for metric computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsOptions {
    /// Minutes credited to a completed task without a usable time span.
    #[serde(default = "default_task_minutes")]
    pub default_task_minutes: u32,
    /// Rows kept in the subject breakdown.
    #[serde(default = "default_top_subjects")]
    pub top_subjects: usize,
}

fn default_task_minutes() -> u32 {
    DEFAULT_TASK_MINUTES
}
fn default_top_subjects() -> usize {
    DEFAULT_TOP_SUBJECTS
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            default_task_minutes: default_task_minutes(),
            top_subjects: default_top_subjects(),
        }
    }
}

/// Derived study metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub streak_days: u32,
    /// Focus hours, one decimal place.
    pub focus_hours: f64,
    /// Focus hours rounded to the nearest hour.
    pub focus_hours_whole: u64,
    pub focus_minutes: u64,
    pub weekly_activity: Vec<DayActivity>,
    pub subject_breakdown: Vec<SubjectBreakdown>,
    pub completion_rate_percent: u8,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub subjects_count: usize,
    pub upcoming_exams_count: usize,
}

/// Compute metrics with default options.
pub fn compute_derived_metrics(
    tasks: &[Task],
    subjects: &[Subject],
    exams: &[Exam],
    today: &Today,
) -> DerivedMetrics {
    compute_derived_metrics_with(tasks, subjects, exams, today, &MetricsOptions::default())
}

/// Compute metrics with explicit options.
pub fn compute_derived_metrics_with(
    tasks: &[Task],
    subjects: &[Subject],
    exams: &[Exam],
    today: &Today,
    options: &MetricsOptions,
) -> DerivedMetrics {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.is_completed).count();
    let today_key = today.key();

    DerivedMetrics {
        streak_days: streak_days(&completion_days(tasks, today), today_key),
        focus_hours: focus_hours_decimal(tasks, options.default_task_minutes),
        focus_hours_whole: focus_hours_whole(tasks, options.default_task_minutes),
        focus_minutes: focus_minutes(tasks, options.default_task_minutes),
        weekly_activity: weekly_activity(tasks, today),
        subject_breakdown: subject_breakdown(tasks, subjects, options.top_subjects),
        completion_rate_percent: rounded_percent(completed_tasks, total_tasks),
        total_tasks,
        completed_tasks,
        subjects_count: subjects.len(),
        upcoming_exams_count: exams
            .iter()
            .filter(|e| e.date.is_some_and(|d| d >= today_key.date()))
            .count(),
    }
}
