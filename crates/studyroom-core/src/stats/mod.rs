//! Statistics module for Studyroom
//!
//! Derived study metrics over the task, subject and exam collections:
//! completion streaks, focus time, weekly activity, subject breakdown and
//! the daily summary.

mod focus;
mod metrics;
mod streak;
mod subjects;
mod today;
mod weekly;

pub use focus::{focus_hours_decimal, focus_hours_whole, focus_minutes, DEFAULT_TASK_MINUTES};
pub use metrics::{compute_derived_metrics, compute_derived_metrics_with, DerivedMetrics, MetricsOptions};
pub use streak::{completion_days, streak_days};
pub use subjects::{subject_breakdown, SubjectBreakdown, DEFAULT_TOP_SUBJECTS};
pub use today::{today_summary, TodaySummary};
pub use weekly::{weekly_activity, DayActivity};
