//! # Studyroom Core Library
//!
//! Core logic for the Studyroom study planner. Everything here is a pure,
//! synchronous computation over snapshots of the task, subject and exam
//! collections; the presentation layer re-runs it whenever those change.
//!
//! ## Architecture
//!
//! - **Model**: canonical records, normalized once from stored shapes
//! - **Day bucketing**: local calendar-day keys against an injected [`Today`]
//! - **Stats**: streaks, focus time, weekly activity, subject breakdown
//! - **Achievements**: threshold badges over the derived metrics
//! - **Agenda**: filter, sort and group tasks into dated sections
//! - **Storage**: TOML configuration and the JSON snapshot store
//!
//! ## Key Components
//!
//! - [`compute_derived_metrics`]: dashboard metrics
//! - [`compute_unlocked_achievements`]: unlocked badges
//! - [`group_and_filter_tasks`]: agenda sections
//! - [`TaskStore`]: completion toggles and task creation

pub mod achievements;
pub mod agenda;
pub mod day;
pub mod error;
pub mod exams;
pub mod model;
pub mod search;
pub mod stats;
pub mod storage;

pub use achievements::{compute_unlocked_achievements, locked_achievements, Achievement};
pub use agenda::{group_and_filter_tasks, AgendaFilter, AgendaQuery, AgendaSection, SortMode};
pub use day::{DayKey, Today};
pub use error::{ConfigError, CoreError, StoreError};
pub use exams::{upcoming_exams, UpcomingExam};
pub use model::{Exam, Priority, RawExam, RawSubject, RawTask, SubTask, Subject, Task};
pub use search::{search, SearchHit};
pub use stats::{
    compute_derived_metrics, compute_derived_metrics_with, today_summary, DerivedMetrics,
    MetricsOptions, TodaySummary,
};
pub use storage::{Config, Snapshot, SnapshotStore, TaskStore};
