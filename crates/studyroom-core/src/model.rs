//! Canonical task, subject and exam records.
//!
//! Stored records arrive as loosely typed `Raw*` shapes (string dates, clock
//! times, field-name variants from older app versions). They are normalized
//! once here; everything downstream works on [`Task`], [`Subject`] and
//! [`Exam`] only. Malformed fields normalize to `None` instead of failing.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::day::{minutes_of, parse_clock_time, parse_date, DayKey};

/// Label used for tasks whose subject cannot be resolved.
pub const OTHER_SUBJECT_NAME: &str = "Other";
/// Display color for unresolved subjects.
pub const NEUTRAL_COLOR: &str = "#9CA3AF";

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Priority {
    /// Sort rank: high first, unspecified last.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::None => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::None => "none",
        }
    }

    /// Lenient parse for stored records. Unknown values are `None`.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Strict parse: only `high`, `medium`, `low` and `none` are accepted.
impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            "none" => Ok(Priority::None),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// One checklist entry inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubTask {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "isCompleted", alias = "is_completed")]
    pub completed: bool,
}

/// A normalized task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub category: String,
    pub subject_id: Option<String>,
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    /// Minimal open task, handy for building fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: None,
            start_time: None,
            end_time: None,
            is_completed: false,
            completed_at: None,
            priority: Priority::None,
            category: String::new(),
            subject_id: None,
            sub_tasks: Vec::new(),
        }
    }

    pub fn day_key(&self) -> Option<DayKey> {
        self.date.map(DayKey::new)
    }

    /// Scheduled duration in minutes when both clock times are set and the
    /// end is after the start.
    pub fn scheduled_minutes(&self) -> Option<i64> {
        let (start, end) = (self.start_time?, self.end_time?);
        let minutes = minutes_of(end) - minutes_of(start);
        (minutes > 0).then_some(minutes)
    }

    /// `(completed, total)` sub-tasks, or `None` when the task has none.
    pub fn subtask_progress(&self) -> Option<(usize, usize)> {
        if self.sub_tasks.is_empty() {
            return None;
        }
        let done = self.sub_tasks.iter().filter(|s| s.completed).count();
        Some((done, self.sub_tasks.len()))
    }

    /// Sub-task completion as a rounded percentage.
    pub fn subtask_percent(&self) -> Option<u8> {
        self.subtask_progress()
            .map(|(done, total)| rounded_percent(done, total))
    }

    pub fn from_raw(raw: &RawTask) -> Self {
        let date = raw.date.as_deref().and_then(|s| {
            let parsed = parse_date(s);
            if parsed.is_none() {
                tracing::debug!(task_id = %raw.id, value = s, "ignoring malformed task date");
            }
            parsed
        });
        let start_time = raw.start_time.as_deref().and_then(|s| {
            let parsed = parse_clock_time(s);
            if parsed.is_none() {
                tracing::debug!(task_id = %raw.id, value = s, "ignoring malformed start time");
            }
            parsed
        });
        let end_time = raw.end_time.as_deref().and_then(|s| {
            let parsed = parse_clock_time(s);
            if parsed.is_none() {
                tracing::debug!(task_id = %raw.id, value = s, "ignoring malformed end time");
            }
            parsed
        });
        let completed_at = raw.completed_at.as_ref().and_then(|v| {
            let parsed = parse_instant(v);
            if parsed.is_none() && !v.is_null() {
                tracing::debug!(task_id = %raw.id, "ignoring malformed completion timestamp");
            }
            parsed
        });

        Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            date,
            start_time,
            end_time,
            is_completed: raw.is_completed,
            completed_at,
            priority: raw.priority.as_deref().map(Priority::parse).unwrap_or_default(),
            category: raw.category.clone().unwrap_or_default(),
            subject_id: raw.subject_id.clone().filter(|s| !s.is_empty()),
            sub_tasks: raw.sub_tasks.clone(),
        }
    }
}

/// A study subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn from_raw(raw: &RawSubject) -> Self {
        Self {
            id: raw.id.clone(),
            name: raw.name.clone(),
            color: raw
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| NEUTRAL_COLOR.to_string()),
        }
    }
}

/// A scheduled exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub subject_id: Option<String>,
}

impl Exam {
    pub fn from_raw(raw: &RawExam) -> Self {
        let date = raw.date.as_deref().and_then(|s| {
            let parsed = parse_date(s);
            if parsed.is_none() {
                tracing::debug!(exam_id = %raw.id, value = s, "ignoring malformed exam date");
            }
            parsed
        });
        Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            date,
            subject_id: raw.subject_id.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// Stored task shape. Accepts both snake_case and camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "start_time")]
    pub start_time: Option<String>,
    #[serde(default, alias = "end_time")]
    pub end_time: Option<String>,
    #[serde(default, alias = "is_completed")]
    pub is_completed: bool,
    /// RFC 3339 string or epoch milliseconds.
    #[serde(
        default,
        alias = "completed_at",
        alias = "completedTimestamp",
        alias = "completed_timestamp"
    )]
    pub completed_at: Option<serde_json::Value>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "subject_id")]
    pub subject_id: Option<String>,
    #[serde(default, alias = "sub_tasks", alias = "subtasks")]
    pub sub_tasks: Vec<SubTask>,
}

/// Stored subject shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSubject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Stored exam shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExam {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, alias = "subject_id")]
    pub subject_id: Option<String>,
}

/// Parse a stored completion instant: RFC 3339 text or epoch milliseconds.
pub fn parse_instant(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| s.trim().parse::<i64>().ok().and_then(from_millis)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(from_millis),
        _ => None,
    }
}

fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

/// Subject lookup by id.
#[derive(Debug, Default)]
pub struct SubjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Subject>,
}

impl<'a> SubjectIndex<'a> {
    pub fn new(subjects: &'a [Subject]) -> Self {
        Self {
            by_id: subjects.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    pub fn resolve(&self, subject_id: Option<&str>) -> Option<&'a Subject> {
        subject_id.and_then(|id| self.by_id.get(id).copied())
    }

    /// Resolved subject name, if any.
    pub fn name_of(&self, task: &Task) -> Option<&'a str> {
        self.resolve(task.subject_id.as_deref()).map(|s| s.name.as_str())
    }
}

/// `round(100 * part / total)`, 0 when `total` is 0.
pub fn rounded_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * part + total) / (2 * total);
    pct.min(100) as u8
}
