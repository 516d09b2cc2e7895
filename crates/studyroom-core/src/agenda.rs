//! Agenda pipeline: filter, sort and group tasks into dated sections.
//!
//! Steps run in a fixed order:
//! 1. drop undated tasks
//! 2. drop tasks dated before today (unless completed tasks are shown)
//! 3. apply the category/priority filter
//! 4. drop completed tasks (unless shown)
//! 5. sort by the requested mode
//! 6. group by day, sections ascending by day

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::day::{DayKey, Today};
use crate::model::{Priority, Subject, SubjectIndex, Task};

/// Which tasks the agenda keeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AgendaFilter {
    #[default]
    All,
    Priority(Priority),
    Category(String),
}

impl AgendaFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            AgendaFilter::All => true,
            AgendaFilter::Priority(p) => task.priority == *p,
            AgendaFilter::Category(c) => task.category == *c,
        }
    }
}

/// `all`, `high`/`medium`/`low`/`none`, `priority:<p>` or `category:<c>`;
/// any other value is taken as a category name.
impl FromStr for AgendaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("filter is empty".to_string());
        }
        if let Some(p) = s.strip_prefix("priority:") {
            return p.parse().map(AgendaFilter::Priority);
        }
        if let Some(c) = s.strip_prefix("category:") {
            return Ok(AgendaFilter::Category(c.to_string()));
        }
        Ok(match s {
            "all" => AgendaFilter::All,
            "high" | "medium" | "low" | "none" => AgendaFilter::Priority(Priority::parse(s)),
            other => AgendaFilter::Category(other.to_string()),
        })
    }
}

impl fmt::Display for AgendaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgendaFilter::All => f.write_str("all"),
            AgendaFilter::Priority(p) => f.write_str(p.as_str()),
            AgendaFilter::Category(c) => write!(f, "category:{c}"),
        }
    }
}

/// Ordering applied before grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// By start time within each day, unset start times last.
    #[default]
    Date,
    /// High, medium, low, then unspecified.
    Priority,
    /// By subject name, unresolved subjects last.
    Subject,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(SortMode::Date),
            "priority" => Ok(SortMode::Priority),
            "subject" => Ok(SortMode::Subject),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaQuery {
    pub filter: AgendaFilter,
    pub sort: SortMode,
    pub show_completed: bool,
}

/// Tasks for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaSection<'a> {
    pub label: String,
    pub day_key: DayKey,
    pub items: Vec<&'a Task>,
}

pub fn group_and_filter_tasks<'a>(
    tasks: &'a [Task],
    subjects: &[Subject],
    query: &AgendaQuery,
    today: &Today,
) -> Vec<AgendaSection<'a>> {
    let today_key = today.key();

    let mut kept: Vec<(DayKey, &'a Task)> = tasks
        .iter()
        .filter_map(|t| t.day_key().map(|k| (k, t)))
        .filter(|(k, _)| query.show_completed || *k >= today_key)
        .filter(|(_, t)| query.filter.matches(t))
        .filter(|(_, t)| query.show_completed || !t.is_completed)
        .collect();

    // sort_by is stable, so ties keep input order.
    match query.sort {
        SortMode::Date => kept.sort_by(|(_, a), (_, b)| match (a.start_time, b.start_time) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
        SortMode::Priority => kept.sort_by_key(|(_, t)| t.priority.rank()),
        SortMode::Subject => {
            let index = SubjectIndex::new(subjects);
            kept.sort_by(|(_, a), (_, b)| match (index.name_of(a), index.name_of(b)) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }
    }

    let mut groups: BTreeMap<DayKey, Vec<&'a Task>> = BTreeMap::new();
    for (key, task) in kept {
        groups.entry(key).or_default().push(task);
    }

    groups
        .into_iter()
        .map(|(day_key, items)| AgendaSection {
            label: day_key.relative_label(today_key),
            day_key,
            items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::parse_clock_time;
    use chrono::NaiveDate;

    fn today() -> Today {
        Today::fixed(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
    }

    fn task(id: &str, date: &str) -> Task {
        let mut t = Task::new(id, id);
        t.date = crate::day::parse_date(date);
        t
    }

    fn ids(section: &AgendaSection<'_>) -> Vec<String> {
        section.items.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn past_completed_task_hidden_when_completed_not_shown() {
        let mut done = task("done", "2025-01-09");
        done.is_completed = true;
        let tasks = vec![task("a", "2025-01-10"), task("b", "2025-01-11"), done];

        let sections = group_and_filter_tasks(&tasks, &[], &AgendaQuery::default(), &today());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Today");
        assert_eq!(sections[1].label, "Tomorrow");
        assert!(sections.iter().all(|s| s.items.iter().all(|t| t.id != "done")));
    }

    #[test]
    fn show_completed_keeps_past_and_completed() {
        let mut done = task("done", "2025-01-09");
        done.is_completed = true;
        let tasks = vec![task("a", "2025-01-10"), done, task("undated", "")];
        let query = AgendaQuery {
            show_completed: true,
            ..AgendaQuery::default()
        };
        let sections = group_and_filter_tasks(&tasks, &[], &query, &today());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "Yesterday");
        assert_eq!(ids(&sections[0]), vec!["done"]);
    }

    #[test]
    fn date_mode_orders_by_start_time_unset_last() {
        let mut late = task("late", "2025-01-10");
        late.start_time = parse_clock_time("15:00");
        let mut early = task("early", "2025-01-10");
        early.start_time = parse_clock_time("08:30");
        let unset = task("unset", "2025-01-10");
        let tasks = vec![unset, late, early];

        let sections = group_and_filter_tasks(&tasks, &[], &AgendaQuery::default(), &today());
        assert_eq!(ids(&sections[0]), vec!["early", "late", "unset"]);
    }

    #[test]
    fn priority_mode_is_stable() {
        let with = |id: &str, p: Priority| {
            let mut t = task(id, "2025-01-10");
            t.priority = p;
            t
        };
        let tasks = vec![
            with("low", Priority::Low),
            with("none", Priority::None),
            with("high-1", Priority::High),
            with("medium", Priority::Medium),
            with("high-2", Priority::High),
        ];
        let query = AgendaQuery {
            sort: SortMode::Priority,
            ..AgendaQuery::default()
        };
        let sections = group_and_filter_tasks(&tasks, &[], &query, &today());
        assert_eq!(ids(&sections[0]), vec!["high-1", "high-2", "medium", "low", "none"]);
    }

    #[test]
    fn subject_mode_puts_unresolved_last() {
        let subjects = vec![
            Subject::new("m", "Math", "#f00"),
            Subject::new("b", "Biology", "#0f0"),
        ];
        let with = |id: &str, s: Option<&str>| {
            let mut t = task(id, "2025-01-10");
            t.subject_id = s.map(str::to_string);
            t
        };
        let tasks = vec![
            with("orphan", Some("gone")),
            with("math", Some("m")),
            with("none", None),
            with("bio", Some("b")),
        ];
        let query = AgendaQuery {
            sort: SortMode::Subject,
            ..AgendaQuery::default()
        };
        let sections = group_and_filter_tasks(&tasks, &subjects, &query, &today());
        assert_eq!(ids(&sections[0]), vec!["bio", "math", "orphan", "none"]);
    }

    #[test]
    fn filter_by_category_and_priority() {
        let mut hw = task("hw", "2025-01-12");
        hw.category = "homework".into();
        hw.priority = Priority::High;
        let mut read = task("read", "2025-01-12");
        read.category = "reading".into();
        let tasks = vec![hw, read];

        let by_cat = AgendaQuery {
            filter: "homework".parse().unwrap(),
            ..AgendaQuery::default()
        };
        let sections = group_and_filter_tasks(&tasks, &[], &by_cat, &today());
        assert_eq!(ids(&sections[0]), vec!["hw"]);
        assert_eq!(sections[0].label, "Sunday");

        let by_priority = AgendaQuery {
            filter: "priority:none".parse().unwrap(),
            ..AgendaQuery::default()
        };
        let sections = group_and_filter_tasks(&tasks, &[], &by_priority, &today());
        assert_eq!(ids(&sections[0]), vec!["read"]);
    }

    #[test]
    fn sections_ascend_by_day() {
        let tasks = vec![
            task("far", "2025-02-01"),
            task("soon", "2025-01-11"),
            task("now", "2025-01-10"),
        ];
        let sections = group_and_filter_tasks(&tasks, &[], &AgendaQuery::default(), &today());
        let keys: Vec<String> = sections.iter().map(|s| s.day_key.to_string()).collect();
        assert_eq!(keys, vec!["2025-01-10", "2025-01-11", "2025-02-01"]);
        assert_eq!(sections[2].label, "Saturday, February 1");
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<AgendaFilter>().unwrap(), AgendaFilter::All);
        assert_eq!(
            "high".parse::<AgendaFilter>().unwrap(),
            AgendaFilter::Priority(Priority::High)
        );
        assert_eq!(
            "category:high".parse::<AgendaFilter>().unwrap(),
            AgendaFilter::Category("high".into())
        );
        assert!("priority:urgent".parse::<AgendaFilter>().is_err());
        assert!("".parse::<AgendaFilter>().is_err());
        assert!("alphabetical".parse::<SortMode>().is_err());
    }
}
