//! Per-subject task breakdown.

use serde::Serialize;

use crate::model::{rounded_percent, Subject, SubjectIndex, Task, NEUTRAL_COLOR, OTHER_SUBJECT_NAME};

/// Number of subjects kept in the breakdown by default.
pub const DEFAULT_TOP_SUBJECTS: usize = 5;

/// Task counts for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectBreakdown {
    pub name: String,
    pub count: usize,
    pub completed_count: usize,
    pub color: String,
}

impl SubjectBreakdown {
    /// Completed share of this subject's tasks, 0 when it has none.
    pub fn progress_percent(&self) -> u8 {
        rounded_percent(self.completed_count, self.count)
    }
}

/// Group all tasks by resolved subject name, rank by task count (ties keep
/// first-seen order) and keep the top `limit`.
pub fn subject_breakdown(tasks: &[Task], subjects: &[Subject], limit: usize) -> Vec<SubjectBreakdown> {
    let index = SubjectIndex::new(subjects);
    let mut rows: Vec<SubjectBreakdown> = Vec::new();

    for task in tasks {
        let (name, color) = match index.resolve(task.subject_id.as_deref()) {
            Some(s) => (s.name.as_str(), s.color.as_str()),
            None => (OTHER_SUBJECT_NAME, NEUTRAL_COLOR),
        };
        let row = match rows.iter().position(|r| r.name == name) {
            Some(i) => &mut rows[i],
            None => {
                rows.push(SubjectBreakdown {
                    name: name.to_string(),
                    count: 0,
                    completed_count: 0,
                    color: color.to_string(),
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };
        row.count += 1;
        if task.is_completed {
            row.completed_count += 1;
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: usize, subject: Option<&str>, done: bool) -> Task {
        let mut t = Task::new(format!("t{id}"), "x");
        t.subject_id = subject.map(str::to_string);
        t.is_completed = done;
        t
    }

    #[test]
    fn keeps_top_five_sorted_descending() {
        let subjects: Vec<Subject> = (1..=6)
            .map(|i| Subject::new(format!("s{i}"), format!("Subject {i}"), "#000"))
            .collect();
        let mut tasks = Vec::new();
        let mut id = 0;
        for i in 1..=6 {
            for _ in 0..i {
                id += 1;
                tasks.push(task(id, Some(&format!("s{i}")), false));
            }
        }

        let rows = subject_breakdown(&tasks, &subjects, DEFAULT_TOP_SUBJECTS);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Subject 6");
        assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(rows.iter().all(|r| r.name != "Subject 1"));
    }

    #[test]
    fn unresolved_subjects_fold_into_other() {
        let subjects = vec![Subject::new("math", "Math", "#f00")];
        let tasks = vec![
            task(1, Some("math"), true),
            task(2, Some("deleted"), true),
            task(3, None, false),
        ];
        let rows = subject_breakdown(&tasks, &subjects, DEFAULT_TOP_SUBJECTS);
        assert_eq!(rows[0].name, OTHER_SUBJECT_NAME);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].completed_count, 1);
        assert_eq!(rows[0].color, NEUTRAL_COLOR);
        assert_eq!(rows[0].progress_percent(), 50);
        assert_eq!(rows[1].name, "Math");
        assert_eq!(rows[1].progress_percent(), 100);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let subjects = vec![
            Subject::new("a", "Biology", "#0f0"),
            Subject::new("b", "Art", "#00f"),
        ];
        let tasks = vec![task(1, Some("a"), false), task(2, Some("b"), false)];
        let rows = subject_breakdown(&tasks, &subjects, DEFAULT_TOP_SUBJECTS);
        assert_eq!(rows[0].name, "Biology");
        assert_eq!(rows[1].name, "Art");
    }

    #[test]
    fn zero_count_row_reports_zero_progress() {
        let row = SubjectBreakdown {
            name: "Empty".into(),
            count: 0,
            completed_count: 0,
            color: NEUTRAL_COLOR.into(),
        };
        assert_eq!(row.progress_percent(), 0);
    }
}
