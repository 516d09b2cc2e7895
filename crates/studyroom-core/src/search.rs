//! Case-insensitive search across tasks, subjects and exams.

use serde::Serialize;

use crate::model::{Exam, Subject, Task};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    Task(&'a Task),
    Subject(&'a Subject),
    Exam(&'a Exam),
}

/// Substring search. Tasks match on title or category, subjects on name,
/// exams on title. Hits come back tasks first, then subjects, then exams,
/// each in input order. A blank query matches nothing.
pub fn search<'a>(
    query: &str,
    tasks: &'a [Task],
    subjects: &'a [Subject],
    exams: &'a [Exam],
) -> Vec<SearchHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let hit = |s: &str| s.to_lowercase().contains(&needle);

    let tasks = tasks
        .iter()
        .filter(|t| hit(&t.title) || hit(&t.category))
        .map(SearchHit::Task);
    let subjects = subjects.iter().filter(|s| hit(&s.name)).map(SearchHit::Subject);
    let exams = exams.iter().filter(|e| hit(&e.title)).map(SearchHit::Exam);

    tasks.chain(subjects).chain(exams).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_across_collections_in_order() {
        let mut essay = Task::new("t1", "History essay");
        essay.category = "writing".into();
        let mut flash = Task::new("t2", "Flashcards");
        flash.category = "history review".into();
        let tasks = vec![essay, flash, Task::new("t3", "Gym")];
        let subjects = vec![Subject::new("s1", "History", "#123")];
        let exams = vec![Exam {
            id: "e1".into(),
            title: "HISTORY midterm".into(),
            date: None,
            subject_id: None,
        }];

        let hits = search("history", &tasks, &subjects, &exams);
        assert_eq!(hits.len(), 4);
        assert!(matches!(hits[0], SearchHit::Task(t) if t.id == "t1"));
        assert!(matches!(hits[1], SearchHit::Task(t) if t.id == "t2"));
        assert!(matches!(hits[2], SearchHit::Subject(_)));
        assert!(matches!(hits[3], SearchHit::Exam(_)));
    }

    #[test]
    fn blank_query_matches_nothing() {
        let tasks = vec![Task::new("t1", "Anything")];
        assert!(search("   ", &tasks, &[], &[]).is_empty());
    }
}
