//! Integration tests for the agenda pipeline.

use chrono::NaiveDate;
use studyroom_core::{
    group_and_filter_tasks, AgendaFilter, AgendaQuery, Priority, Snapshot, SortMode, Today,
};

fn today() -> Today {
    Today::fixed(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
}

fn snapshot() -> Snapshot {
    serde_json::from_str(
        r##"{
        "tasks": [
            {"id": "past-done", "title": "Old", "date": "2025-01-09", "isCompleted": true},
            {"id": "past-open", "title": "Overdue", "date": "2025-01-08"},
            {"id": "today-pm", "title": "Lab", "date": "2025-01-10", "startTime": "14:00", "priority": "low", "category": "lab"},
            {"id": "today-am", "title": "Lecture", "date": "2025-01-10", "startTime": "09:00", "priority": "high", "category": "class"},
            {"id": "tomorrow", "title": "Essay", "date": "2025-01-11", "priority": "high", "category": "homework", "subjectId": "eng"},
            {"id": "done-tomorrow", "title": "Slides", "date": "2025-01-11", "isCompleted": true},
            {"id": "bad-date", "title": "Nowhere", "date": "2025-13-40"},
            {"id": "no-date", "title": "Someday"}
        ],
        "subjects": [{"id": "eng", "name": "English", "color": "#00f"}]
    }"##,
    )
    .unwrap()
}

#[test]
fn test_default_agenda_hides_past_and_completed() {
    let s = snapshot();
    let tasks = s.tasks();
    let sections = group_and_filter_tasks(&tasks, &s.subjects(), &AgendaQuery::default(), &today());

    let layout: Vec<(String, Vec<&str>)> = sections
        .iter()
        .map(|sec| (sec.label.clone(), sec.items.iter().map(|t| t.id.as_str()).collect()))
        .collect();
    assert_eq!(
        layout,
        vec![
            ("Today".to_string(), vec!["today-am", "today-pm"]),
            ("Tomorrow".to_string(), vec!["tomorrow"]),
        ]
    );
}

#[test]
fn test_show_completed_includes_history() {
    let s = snapshot();
    let tasks = s.tasks();
    let query = AgendaQuery {
        show_completed: true,
        ..AgendaQuery::default()
    };
    let sections = group_and_filter_tasks(&tasks, &s.subjects(), &query, &today());
    let keys: Vec<String> = sections.iter().map(|sec| sec.day_key.to_string()).collect();
    assert_eq!(keys, vec!["2025-01-08", "2025-01-09", "2025-01-10", "2025-01-11"]);
    assert_eq!(sections[0].label, "Wednesday");
    let total: usize = sections.iter().map(|sec| sec.items.len()).sum();
    assert_eq!(total, 6);
}

#[test]
fn test_priority_filter_and_sort() {
    let s = snapshot();
    let tasks = s.tasks();
    let query = AgendaQuery {
        filter: AgendaFilter::Priority(Priority::High),
        sort: SortMode::Priority,
        show_completed: false,
    };
    let sections = group_and_filter_tasks(&tasks, &s.subjects(), &query, &today());
    let ids: Vec<&str> = sections
        .iter()
        .flat_map(|sec| sec.items.iter().map(|t| t.id.as_str()))
        .collect();
    assert_eq!(ids, vec!["today-am", "tomorrow"]);
}

#[test]
fn test_sections_serialize_for_presentation() {
    let s = snapshot();
    let tasks = s.tasks();
    let sections = group_and_filter_tasks(&tasks, &s.subjects(), &AgendaQuery::default(), &today());
    let json = serde_json::to_value(&sections).unwrap();
    assert_eq!(json[0]["label"], "Today");
    assert_eq!(json[0]["day_key"], "2025-01-10");
    assert_eq!(json[0]["items"][0]["id"], "today-am");
    assert_eq!(json[0]["items"][0]["priority"], "high");
}
