//! Upcoming exam countdowns.

use serde::Serialize;

use crate::day::{DayKey, Today};
use crate::model::{Exam, Subject, SubjectIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingExam<'a> {
    pub exam: &'a Exam,
    pub day_key: DayKey,
    pub days_until: i64,
    pub subject_name: Option<&'a str>,
}

/// Exams dated today or later, soonest first. Undated exams are skipped.
pub fn upcoming_exams<'a>(exams: &'a [Exam], subjects: &'a [Subject], today: &Today) -> Vec<UpcomingExam<'a>> {
    let index = SubjectIndex::new(subjects);
    let today_key = today.key();

    let mut upcoming: Vec<UpcomingExam<'a>> = exams
        .iter()
        .filter_map(|exam| {
            let day_key = DayKey::new(exam.date?);
            let days_until = day_key.days_since(today_key);
            (days_until >= 0).then(|| UpcomingExam {
                exam,
                day_key,
                days_until,
                subject_name: index
                    .resolve(exam.subject_id.as_deref())
                    .map(|s| s.name.as_str()),
            })
        })
        .collect();
    upcoming.sort_by_key(|u| u.day_key);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn lists_future_exams_soonest_first() {
        let today = Today::fixed(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let subjects = vec![Subject::new("chem", "Chemistry", "#fa0")];
        let exam = |id: &str, d: Option<u32>, s: Option<&str>| Exam {
            id: id.into(),
            title: id.into(),
            date: d.and_then(|d| NaiveDate::from_ymd_opt(2025, 1, d)),
            subject_id: s.map(str::to_string),
        };
        let exams = vec![
            exam("final", Some(30), Some("chem")),
            exam("quiz", Some(10), None),
            exam("old", Some(2), None),
            exam("tbd", None, None),
        ];

        let upcoming = upcoming_exams(&exams, &subjects, &today);
        let ids: Vec<&str> = upcoming.iter().map(|u| u.exam.id.as_str()).collect();
        assert_eq!(ids, vec!["quiz", "final"]);
        assert_eq!(upcoming[0].days_until, 0);
        assert_eq!(upcoming[1].days_until, 20);
        assert_eq!(upcoming[1].subject_name, Some("Chemistry"));
    }
}
