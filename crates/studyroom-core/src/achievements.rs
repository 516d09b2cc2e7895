//! Achievement badges unlocked by metric thresholds.
//!
//! Every badge is evaluated independently against the current
//! [`DerivedMetrics`]; nothing is remembered between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::stats::DerivedMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Achievement {
    FirstTask,
    Streak3,
    Streak7,
    Streak30,
    Focused,
    Organized,
    ExamReady,
}

impl Achievement {
    pub const ALL: [Achievement; 7] = [
        Achievement::FirstTask,
        Achievement::Streak3,
        Achievement::Streak7,
        Achievement::Streak30,
        Achievement::Focused,
        Achievement::Organized,
        Achievement::ExamReady,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstTask => "firstTask",
            Achievement::Streak3 => "streak3",
            Achievement::Streak7 => "streak7",
            Achievement::Streak30 => "streak30",
            Achievement::Focused => "focused",
            Achievement::Organized => "organized",
            Achievement::ExamReady => "examReady",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstTask => "First Step",
            Achievement::Streak3 => "On a Roll",
            Achievement::Streak7 => "Week Warrior",
            Achievement::Streak30 => "Unstoppable",
            Achievement::Focused => "Deep Focus",
            Achievement::Organized => "Organized",
            Achievement::ExamReady => "Exam Ready",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstTask => "Complete your first task",
            Achievement::Streak3 => "Keep a 3-day streak",
            Achievement::Streak7 => "Keep a 7-day streak",
            Achievement::Streak30 => "Keep a 30-day streak",
            Achievement::Focused => "Log 2 hours of focus time",
            Achievement::Organized => "Create 5 subjects",
            Achievement::ExamReady => "Schedule 3 upcoming exams",
        }
    }

    pub fn is_unlocked(self, m: &DerivedMetrics) -> bool {
        match self {
            Achievement::FirstTask => m.completed_tasks >= 1,
            Achievement::Streak3 => m.streak_days >= 3,
            Achievement::Streak7 => m.streak_days >= 7,
            Achievement::Streak30 => m.streak_days >= 30,
            Achievement::Focused => m.focus_hours >= 2.0,
            Achievement::Organized => m.subjects_count >= 5,
            Achievement::ExamReady => m.upcoming_exams_count >= 3,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub fn compute_unlocked_achievements(metrics: &DerivedMetrics) -> BTreeSet<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.is_unlocked(metrics))
        .collect()
}

pub fn locked_achievements(metrics: &DerivedMetrics) -> BTreeSet<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| !a.is_unlocked(metrics))
        .collect()
}
