use serde::Serialize;
use studyroom_core::error::Result;
use studyroom_core::{
    compute_derived_metrics_with, compute_unlocked_achievements, locked_achievements,
    today_summary, Config,
};

use super::{print_json, Context};

#[derive(Serialize)]
struct AchievementRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
}

/// Dashboard metrics. With `whole_hours`, `focus_hours` carries the
/// stats-screen form rounded to the nearest hour.
pub fn run(ctx: &Context, whole_hours: bool) -> Result<()> {
    let data = ctx.load()?;
    let config = Config::load_or_default();
    let metrics = compute_derived_metrics_with(
        &data.tasks,
        &data.subjects,
        &data.exams,
        &ctx.today,
        &config.metrics,
    );

    if whole_hours {
        let mut json = serde_json::to_value(&metrics)?;
        json["focus_hours"] = metrics.focus_hours_whole.into();
        print_json(&json)
    } else {
        print_json(&metrics)
    }
}

pub fn today(ctx: &Context) -> Result<()> {
    let data = ctx.load()?;
    print_json(&today_summary(&data.tasks, &ctx.today))
}

pub fn achievements(ctx: &Context, locked: bool) -> Result<()> {
    let data = ctx.load()?;
    let config = Config::load_or_default();
    let metrics = compute_derived_metrics_with(
        &data.tasks,
        &data.subjects,
        &data.exams,
        &ctx.today,
        &config.metrics,
    );

    let set = if locked {
        locked_achievements(&metrics)
    } else {
        compute_unlocked_achievements(&metrics)
    };
    let rows: Vec<AchievementRow> = set
        .into_iter()
        .map(|a| AchievementRow {
            id: a.id(),
            title: a.title(),
            description: a.description(),
        })
        .collect();
    print_json(&rows)
}
