//! Agenda, exam and search commands.

use clap::Args;
use studyroom_core::error::Result;
use studyroom_core::{group_and_filter_tasks, search as search_all, upcoming_exams, AgendaFilter, Config, SortMode};

use super::{print_json, Context};

#[derive(Args)]
pub struct AgendaArgs {
    /// all, high/medium/low/none, priority:<p> or category:<name>
    #[arg(long)]
    filter: Option<AgendaFilter>,
    /// date, priority or subject
    #[arg(long)]
    sort: Option<SortMode>,
    /// Include completed and past tasks
    #[arg(long)]
    show_completed: bool,
}

pub fn run(ctx: &Context, args: AgendaArgs) -> Result<()> {
    let data = ctx.load()?;
    let mut query = Config::load_or_default().agenda.query()?;
    if let Some(filter) = args.filter {
        query.filter = filter;
    }
    if let Some(sort) = args.sort {
        query.sort = sort;
    }
    if args.show_completed {
        query.show_completed = true;
    }

    let sections = group_and_filter_tasks(&data.tasks, &data.subjects, &query, &ctx.today);
    print_json(&sections)
}

pub fn exams(ctx: &Context) -> Result<()> {
    let data = ctx.load()?;
    print_json(&upcoming_exams(&data.exams, &data.subjects, &ctx.today))
}

pub fn search(ctx: &Context, query: &str) -> Result<()> {
    let data = ctx.load()?;
    print_json(&search_all(query, &data.tasks, &data.subjects, &data.exams))
}
