//! Task management commands for CLI.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use studyroom_core::error::{CoreError, Result};
use studyroom_core::{Priority, RawTask, TaskStore};
use uuid::Uuid;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,
        /// high, medium, low or none
        #[arg(long, default_value = "none")]
        priority: Priority,
        /// Category tag
        #[arg(long)]
        category: Option<String>,
        /// Subject ID
        #[arg(long)]
        subject: Option<String>,
    },
    /// List tasks
    List,
    /// Toggle a task's completion
    Toggle {
        /// Task ID
        id: String,
    },
}

pub fn run(ctx: &Context, action: TaskAction) -> Result<()> {
    let mut store = ctx.open_store()?;

    match action {
        TaskAction::Add {
            title,
            date,
            start,
            end,
            priority,
            category,
            subject,
        } => {
            let task = RawTask {
                id: Uuid::new_v4().to_string(),
                title,
                date: date.map(|d| d.format("%Y-%m-%d").to_string()),
                start_time: start,
                end_time: end,
                priority: Some(priority.as_str().to_string()),
                category,
                subject_id: subject,
                ..RawTask::default()
            };
            store.add_task(task.clone())?;
            println!("Task created: {}", task.id);
        }
        TaskAction::List => {
            print_json(&store.snapshot().tasks())?;
        }
        TaskAction::Toggle { id } => {
            if !store.toggle_complete(&id, Utc::now())? {
                return Err(CoreError::Custom(format!("Task not found: {id}")));
            }
            println!("Task toggled: {id}");
        }
    }
    Ok(())
}
