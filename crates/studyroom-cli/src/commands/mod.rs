pub mod agenda;
pub mod config;
pub mod stats;
pub mod task;

use std::path::PathBuf;

use studyroom_core::error::Result;
use studyroom_core::{Exam, Snapshot, SnapshotStore, Subject, Task, Today};

/// Options shared by every command.
pub struct Context {
    pub snapshot: Option<PathBuf>,
    pub today: Today,
}

/// Normalized collections loaded for read-only commands.
pub struct Collections {
    pub tasks: Vec<Task>,
    pub subjects: Vec<Subject>,
    pub exams: Vec<Exam>,
}

impl Context {
    pub fn open_store(&self) -> Result<SnapshotStore> {
        let store = match &self.snapshot {
            Some(path) => SnapshotStore::open(path.clone())?,
            None => SnapshotStore::open_default()?,
        };
        tracing::debug!(path = %store.path().display(), "snapshot opened");
        Ok(store)
    }

    pub fn load(&self) -> Result<Collections> {
        let store = self.open_store()?;
        let snapshot: &Snapshot = store.snapshot();
        Ok(Collections {
            tasks: snapshot.tasks(),
            subjects: snapshot.subjects(),
            exams: snapshot.exams(),
        })
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
