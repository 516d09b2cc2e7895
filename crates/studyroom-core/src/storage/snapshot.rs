//! JSON snapshot of the task, subject and exam collections.
//!
//! The snapshot file stands in for the app's persistent store. Metric and
//! agenda code never touches it directly: callers load a [`Snapshot`],
//! normalize it, and request mutations through [`TaskStore`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, StoreError};
use crate::model::{Exam, RawExam, RawSubject, RawTask, Subject, Task};

/// Raw collections as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<RawTask>,
    #[serde(default)]
    pub subjects: Vec<RawSubject>,
    #[serde(default)]
    pub exams: Vec<RawExam>,
}

impl Snapshot {
    /// Read a snapshot file. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no snapshot file, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the snapshot as pretty JSON, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let write_failed = |source| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };
        let content = serde_json::to_string_pretty(self).map_err(|source| StoreError::EncodeFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_failed)?;
        std::fs::rename(&tmp, path).map_err(write_failed)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.iter().map(Task::from_raw).collect()
    }

    pub fn subjects(&self) -> Vec<Subject> {
        self.subjects.iter().map(Subject::from_raw).collect()
    }

    pub fn exams(&self) -> Vec<Exam> {
        self.exams.iter().map(Exam::from_raw).collect()
    }
}

/// Mutation entry points of the task store.
pub trait TaskStore {
    /// Flip a task's completion state, stamping or clearing its completion
    /// time. Returns `false` when no task has that id.
    fn toggle_complete(&mut self, task_id: &str, now: DateTime<Utc>) -> Result<bool, StoreError>;

    /// Append a new task. Fails if the id is already taken.
    fn add_task(&mut self, task: RawTask) -> Result<(), StoreError>;
}

/// [`TaskStore`] backed by a snapshot file. Every mutation is written
/// through immediately.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    snapshot: Snapshot,
}

impl SnapshotStore {
    /// Open `<data_dir>/snapshot.json`.
    pub fn open_default() -> Result<Self> {
        let path = data_dir()?.join("snapshot.json");
        Ok(Self::open(path)?)
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = Snapshot::load(&path)?;
        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl SnapshotStore {
    /// Persist `next` and adopt it only once the write succeeded, so a failed
    /// save leaves the in-memory snapshot matching the file.
    fn commit(&mut self, next: Snapshot) -> Result<(), StoreError> {
        next.save(&self.path)?;
        self.snapshot = next;
        Ok(())
    }
}

impl TaskStore for SnapshotStore {
    fn toggle_complete(&mut self, task_id: &str, now: DateTime<Utc>) -> Result<bool, StoreError> {
        let mut next = self.snapshot.clone();
        let Some(task) = next.tasks.iter_mut().find(|t| t.id == task_id) else {
            tracing::warn!(task_id, "toggle requested for unknown task");
            return Ok(false);
        };

        task.is_completed = !task.is_completed;
        task.completed_at = task.is_completed.then(|| {
            serde_json::Value::String(now.to_rfc3339_opts(SecondsFormat::Secs, true))
        });
        let completed = task.is_completed;

        self.commit(next)?;
        tracing::info!(task_id, completed, "task completion toggled");
        Ok(true)
    }

    fn add_task(&mut self, task: RawTask) -> Result<(), StoreError> {
        if self.snapshot.tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::DuplicateTask(task.id));
        }
        let task_id = task.id.clone();
        let mut next = self.snapshot.clone();
        next.tasks.push(task);

        self.commit(next)?;
        tracing::info!(task_id = %task_id, "task added");
        Ok(())
    }
}
