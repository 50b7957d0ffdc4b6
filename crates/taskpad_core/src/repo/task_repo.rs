//! Task list persistence over the key-value blob store.
//!
//! # Responsibility
//! - Load the task list from its fixed key, decoding through a typed parse.
//! - Save the whole list back as one JSON blob on every mutation.
//!
//! # Invariants
//! - An absent key loads as an empty list; it is not an error.
//! - A malformed or id-colliding blob is rejected as `CorruptData` instead of
//!   propagating undefined shapes into callers.
//! - `save` has whole-blob overwrite semantics; there is no diffing.

use crate::db::DbError;
use crate::model::task::Task;
use crate::model::task_list::{TaskList, TaskListError};
use crate::store::kv::KvStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed persistence key for the serialized task list.
///
/// The suffix names the blob schema; a future shape change gets a new key
/// plus an explicit migration rather than an in-place format change.
pub const TASKS_KEY: &str = "tasks_list.v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying storage failed.
    Db(DbError),
    /// The persisted blob exists but does not decode to a valid task list.
    CorruptData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CorruptData(message) => {
                write!(f, "corrupt persisted task data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CorruptData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<TaskListError> for RepoError {
    fn from(value: TaskListError) -> Self {
        Self::CorruptData(value.to_string())
    }
}

/// Loads and saves the task list through a [`KvStore`].
pub struct TaskRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the task list from the fixed key.
    ///
    /// # Errors
    /// - `Db` when storage cannot be read.
    /// - `CorruptData` when the blob is present but malformed or contains
    ///   duplicate ids.
    pub fn load(&self) -> RepoResult<TaskList> {
        let blob = match self.store.get(TASKS_KEY) {
            Ok(blob) => blob,
            Err(err) => {
                error!("event=tasks_load module=repo status=error error_code=store_get_failed error={err}");
                return Err(err.into());
            }
        };

        let Some(blob) = blob else {
            info!("event=tasks_load module=repo status=ok count=0 source=absent");
            return Ok(TaskList::default());
        };

        let tasks: Vec<Task> = serde_json::from_str(&blob).map_err(|err| {
            error!("event=tasks_load module=repo status=error error_code=corrupt_blob error={err}");
            RepoError::CorruptData(format!("task blob is not a valid task array: {err}"))
        })?;

        let list = TaskList::from_tasks(tasks).map_err(|err| {
            error!("event=tasks_load module=repo status=error error_code=corrupt_blob error={err}");
            RepoError::from(err)
        })?;

        info!(
            "event=tasks_load module=repo status=ok count={} source=blob",
            list.len()
        );
        Ok(list)
    }

    /// Serializes and writes the full list back under the fixed key.
    ///
    /// # Errors
    /// - `Db` when storage cannot be written. The in-memory list stays
    ///   authoritative for the session; the caller decides how to react.
    pub fn save(&self, tasks: &TaskList) -> RepoResult<()> {
        let blob = serde_json::to_string(tasks).map_err(|err| {
            // Serialization of an in-memory list only fails on allocator-level
            // problems; classified as corrupt rather than transport.
            RepoError::CorruptData(format!("task list failed to serialize: {err}"))
        })?;

        match self.store.set(TASKS_KEY, &blob) {
            Ok(()) => {
                info!(
                    "event=tasks_save module=repo status=ok count={}",
                    tasks.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=tasks_save module=repo status=error error_code=store_set_failed error={err}");
                Err(err.into())
            }
        }
    }
}
