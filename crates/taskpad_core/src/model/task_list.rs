//! Ordered task collection and its pure operations.
//!
//! # Responsibility
//! - Hold the ordered, id-unique sequence of tasks.
//! - Implement add/edit/delete/toggle as pure value-to-value operations.
//!
//! # Invariants
//! - No two tasks share an id; `from_tasks` is the only way to build a list
//!   from untrusted input and it enforces this.
//! - Operations never fail: a missing id is a benign no-op, and an add with
//!   blank fields returns the list unchanged.

use crate::model::task::{Task, TaskId, TaskValidationError};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered collection of tasks, newest appended at the end.
///
/// Serializes transparently as a JSON array. Deserialization goes through
/// [`TaskList::from_tasks`] so the uniqueness invariant is checked on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Builds a list from already-identified tasks, e.g. a decoded blob.
    ///
    /// # Errors
    /// - Returns the first per-task validation error encountered.
    /// - Returns `DuplicateId` when two tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskListError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            task.validate()?;
            if !seen.insert(task.id) {
                return Err(TaskListError::DuplicateId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// Read-only view of the tasks in list order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns whether a task with the given id exists.
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new incomplete task built from user input.
    ///
    /// When either field trims to empty the input is rejected and the list is
    /// returned unchanged with `None`; the caller uses the outcome to keep
    /// the input dialog open. Otherwise the new task id is returned.
    pub fn added(&self, title: &str, about: &str) -> (Self, Option<TaskId>) {
        match Task::new(title, about) {
            Ok(task) => {
                let id = task.id;
                let mut tasks = self.tasks.clone();
                tasks.push(task);
                (Self { tasks }, Some(id))
            }
            Err(_) => (self.clone(), None),
        }
    }

    /// Removes the task with the given id; no-op when absent.
    pub fn deleted(&self, id: TaskId) -> Self {
        Self {
            tasks: self
                .tasks
                .iter()
                .filter(|task| task.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Replaces `title` and `about` of the matching task, preserving `id`
    /// and `completed`; no-op when absent.
    ///
    /// Replacement fields go through the same emptiness check as an add:
    /// when either trims to empty the list is returned unchanged, so an
    /// edit can never produce a record that would fail validation on load.
    pub fn edited(&self, id: TaskId, title: &str, about: &str) -> Self {
        if title.trim().is_empty() || about.trim().is_empty() {
            return self.clone();
        }
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        Task {
                            title: title.to_string(),
                            about: about.to_string(),
                            ..task.clone()
                        }
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        }
    }

    /// Flips `completed` on the matching task; no-op when absent.
    pub fn toggled(&self, id: TaskId) -> Self {
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        Task {
                            completed: !task.completed,
                            ..task.clone()
                        }
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        }
    }
}

/// Error for building a list from untrusted task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListError {
    /// A task record failed field validation.
    Validation(TaskValidationError),
    /// Two tasks in the input share the same id.
    DuplicateId(TaskId),
}

impl std::fmt::Display for TaskListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
        }
    }
}

impl std::error::Error for TaskListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for TaskListError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}
