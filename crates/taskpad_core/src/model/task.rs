//! Task record and field validation.
//!
//! # Responsibility
//! - Define the single persisted entity of the app.
//! - Validate user-entered fields before a task may exist.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused.
//! - `title` and `about` are non-empty after whitespace trimming.
//! - `completed` starts as `false` at creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Random v4 UUIDs remove the collision window a timestamp-based id has.
pub type TaskId = Uuid;

/// Validation error for task construction and persisted-state checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `title` is empty after trimming.
    EmptyTitle,
    /// `about` is empty after trimming.
    EmptyAbout,
    /// The nil UUID is reserved and never a valid task id.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyAbout => write!(f, "task about must not be empty"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// The persisted to-do record.
///
/// Serialized field names are the wire schema of the stored blob; renaming a
/// field is a breaking change for existing on-device data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used as the sole lookup key.
    pub id: TaskId,
    /// Short display name. Stored as entered; validated trimmed-non-empty.
    pub title: String,
    /// Longer description shown under the title.
    pub about: String,
    /// Two-state lifecycle flag, toggled from the list row.
    pub completed: bool,
}

impl Task {
    /// Creates a task with a freshly generated id and `completed = false`.
    ///
    /// # Errors
    /// - Returns a validation error when either field trims to empty.
    pub fn new(
        title: impl Into<String>,
        about: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, about)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by load paths where identity already exists in the stored blob.
    ///
    /// # Errors
    /// - Returns `NilId` for the nil UUID.
    /// - Returns a validation error when either field trims to empty.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        about: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            about: about.into(),
            completed: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the record invariants.
    ///
    /// Read paths run this on persisted state so invalid data is rejected
    /// instead of propagated into the UI layer.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.about.trim().is_empty() {
            return Err(TaskValidationError::EmptyAbout);
        }
        Ok(())
    }

    /// Formats the two-line hand-off text for the platform share sheet.
    ///
    /// Pure formatting; no persistence effect.
    pub fn share_text(&self) -> String {
        format!("Task: {}\nAbout: {}", self.title, self.about)
    }
}
