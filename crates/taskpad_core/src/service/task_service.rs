//! Task intent service owning the canonical in-memory task list.
//!
//! # Responsibility
//! - Apply one pure list operation per UI intent and persist the result.
//! - Notify registered subscribers after every committed mutation.
//!
//! # Invariants
//! - The in-memory list is authoritative as soon as an operation commits;
//!   a failed save is reported to the caller but does not roll it back.
//! - No-op intents (missing id, rejected input) do not persist or notify.
//! - The list is owned here, not in module-level state; callers hold the
//!   service by value or behind whatever sharing they need.

use crate::model::task::TaskId;
use crate::model::task_list::TaskList;
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::store::kv::KvStore;
use log::info;

/// Callback invoked with the new list after each committed mutation.
pub type Subscriber = Box<dyn Fn(&TaskList)>;

/// Intent-level service over the task list.
pub struct TaskService<S: KvStore> {
    repo: TaskRepository<S>,
    tasks: TaskList,
    subscribers: Vec<Subscriber>,
}

impl<S: KvStore> TaskService<S> {
    /// Loads the persisted list and builds a service around it.
    ///
    /// # Errors
    /// - Propagates repository load errors; callers decide whether to fall
    ///   back to an empty list at the UI boundary.
    pub fn load(store: S) -> RepoResult<Self> {
        let repo = TaskRepository::new(store);
        let tasks = repo.load()?;
        Ok(Self {
            repo,
            tasks,
            subscribers: Vec::new(),
        })
    }

    /// Read-only view of the current list for rendering.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Registers a subscriber notified after every committed mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&TaskList) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Adds a task from user input.
    ///
    /// Returns `Ok(None)` when either field trims to empty: the list is
    /// unchanged, nothing persists, and the caller keeps its input dialog
    /// open. Returns the new id otherwise.
    ///
    /// # Errors
    /// - Save failures after a committed add.
    pub fn add(&mut self, title: &str, about: &str) -> RepoResult<Option<TaskId>> {
        let (next, created) = self.tasks.added(title, about);
        let Some(id) = created else {
            info!("event=task_add module=service status=rejected reason=empty_field");
            return Ok(None);
        };

        info!("event=task_add module=service status=ok task_id={id}");
        self.commit(next).map(|()| Some(id))
    }

    /// Deletes the task with the given id; benign no-op when absent.
    ///
    /// # Errors
    /// - Save failures after a committed delete.
    pub fn delete(&mut self, id: TaskId) -> RepoResult<()> {
        if !self.tasks.contains(id) {
            info!("event=task_delete module=service status=noop task_id={id}");
            return Ok(());
        }

        info!("event=task_delete module=service status=ok task_id={id}");
        self.commit(self.tasks.deleted(id))
    }

    /// Replaces title/about of the matching task; benign no-op when absent.
    ///
    /// Returns `Ok(false)` when either replacement field trims to empty:
    /// the list is unchanged, nothing persists, and the caller keeps its
    /// edit row open, mirroring the add validation. Accepted input returns
    /// `Ok(true)`, including the benign missing-id case.
    ///
    /// # Errors
    /// - Save failures after a committed edit.
    pub fn edit(&mut self, id: TaskId, title: &str, about: &str) -> RepoResult<bool> {
        if title.trim().is_empty() || about.trim().is_empty() {
            info!("event=task_edit module=service status=rejected task_id={id} reason=empty_field");
            return Ok(false);
        }

        if !self.tasks.contains(id) {
            info!("event=task_edit module=service status=noop task_id={id}");
            return Ok(true);
        }

        info!("event=task_edit module=service status=ok task_id={id}");
        self.commit(self.tasks.edited(id, title, about)).map(|()| true)
    }

    /// Flips completion of the matching task; benign no-op when absent.
    ///
    /// # Errors
    /// - Save failures after a committed toggle.
    pub fn toggle(&mut self, id: TaskId) -> RepoResult<()> {
        if !self.tasks.contains(id) {
            info!("event=task_toggle module=service status=noop task_id={id}");
            return Ok(());
        }

        info!("event=task_toggle module=service status=ok task_id={id}");
        self.commit(self.tasks.toggled(id))
    }

    /// Returns the share-sheet text for the matching task.
    ///
    /// Pure read; `None` when the id is unknown.
    pub fn share(&self, id: TaskId) -> Option<String> {
        self.tasks.get(id).map(|task| task.share_text())
    }

    /// Commits a new list state: swap in memory, persist, then notify.
    ///
    /// Subscribers observe the committed state even when the save failed,
    /// because the in-memory list is authoritative for the session.
    fn commit(&mut self, next: TaskList) -> RepoResult<()> {
        self.tasks = next;
        let saved = self.repo.save(&self.tasks);
        for subscriber in &self.subscribers {
            subscriber(&self.tasks);
        }
        saved
    }
}
