//! Core domain logic for the taskpad to-do app.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::task_list::{TaskList, TaskListError};
pub use repo::task_repo::{RepoError, RepoResult, TaskRepository, TASKS_KEY};
pub use service::task_service::TaskService;
pub use store::kv::{KvStore, SqliteKvStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
