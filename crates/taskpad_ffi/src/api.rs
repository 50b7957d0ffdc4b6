//! FFI use-case API for the UI-facing task intents.
//!
//! # Responsibility
//! - Expose stable, intent-level functions to the UI shell via FRB.
//! - Keep error semantics simple for the task screens: responses carry an
//!   `ok` flag plus a diagnostic message, never an exception.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The canonical task state lives in the on-device database; each intent
//!   call loads, applies one operation, and persists.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use taskpad_core::db::open_db;
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SqliteKvStore, Task, TaskId, TaskService,
};
use uuid::Uuid;

const DB_FILE_NAME: &str = "taskpad.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the application data directory holding the task database.
///
/// # FFI contract
/// - Must be called before any task intent.
/// - Idempotent for the same directory; reconfiguration attempts return an
///   error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn set_app_dir(app_dir: String) -> String {
    let trimmed = app_dir.trim();
    if trimmed.is_empty() {
        return "app_dir cannot be empty".to_string();
    }

    let requested = PathBuf::from(trimmed).join(DB_FILE_NAME);
    let active = DB_PATH.get_or_init(|| requested.clone());
    if *active != requested {
        return format!(
            "app dir already pinned at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        );
    }
    String::new()
}

/// One task row as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    pub title: String,
    pub about: String,
    pub completed: bool,
}

/// Response envelope for the list intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Tasks in list order (empty on first run or degraded load).
    pub items: Vec<TaskItem>,
    /// Human-readable diagnostics; empty when the load was clean.
    pub message: String,
}

/// Generic action response envelope for mutating intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation committed.
    pub ok: bool,
    /// Created task ID for add; `None` otherwise.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Response envelope for the share intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskShareResponse {
    /// Whether share text was produced.
    pub ok: bool,
    /// Two-line text for the platform share sheet; empty when `ok` is false.
    pub text: String,
    pub message: String,
}

/// Returns the current task list.
///
/// # FFI contract
/// - Never panics. A failed or corrupt load degrades to an empty list with a
///   diagnostic message so the screen still renders.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> TaskListResponse {
    match with_service(|service| {
        service
            .tasks()
            .tasks()
            .iter()
            .map(task_item)
            .collect::<Vec<TaskItem>>()
    }) {
        Ok(items) => TaskListResponse {
            items,
            message: String::new(),
        },
        Err(message) => {
            warn!("event=tasks_list module=ffi status=degraded error={message}");
            TaskListResponse {
                items: Vec::new(),
                message,
            }
        }
    }
}

/// Adds a task from dialog input.
///
/// # FFI contract
/// - `ok=false` with no `task_id` when either field trims to empty; the UI
///   keeps the dialog open.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String, about: String) -> TaskActionResponse {
    match with_service(|service| service.add(&title, &about)) {
        Ok(Ok(Some(id))) => TaskActionResponse {
            ok: true,
            task_id: Some(id.to_string()),
            message: String::new(),
        },
        Ok(Ok(None)) => TaskActionResponse {
            ok: false,
            task_id: None,
            message: "title and about must not be empty".to_string(),
        },
        Ok(Err(err)) => action_error(err.to_string()),
        Err(message) => action_error(message),
    }
}

/// Deletes a task after the confirmation dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> TaskActionResponse {
    mutate_by_id(&id, |service, id| service.delete(id))
}

/// Saves an in-row edit of title/about.
///
/// # FFI contract
/// - `ok=false` when either field trims to empty; the UI keeps the edit row
///   open, as for a rejected add.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: String, title: String, about: String) -> TaskActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return action_error(format!("invalid task id `{id}`"));
    };

    match with_service(|service| service.edit(task_id, &title, &about)) {
        Ok(Ok(true)) => TaskActionResponse {
            ok: true,
            task_id: None,
            message: String::new(),
        },
        Ok(Ok(false)) => action_error("title and about must not be empty".to_string()),
        Ok(Err(err)) => action_error(err.to_string()),
        Err(message) => action_error(message),
    }
}

/// Flips the completion checkbox.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: String) -> TaskActionResponse {
    mutate_by_id(&id, |service, id| service.toggle(id))
}

/// Produces the share-sheet text for one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_share(id: String) -> TaskShareResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return TaskShareResponse {
            ok: false,
            text: String::new(),
            message: format!("invalid task id `{id}`"),
        };
    };

    match with_service(|service| service.share(task_id)) {
        Ok(Some(text)) => TaskShareResponse {
            ok: true,
            text,
            message: String::new(),
        },
        Ok(None) => TaskShareResponse {
            ok: false,
            text: String::new(),
            message: format!("no task with id `{id}`"),
        },
        Err(message) => TaskShareResponse {
            ok: false,
            text: String::new(),
            message,
        },
    }
}

fn task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        about: task.about.clone(),
        completed: task.completed,
    }
}

fn parse_task_id(id: &str) -> Option<TaskId> {
    Uuid::parse_str(id.trim()).ok()
}

fn action_error(message: String) -> TaskActionResponse {
    TaskActionResponse {
        ok: false,
        task_id: None,
        message,
    }
}

fn mutate_by_id(
    id: &str,
    operation: impl FnOnce(&mut TaskService<SqliteKvStore<'_>>, TaskId) -> taskpad_core::RepoResult<()>,
) -> TaskActionResponse {
    let Some(task_id) = parse_task_id(id) else {
        return action_error(format!("invalid task id `{id}`"));
    };

    match with_service(|service| operation(service, task_id)) {
        Ok(Ok(())) => TaskActionResponse {
            ok: true,
            task_id: None,
            message: String::new(),
        },
        Ok(Err(err)) => action_error(err.to_string()),
        Err(message) => action_error(message),
    }
}

/// Opens the pinned database and runs one intent against a fresh service.
///
/// The database is the canonical state between calls, so each intent reloads
/// rather than caching a service in process-global state.
fn with_service<T>(
    operation: impl FnOnce(&mut TaskService<SqliteKvStore<'_>>) -> T,
) -> Result<T, String> {
    let path = DB_PATH
        .get()
        .ok_or_else(|| "app dir not set; call set_app_dir first".to_string())?;

    let conn = open_db(path).map_err(|err| err.to_string())?;
    let store = SqliteKvStore::new(&conn);
    let mut service = TaskService::load(store).map_err(|err| err.to_string())?;
    Ok(operation(&mut service))
}
