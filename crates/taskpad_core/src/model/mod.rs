//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and the ordered task list.
//! - Provide the pure list operations the intent surface commits.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`; ids are unique per list.
//! - List order is insertion order; new tasks are appended at the end.

pub mod task;
pub mod task_list;
