//! Repository layer over the blob store.
//!
//! # Responsibility
//! - Serialize the task list to and from its single persisted blob.
//! - Return semantic errors (`CorruptData`) in addition to transport errors,
//!   so callers decide whether to surface, log, or fall back.

pub mod task_repo;
