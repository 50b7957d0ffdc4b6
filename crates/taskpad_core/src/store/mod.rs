//! Key-value blob storage abstractions and the SQLite implementation.
//!
//! # Responsibility
//! - Define the get/set contract the task repository persists through.
//! - Isolate SQL details from repository and service code.

pub mod kv;
