//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure list operations and repository persistence into the
//!   intent-level API the UI shell calls.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod task_service;
