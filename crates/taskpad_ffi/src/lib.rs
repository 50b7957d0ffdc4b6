//! FFI crate exposing taskpad core to the mobile UI shell.

pub mod api;
