//! Core types and utilities for git-hook-mux
//!
//! This is the foundation crate (Layer 0) that all other crates depend on.
//! It provides:
//! - Base error types
//! - Hook identifiers (`Section`, `HookType`, `HookCommand`)
//!
//! This crate has no dependencies on other git-hook-mux crates.

pub mod error;
pub mod hook;

pub use error::{Error, Result};
pub use hook::{DEFAULT_SECTION, HookCommand, HookType, SELF_TOKEN, Section};
