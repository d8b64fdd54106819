//! Hook resolution and dispatch engine for git-hook-mux
//!
//! This crate provides:
//! - Blocking subprocess execution with tagged exit results
//! - `<self>` expansion for chained multiplexers
//! - File list selection through an optional file command
//! - Sequential, fail-fast hook dispatch

pub mod hooks;
pub mod mux;
pub mod process;

// Re-export error types from core
pub use hook_mux_core::{Error, Result};

pub use hooks::{Outcome, SelfInvocation};
pub use mux::{Invocation, run};
pub use process::ExecutionResult;
