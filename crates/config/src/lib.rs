//! Configuration access for git-hook-mux
//!
//! This crate handles:
//! - Reading the git config store (`git config` or libgit2)
//! - Loading the hook list of a section
//! - Logging initialization

pub mod git;
pub mod hooks;
pub mod logging;

// Re-export error types from core
pub use hook_mux_core::{Error, Result};

pub use git::{ConfigStore, Git2Store, GitCommandStore, create_store};
pub use hooks::HookLoader;
