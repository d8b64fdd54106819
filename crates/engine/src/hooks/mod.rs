//! Hook resolution and dispatch
//!
//! - [`self_ref`]: `<self>` expansion for chained multiplexers
//! - [`files`]: optional file command producing the file list
//! - [`executor`]: sequential, fail-fast execution

pub mod executor;
pub mod files;
pub mod self_ref;

pub use executor::HookRunner;
pub use files::{FileListResolver, FileSelection};
pub use self_ref::SelfInvocation;

/// Final state of one multiplexer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every command ran and succeeded, or there was nothing to run
    Succeeded,
    /// The file command selected no files, so no hook was run
    NoFiles,
    /// A command exited non-zero; nothing after it was run
    Failed {
        /// The command as configured
        command: String,
        /// Its exit status, passed through unmodified
        status: i32,
    },
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Succeeded | Self::NoFiles => 0,
            Self::Failed { status, .. } => *status,
        }
    }
}
