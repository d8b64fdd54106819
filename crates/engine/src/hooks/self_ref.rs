//! `<self>` expansion
//!
//! A configured command may re-enter the multiplexer, typically under a
//! different section:
//!
//! ```text
//! [hook-mux]
//!     pre-commit = <self> --section=lint
//! [lint]
//!     pre-commit = cargo clippy
//! ```
//!
//! The token expands to the program path we were invoked as, plus
//! `--hook-type=<value>` when the current invocation received an explicit
//! hook type. Without that flag a deeper level would infer the hook type
//! from the basename again, which is wrong as soon as the program is not
//! reached through a symlink named after the hook.

use hook_mux_core::{HookType, SELF_TOKEN};
use std::borrow::Cow;
use std::path::PathBuf;

/// How to start this program again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfInvocation {
    program: PathBuf,
    hook_type: Option<HookType>,
}

impl SelfInvocation {
    /// `program` is argv[0]; `hook_type` is the explicit override, if any
    pub fn new(program: impl Into<PathBuf>, hook_type: Option<HookType>) -> Self {
        Self {
            program: program.into(),
            hook_type,
        }
    }

    /// The re-invocation as separate argv words
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program.to_string_lossy().into_owned()];
        if let Some(hook_type) = &self.hook_type {
            argv.push(format!("--hook-type={hook_type}"));
        }
        argv
    }

    /// The re-invocation as one string that splits back into [`Self::argv`]
    pub fn quoted(&self) -> String {
        shell_words::join(self.argv())
    }

    /// Replace every `<self>` in `command` with [`Self::quoted`]
    pub fn substitute<'c>(&self, command: &'c str) -> Cow<'c, str> {
        if command.contains(SELF_TOKEN) {
            Cow::Owned(command.replace(SELF_TOKEN, &self.quoted()))
        } else {
            Cow::Borrowed(command)
        }
    }
}
