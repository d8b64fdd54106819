//! File list selection
//!
//! Without a file command the positional arguments are forwarded as-is.
//! With one, the command receives them as trailing arguments and its
//! whitespace separated stdout becomes the new list. This lets one mux
//! level narrow the list (say, to added or modified files) before handing
//! it to the next.
//!
//! Output is split on any whitespace, so a path containing a space reads as
//! two paths.

use super::executor::push_files;
use super::self_ref::SelfInvocation;
use crate::process::{ExecutionResult, run_captured, split_command};
use hook_mux_core::{HookCommand, Result};

/// Outcome of file list resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// Files to hand to every hook command
    Files(Vec<String>),
    /// The file command produced nothing; there is nothing to check
    Empty,
    /// The file command itself failed
    Failed {
        /// The file command as configured
        command: String,
        /// Its exit status
        status: i32,
    },
}

/// Runs the optional file command
pub struct FileListResolver<'a> {
    file_cmd: Option<&'a str>,
    self_invocation: &'a SelfInvocation,
}

impl<'a> FileListResolver<'a> {
    /// Resolver for `file_cmd`; `None` forwards the initial files unchanged
    pub fn new(file_cmd: Option<&'a str>, self_invocation: &'a SelfInvocation) -> Self {
        Self {
            file_cmd,
            self_invocation,
        }
    }

    /// Produce the file list from `initial_files`
    ///
    /// # Errors
    ///
    /// Returns an error if the file command cannot be parsed or started.
    #[tracing::instrument(skip(self, initial_files), fields(file_cmd = ?self.file_cmd, initial = initial_files.len()))]
    pub fn resolve(&self, initial_files: Vec<String>) -> Result<FileSelection> {
        let Some(file_cmd) = self.file_cmd.and_then(HookCommand::parse) else {
            return Ok(FileSelection::Files(initial_files));
        };

        let expanded = self.self_invocation.substitute(file_cmd.as_str());
        let mut argv = split_command(&expanded)?;
        if argv.is_empty() {
            return Ok(FileSelection::Files(initial_files));
        }
        push_files(&mut argv, &file_cmd, &initial_files);

        let captured = run_captured(&argv)?;
        if let ExecutionResult::Failed(status) = captured.result {
            return Ok(FileSelection::Failed {
                command: file_cmd.to_string(),
                status,
            });
        }

        let files: Vec<String> = captured
            .stdout
            .split_whitespace()
            .map(str::to_string)
            .collect();

        tracing::debug!(count = files.len(), "File command selected files");
        if files.is_empty() {
            Ok(FileSelection::Empty)
        } else {
            Ok(FileSelection::Files(files))
        }
    }
}
