//! Hook execution
//!
//! Commands run strictly one after another with the terminal handed
//! through, so later hooks observe the effects of earlier ones. The first
//! failure stops the run.

use super::Outcome;
use super::self_ref::SelfInvocation;
use crate::process::{ExecutionResult, run_inherited, split_command};
use hook_mux_core::{HookCommand, Result};

/// Sequential, fail-fast hook runner
pub struct HookRunner<'a> {
    self_invocation: &'a SelfInvocation,
}

impl<'a> HookRunner<'a> {
    /// Runner expanding `<self>` to `self_invocation`
    pub fn new(self_invocation: &'a SelfInvocation) -> Self {
        Self { self_invocation }
    }

    /// Run every command with `files` appended as trailing arguments
    ///
    /// A command re-entering the multiplexer gets `--` ahead of the files,
    /// so a file named like an option stays a file one level down.
    ///
    /// Returns [`Outcome::Failed`] for the first command exiting non-zero;
    /// the remaining commands are not started.
    ///
    /// # Errors
    ///
    /// Returns an error if a command cannot be parsed or started.
    #[tracing::instrument(skip_all, fields(hooks = commands.len(), files = files.len()))]
    pub fn run(&self, commands: &[HookCommand], files: &[String]) -> Result<Outcome> {
        for command in commands {
            let expanded = self.self_invocation.substitute(command.as_str());
            let mut argv = split_command(&expanded)?;
            if argv.is_empty() {
                // e.g. a line holding only a `#` comment
                tracing::trace!("Skipping hook without words: {}", command);
                continue;
            }
            push_files(&mut argv, command, files);

            tracing::debug!("Running hook: {}", command);
            if let ExecutionResult::Failed(status) = run_inherited(&argv)? {
                tracing::debug!(status, "Hook failed, aborting");
                return Ok(Outcome::Failed {
                    command: command.to_string(),
                    status,
                });
            }
        }

        Ok(Outcome::Succeeded)
    }
}

/// Append `files` to `argv`, ending option parsing first for `<self>`
pub(crate) fn push_files(argv: &mut Vec<String>, command: &HookCommand, files: &[String]) {
    if files.is_empty() {
        return;
    }
    if command.is_self_referencing() {
        argv.push("--".to_string());
    }
    argv.extend_from_slice(files);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn commands(lines: &[String]) -> Vec<HookCommand> {
        lines.iter().filter_map(|l| HookCommand::parse(l)).collect()
    }

    /// A hook that records its invocation as `<dir>/<name>` and exits `status`
    fn marker(dir: &Path, name: &str, status: i32) -> String {
        format!(
            "sh -c 'touch \"$0\"; exit {status}' {}",
            shell_words::quote(&dir.join(name).to_string_lossy())
        )
    }

    #[test]
    fn test_empty_list_succeeds() {
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);

        assert_eq!(runner.run(&[], &[]).unwrap(), Outcome::Succeeded);
    }

    #[test]
    fn test_all_succeed() {
        let temp = TempDir::new().unwrap();
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);

        let hooks = commands(&[marker(temp.path(), "1", 0), marker(temp.path(), "2", 0)]);
        assert_eq!(runner.run(&hooks, &[]).unwrap(), Outcome::Succeeded);
        assert!(temp.path().join("1").exists());
        assert!(temp.path().join("2").exists());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);

        let hooks = commands(&[
            marker(temp.path(), "1", 0),
            marker(temp.path(), "2", 13),
            marker(temp.path(), "3", 42),
        ]);
        let outcome = runner.run(&hooks, &[]).unwrap();

        assert_eq!(outcome.exit_code(), 13);
        assert!(matches!(outcome, Outcome::Failed { ref command, .. } if command == hooks[1].as_str()));
        assert!(temp.path().join("1").exists());
        assert!(temp.path().join("2").exists());
        assert!(!temp.path().join("3").exists());
    }

    #[test]
    fn test_files_appended_as_arguments() {
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);
        let files: Vec<String> = ["a", "b c", "d"].iter().map(ToString::to_string).collect();

        let hooks = commands(&["sh -c 'exit $#' count".to_string()]);
        assert_eq!(runner.run(&hooks, &files).unwrap().exit_code(), 3);
    }

    #[test]
    fn test_self_reference_ends_options_before_files() {
        // `<self>` stands in for `sh` here, so `$#` counts the `--`
        let invocation = SelfInvocation::new("sh", None);
        let runner = HookRunner::new(&invocation);
        let files: Vec<String> = ["-x", "--section=other"].iter().map(ToString::to_string).collect();

        let hooks = commands(&["<self> -c 'exit $#' count".to_string()]);
        assert_eq!(runner.run(&hooks, &files).unwrap().exit_code(), 3);

        let hooks = commands(&["sh -c 'exit $#' count".to_string()]);
        assert_eq!(runner.run(&hooks, &files).unwrap().exit_code(), 2);
    }

    #[test]
    fn test_self_reference_without_files_has_no_separator() {
        let invocation = SelfInvocation::new("sh", None);
        let runner = HookRunner::new(&invocation);

        let hooks = commands(&["<self> -c 'exit $#' count".to_string()]);
        assert_eq!(runner.run(&hooks, &[]).unwrap(), Outcome::Succeeded);
    }

    #[test]
    fn test_comment_only_command_is_skipped() {
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);

        let hooks = commands(&["# disabled for now".to_string(), "true".to_string()]);
        assert_eq!(runner.run(&hooks, &[]).unwrap(), Outcome::Succeeded);
    }

    #[test]
    fn test_missing_program_is_error() {
        let invocation = SelfInvocation::new("/bin/git-hook-mux", None);
        let runner = HookRunner::new(&invocation);

        let hooks = commands(&["/nonexistent/hook-mux-test --flag".to_string()]);
        assert!(runner.run(&hooks, &[]).is_err());
    }
}
