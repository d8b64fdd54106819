//! git-hook-mux CLI library
//!
//! This library contains the command line surface of git-hook-mux, making it
//! reusable for testing.

use anyhow::{Context, Result};
use clap::Parser;
use hook_mux_core::{DEFAULT_SECTION, HookType, Section};
use hook_mux_engine::{Invocation, Outcome, SelfInvocation};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// git-hook-mux - run multiple git hooks from a single hook slot
#[derive(Parser, Debug)]
#[command(name = "git-hook-mux")]
#[command(about = "Run multiple git hooks from a single hook slot")]
#[command(version)]
#[command(long_about = "Run multiple git hooks from a single hook slot

Symlink the binary into .git/hooks/<hook-type> (or call it from a hook
script with --hook-type) and register commands with git config:

  git config --add hook-mux.pre-commit 'cargo fmt --check'
  git config --add hook-mux.pre-commit '<self> --section=lint'

Commands run in order; the first failure aborts the rest and its exit
status becomes ours. <self> expands to a re-invocation of this program,
which allows chaining sections.")]
pub struct Cli {
    /// Files passed to every hook (hook arguments from git land here too)
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Git config section holding the hook lists
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SECTION)]
    pub section: String,

    /// Hook type to run, instead of inferring it from the program name
    #[arg(long, value_name = "TYPE")]
    pub hook_type: Option<String>,

    /// Command whose output replaces the file list
    ///
    /// The files given on the command line are appended to it. If it
    /// prints nothing, no hook is run.
    #[arg(long, value_name = "COMMAND")]
    pub file_cmd: Option<String>,

    /// Read git config through libgit2 instead of the git executable
    #[arg(long)]
    pub builtin_git: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "GIT_HOOK_MUX_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the arguments into an engine invocation
    ///
    /// `program` is the path we were invoked as (argv[0]).
    pub fn into_invocation(self, program: &Path) -> Result<Invocation> {
        let section = Section::new(self.section).context("Invalid --section")?;
        let hook_type = HookType::resolve(self.hook_type.as_deref(), program)?;
        // Only an explicit type is forwarded to <self>
        let explicit = self.hook_type.is_some().then(|| hook_type.clone());

        Ok(Invocation {
            section,
            hook_type,
            self_invocation: SelfInvocation::new(program, explicit),
            file_cmd: self.file_cmd,
            files: self.files,
        })
    }
}

/// The path this process was started as
///
/// argv[0] is kept as-is, symlink name included, because the hook type is
/// inferred from it.
pub fn invocation_path() -> Result<PathBuf> {
    match std::env::args_os().next() {
        Some(arg0) if !arg0.is_empty() => Ok(PathBuf::from(arg0)),
        _ => std::env::current_exe().context("Unable to determine program path"),
    }
}

/// Run the multiplexer and return the process exit code
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - The section or hook type is invalid
/// - No config backend is available
/// - A configured command cannot be parsed or started
pub fn run(cli: Cli, program: &Path) -> Result<i32> {
    hook_mux_config::logging::init(cli.debug, cli.log_file.as_deref())?;

    let use_builtin = cli.builtin_git;
    let invocation = cli.into_invocation(program)?;
    tracing::debug!(
        section = %invocation.section,
        hook_type = %invocation.hook_type,
        program = %program.display(),
        "Resolved invocation"
    );

    let store = hook_mux_config::create_store(use_builtin).context("Failed to open git config")?;
    let outcome = hook_mux_engine::run(store.as_ref(), invocation)?;

    if let Outcome::Failed { command, status } = &outcome {
        eprintln!(
            "{}: `{}` failed with status {}",
            "error".red().bold(),
            command,
            status
        );
    }

    Ok(outcome.exit_code())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("git-hook-mux").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.section, "hook-mux");
        assert!(cli.hook_type.is_none());
        assert!(cli.file_cmd.is_none());
        assert!(cli.files.is_empty());
        assert!(!cli.builtin_git);
    }

    #[test]
    fn test_all_options() {
        let cli = parse(&[
            "--section=custom",
            "--hook-type=pre-push",
            "--file-cmd=git diff --name-only",
            "a.rs",
            "b.rs",
        ]);
        assert_eq!(cli.section, "custom");
        assert_eq!(cli.hook_type.as_deref(), Some("pre-push"));
        assert_eq!(cli.file_cmd.as_deref(), Some("git diff --name-only"));
        assert_eq!(cli.files, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_separate_option_values() {
        let cli = parse(&["--hook-type", "pre-commit", "--section", "lint"]);
        assert_eq!(cli.hook_type.as_deref(), Some("pre-commit"));
        assert_eq!(cli.section, "lint");
    }

    #[test]
    fn test_invocation_infers_hook_type() {
        let program = Path::new("/repo/.git/hooks/commit-msg");
        let invocation = parse(&[".git/COMMIT_EDITMSG"]).into_invocation(program).unwrap();

        assert_eq!(invocation.hook_type.as_str(), "commit-msg");
        assert_eq!(invocation.self_invocation.argv(), vec!["/repo/.git/hooks/commit-msg"]);
        assert_eq!(invocation.files, vec![".git/COMMIT_EDITMSG"]);
    }

    #[test]
    fn test_invocation_forwards_explicit_hook_type() {
        let program = Path::new("/usr/bin/git-hook-mux");
        let invocation = parse(&["--hook-type=pre-commit"]).into_invocation(program).unwrap();

        assert_eq!(invocation.hook_type.as_str(), "pre-commit");
        assert_eq!(
            invocation.self_invocation.argv(),
            vec!["/usr/bin/git-hook-mux", "--hook-type=pre-commit"]
        );
    }

    #[test]
    fn test_invocation_rejects_empty_section() {
        let program = Path::new("/repo/.git/hooks/pre-commit");
        assert!(parse(&["--section="]).into_invocation(program).is_err());
    }
}
