//! One multiplexer invocation, end to end
//!
//! `ResolvingConfig → (ResolvingFiles)? → Dispatching → Succeeded | Failed`
//!
//! There is no retry and no partial success: the first failing command
//! decides the outcome.

use crate::hooks::{FileListResolver, FileSelection, HookRunner, Outcome, SelfInvocation};
use hook_mux_config::{ConfigStore, HookLoader};
use hook_mux_core::{HookCommand, HookType, Result, Section};
use std::io::Write;

/// Everything resolved from the command line
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Config section to read hooks from
    pub section: Section,
    /// Active hook type
    pub hook_type: HookType,
    /// How `<self>` expands
    pub self_invocation: SelfInvocation,
    /// Optional command producing the file list
    pub file_cmd: Option<String>,
    /// Positional arguments
    pub files: Vec<String>,
}

/// Run the hooks configured for `invocation`
///
/// # Errors
///
/// Returns an error if a configured command cannot be parsed or started.
/// Commands exiting non-zero are reported through [`Outcome::Failed`].
#[tracing::instrument(skip_all, fields(section = %invocation.section, hook_type = %invocation.hook_type))]
pub fn run(store: &dyn ConfigStore, invocation: Invocation) -> Result<Outcome> {
    let Invocation {
        section,
        hook_type,
        self_invocation,
        file_cmd,
        files,
    } = invocation;

    let loader = HookLoader::new(store, &section);
    let verbose = loader.verbose();
    let hooks = loader.load(&hook_type);

    if verbose {
        write_summary(&mut std::io::stdout().lock(), &section, &hook_type, &hooks)?;
    }

    if hooks.is_empty() {
        tracing::debug!("No hooks configured");
        return Ok(Outcome::Succeeded);
    }

    let files = match FileListResolver::new(file_cmd.as_deref(), &self_invocation).resolve(files)? {
        FileSelection::Files(files) => files,
        FileSelection::Empty => {
            tracing::debug!("File command selected no files, skipping hooks");
            return Ok(Outcome::NoFiles);
        }
        FileSelection::Failed { command, status } => {
            return Ok(Outcome::Failed { command, status });
        }
    };

    HookRunner::new(&self_invocation).run(&hooks, &files)
}

/// Print the resolved configuration, as requested by `<section>.verbose`
pub fn write_summary(
    out: &mut impl Write,
    section: &Section,
    hook_type: &HookType,
    hooks: &[HookCommand],
) -> Result<()> {
    writeln!(out, "Section: {section}")?;
    writeln!(out, "Hook type: {hook_type}")?;
    writeln!(out, "Hooks registered:")?;
    for hook in hooks {
        writeln!(out, "{hook}")?;
    }
    out.flush()?;
    Ok(())
}
