//! Git configuration access
//!
//! This module provides a unified interface for reading the git config
//! store, supporting both:
//! - External git command - default, sees exactly what `git config` sees
//! - Built-in git via git2 (libgit2) - no subprocess per lookup
//!
//! Reads never fail from the caller's point of view: an unset key, a broken
//! repository or a failing `git` binary all resolve to "no value". Absence
//! of configuration is not an error for a hook multiplexer.

use hook_mux_core::{Error, Result, Section};
use std::path::{Path, PathBuf};

/// Helper function to convert git2 errors to `hook_mux_core` errors
#[inline]
#[allow(clippy::needless_pass_by_value)]
fn git_err(e: git2::Error) -> Error {
    Error::Message(format!("Git error: {e}"))
}

/// Exit status of `git config` when the key is not set
const UNSET_STATUS: i32 = 1;

/// Read-only access to `<section>.<key>` settings
pub trait ConfigStore {
    /// Every value configured for `section.key`, in config order
    ///
    /// Returns an empty vector if the key is unset or the lookup fails.
    fn get_all(&self, section: &Section, key: &str) -> Vec<String>;

    /// Boolean value of `section.key`, `false` if unset or unreadable
    fn get_bool(&self, section: &Section, key: &str) -> bool;
}

/// Config store backed by the `git config` command
#[derive(Debug, Clone)]
pub struct GitCommandStore {
    git: PathBuf,
    dir: Option<PathBuf>,
}

impl GitCommandStore {
    /// Locate `git` on `PATH`
    ///
    /// # Errors
    ///
    /// Returns an error if no `git` executable can be found.
    pub fn new() -> Result<Self> {
        let git = which::which("git")
            .map_err(|e| Error::Message(format!("Unable to find git executable: {e}")))?;
        Ok(Self::with_executable(git))
    }

    /// Use a specific `git` executable
    pub fn with_executable(git: impl Into<PathBuf>) -> Self {
        Self {
            git: git.into(),
            dir: None,
        }
    }

    /// Run queries from within `dir` instead of the current directory
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Run `git config <args>` and return its stdout if it succeeded
    fn query(&self, args: &[&str]) -> Option<String> {
        let mut expression = duct::cmd(self.git.as_path(), args)
            .stdout_capture()
            .stderr_null()
            .unchecked();
        if let Some(dir) = &self.dir {
            expression = expression.dir(dir);
        }

        match expression.run() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) if output.status.code() == Some(UNSET_STATUS) => {
                tracing::trace!(?args, "No value configured");
                None
            }
            Ok(output) => {
                tracing::warn!(?args, status = ?output.status.code(), "git config query failed");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to run {}: {}", self.git.display(), e);
                None
            }
        }
    }
}

impl ConfigStore for GitCommandStore {
    fn get_all(&self, section: &Section, key: &str) -> Vec<String> {
        let name = section.key(key);
        self.query(&["config", "--get-all", &name])
            .map(|out| out.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn get_bool(&self, section: &Section, key: &str) -> bool {
        let name = section.key(key);
        self.query(&["config", "--bool", "--get", &name])
            .is_some_and(|out| out.trim_end() == "true")
    }
}

/// Config store backed by libgit2
pub struct Git2Store {
    config: git2::Config,
}

impl Git2Store {
    /// Open the configuration git would use for the current process
    ///
    /// Honors `GIT_DIR` and friends, which git sets when running a hook.
    /// Outside of a repository only the global and system files are read.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration can be opened at all.
    pub fn from_env() -> Result<Self> {
        let config = match git2::Repository::open_from_env() {
            Ok(repo) => repo.config(),
            Err(e) => {
                tracing::debug!("Not inside a repository ({}), using default config", e);
                git2::Config::open_default()
            }
        }
        .map_err(git_err)?;

        Ok(Self { config })
    }

    /// Open the configuration of the repository at `repo_path`
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    pub fn open(repo_path: &Path) -> Result<Self> {
        let repo = git2::Repository::open(repo_path).map_err(git_err)?;
        let config = repo.config().map_err(git_err)?;
        Ok(Self { config })
    }
}

impl ConfigStore for Git2Store {
    fn get_all(&self, section: &Section, key: &str) -> Vec<String> {
        let name = section.key(key);
        let mut values = Vec::new();

        let entries = match self.config.multivar(&name, None) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::trace!("No value for {}: {}", name, e);
                return values;
            }
        };

        let collected = entries.for_each(|entry| {
            if let Some(value) = entry.value() {
                values.extend(value.lines().map(str::to_string));
            }
        });

        if let Err(e) = collected {
            tracing::warn!("Failed to read {}: {}", name, e);
            values.clear();
        }
        values
    }

    fn get_bool(&self, section: &Section, key: &str) -> bool {
        let name = section.key(key);
        self.config.get_bool(&name).unwrap_or_else(|e| {
            tracing::trace!("No boolean for {}: {}", name, e);
            false
        })
    }
}

/// Create the config store for this invocation
///
/// # Errors
///
/// Returns an error if the selected backend is unavailable.
pub fn create_store(use_builtin: bool) -> Result<Box<dyn ConfigStore>> {
    if use_builtin {
        Ok(Box::new(Git2Store::from_env()?))
    } else {
        Ok(Box::new(GitCommandStore::new()?))
    }
}
