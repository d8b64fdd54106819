//! Hook identifiers shared by every layer
//!
//! [`Section`] and [`HookType`] are validated newtypes: once constructed they
//! are guaranteed non-empty, so resolvers further down never have to check.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Configuration section used when no override is given.
pub const DEFAULT_SECTION: &str = "hook-mux";

/// Placeholder in a configured command that expands to a re-invocation of
/// the multiplexer itself.
pub const SELF_TOKEN: &str = "<self>";

/// A git configuration namespace, e.g. `hook-mux`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section(String);

impl Section {
    /// Create a section from a name
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySection`] if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptySection);
        }
        Ok(Self(name))
    }

    /// Build the fully qualified config key `<section>.<key>`
    pub fn key(&self, key: &str) -> String {
        format!("{}.{key}", self.0)
    }

    /// The section name as configured
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Section {
    fn default() -> Self {
        Self(DEFAULT_SECTION.to_string())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The hook slot being serviced, e.g. `pre-commit`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HookType(String);

impl HookType {
    /// Create a hook type from an explicit name
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookType`] if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::HookType(name));
        }
        Ok(Self(name))
    }

    /// Resolve the active hook type.
    ///
    /// An explicit override always wins. Otherwise the type is the final
    /// component of the invocation path, which is what a symlink installed
    /// as `.git/hooks/pre-commit` yields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookType`] if neither source produces a name.
    pub fn resolve(explicit: Option<&str>, invocation: &Path) -> Result<Self> {
        if let Some(name) = explicit {
            return Self::new(name);
        }

        invocation
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::HookType(invocation.display().to_string()))
            .and_then(Self::new)
    }

    /// The hook type name, e.g. `pre-commit`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single configured command line, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommand(String);

impl HookCommand {
    /// Wrap a configured line, or `None` if it is empty or whitespace-only
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            None
        } else {
            Some(Self(line.to_string()))
        }
    }

    /// The command line exactly as configured
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the command references the multiplexer itself
    pub fn is_self_referencing(&self) -> bool {
        self.0.contains(SELF_TOKEN)
    }
}

impl fmt::Display for HookCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
