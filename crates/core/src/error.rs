//! Base error types for git-hook-mux
//!
//! This module provides the foundation error types that all crates can use.
//!
//! A hook command exiting with a non-zero status is *not* an error: it is an
//! ordinary outcome reported through the dispatcher's result type. Errors
//! here describe invocations that could not be carried out at all.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured command string could not be split into words
    #[error("Failed to parse command '{command}': {source}")]
    CommandParse {
        /// The raw command string
        command: String,
        /// The underlying parse error
        #[source]
        source: shell_words::ParseError,
    },

    /// A command could not be started
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration section name is empty
    #[error("Configuration section must not be empty")]
    EmptySection,

    /// No hook type could be derived from the override or invocation path
    #[error("Unable to determine hook type from '{0}'")]
    HookType(String),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
