//! Error handling for fastapi-helper.
//! Defines the error type shared by the substitution primitives, the template
//! copier and the scaffolding commands.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for fastapi-helper operations.
///
/// This enum represents every failure a primitive or a command can report.
/// Command steps wrap their failure in [`Error::StepFailed`] so the user sees
/// which step aborted the sequence.
#[derive(Error, Debug)]
pub enum Error {
    /// The file a primitive was asked to mutate does not exist
    #[error("File does not exist: '{path}'.")]
    NotFound { path: PathBuf },

    /// No line of the file contains the anchor tag
    #[error("Tag '{tag}' was not found in '{path}'.")]
    TagNotFound { tag: String, path: PathBuf },

    /// A substitution map contains an empty key
    #[error("Substitution keys must not be empty.")]
    EmptyNeedle,

    /// A package-manager process could not be spawned or exited with a failure status
    #[error("Command '{command}' failed: {reason}.")]
    ProcessError { command: String, reason: String },

    /// The template directory does not exist
    #[error("Template does not exist: '{template_dir}'.")]
    TemplateNotFound { template_dir: String },

    /// The workspace root is missing or not a directory
    #[error("No workspace folder found at '{path}'. Open or pass an existing directory.")]
    NoWorkspace { path: PathBuf },

    /// Neither uv.lock nor poetry.lock is present in the workspace
    #[error(
        "No uv.lock or poetry.lock found in '{workspace}'. The project must be managed by uv or poetry."
    )]
    NoLockFile { workspace: PathBuf },

    /// The module directory already exists
    #[error("Module '{name}' already exists at '{path}'.")]
    ModuleExists { name: String, path: PathBuf },

    /// The schema file already exists
    #[error("Schema file already exists: '{path}'.")]
    SchemaExists { path: PathBuf },

    /// The user dismissed a prompt
    #[error("Cancelled: {0}.")]
    Cancelled(String),

    /// Represents errors raised by the terminal prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in processing .helperignore files
    #[error("Ignore pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A command step failed; `step` names it
    #[error("{step} failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps the error with the name of the command step it aborted.
    pub fn in_step<S: Into<String>>(self, step: S) -> Self {
        Error::StepFailed { step: step.into(), source: Box::new(self) }
    }

    /// Returns the innermost error, looking through step wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
