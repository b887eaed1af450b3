//! Error handling for projgen.
//! Defines the error type and result alias used throughout the crate.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::language::Language;

/// Generation step a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The language-specific creation routine
    CreateProject(Language),
    /// Rendering the Makefile from the kind-specific template
    Makefile,
    /// Copying the ignore file
    Gitignore,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateProject(language) => write!(f, "creating {language} project"),
            Step::Makefile => write!(f, "generating Makefile"),
            Step::Gitignore => write!(f, "copying .gitignore"),
        }
    }
}

/// Custom error types for projgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The language argument matched none of the accepted aliases
    #[error("Invalid language '{input}'. Valid languages: {valid}.")]
    InvalidLanguageError { input: String, valid: String },

    /// The project name cannot be used as a directory name
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidNameError { name: String, reason: String },

    #[error("Project directory '{project_dir}' already exists.")]
    DirectoryExistsError { project_dir: String },

    /// A required static asset is absent or unreadable.
    /// Indicates a broken template installation rather than a user mistake.
    #[error("Missing configuration: cannot read '{asset}': {source}.")]
    MissingConfigurationError {
        asset: String,
        #[source]
        source: io::Error,
    },

    #[error("Template syntax error: {0}.")]
    TemplateSyntaxError(minijinja::Error),

    #[error("Template render error: {0}.")]
    TemplateRenderError(minijinja::Error),

    /// External toolchain exited non-zero or could not be started
    #[error("Toolchain command '{command}' failed ({reason}).{output}")]
    ToolchainError { command: String, reason: String, output: String },

    /// Wraps the failure of one generation step
    #[error("Failed {step}: {source}")]
    GenerationError {
        step: Step,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the innermost error, skipping any `GenerationError` wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::GenerationError { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for Results with projgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
