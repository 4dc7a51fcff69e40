use std::fmt;
use thiserror::Error;

use crate::process::CommandStatus;

/// A single template file that could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateWriteFailure {
    /// Template file name, relative to the project `src/` directory.
    pub file: String,
    /// Human readable cause.
    pub reason: String,
}

impl fmt::Display for TemplateWriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.file, self.reason)
    }
}

fn join_failures(failures: &[TemplateWriteFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// No project name was given on the command line.
    #[error("Please specify the project name.")]
    MissingArgument,

    /// The generator ran but did not exit successfully.
    #[error("Project generation failed with status: {status}")]
    GenerationFailed { status: CommandStatus },

    /// The package manager ran but did not exit successfully.
    #[error("Package installation failed with status: {status}")]
    InstallFailed { status: CommandStatus },

    #[error("Failed to write template files: {}", join_failures(.0))]
    TemplateWriteFailed(Vec<TemplateWriteFailure>),

    #[error("Cannot run '{program}'. Original error: {source}")]
    CommandSpawnFailed { program: String, source: std::io::Error },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
