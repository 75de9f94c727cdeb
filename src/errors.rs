use std::{io, path::PathBuf};

use thiserror::Error;

/// Status for bad invocations, wrong file types and malformed input.
pub const EXIT_USAGE: u8 = 1;
/// Status for a configuration or sequence file that is missing or unreadable.
pub const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot find config file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("config line {line}: invalid sample name {name:?}: {reason}")]
    InvalidName {
        line: usize,
        name: String,
        reason: &'static str,
    },

    #[error("invalid file type provided: {}", .0.display())]
    WrongFileType(PathBuf),

    #[error("no such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not formatted correctly", .0.display())]
    Format(PathBuf),

    #[error("could not launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PipelineError {
    /// Process exit status for this error. Missing inputs are kept apart from
    /// bad inputs so callers can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::ConfigNotFound(_)
            | PipelineError::FileNotFound(_)
            | PipelineError::Unreadable { .. } => EXIT_NOT_FOUND,
            _ => EXIT_USAGE,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.exit_code() == EXIT_NOT_FOUND
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
