use std::path::PathBuf;

use tablewright_core::{RenderError, ValidationError};
use thiserror::Error;

/// Result type alias for the workflow.
pub type Result<T> = std::result::Result<T, AppError>;

/// Everything that can stop the workflow before a manifest is written.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("REQUEST_PATH environment variable not set")]
    MissingRequestPath,

    #[error("Request file not found: {}", .0.display())]
    RequestNotFound(PathBuf),

    #[error("Failed to read request: {0}")]
    ReadRequest(#[source] std::io::Error),

    #[error("Failed to read request: {0}")]
    ParseRequest(#[source] serde_yaml::Error),

    #[error("Request file is empty")]
    EmptyRequest,

    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to generate manifest: {0}")]
    Compile(#[from] RenderError),

    #[error("Failed to create state directory: {0}")]
    CreateStateDir(#[source] std::io::Error),

    #[error("Failed to write manifest: {0}")]
    WriteManifest(#[source] std::io::Error),
}

/// Outcome classes, each with its own exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Configuration,
    Input,
    Validation,
    Compile,
    Output,
}

impl ErrorClass {
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorClass::Configuration => 2,
            ErrorClass::Input => 3,
            ErrorClass::Validation => 4,
            ErrorClass::Compile => 5,
            ErrorClass::Output => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Configuration => "configuration",
            ErrorClass::Input => "input",
            ErrorClass::Validation => "validation",
            ErrorClass::Compile => "compile",
            ErrorClass::Output => "output",
        }
    }
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::MissingRequestPath => ErrorClass::Configuration,
            AppError::RequestNotFound(_)
            | AppError::ReadRequest(_)
            | AppError::ParseRequest(_)
            | AppError::EmptyRequest => ErrorClass::Input,
            AppError::Validation(_) => ErrorClass::Validation,
            AppError::Compile(_) => ErrorClass::Compile,
            AppError::CreateStateDir(_) | AppError::WriteManifest(_) => ErrorClass::Output,
        }
    }
}
