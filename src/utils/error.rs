//! Error types for the exporter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Reasons configuration assembly refuses to start an export.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// No source images were selected
    #[error("Please select at least one image")]
    NoSourceFiles,
    /// No output folder was selected
    #[error("Please select an output folder")]
    MissingOutputDir,
    /// Output folder does not exist
    #[error("Output folder does not exist: {0}")]
    OutputDirNotFound(PathBuf),
    /// Output path exists but is not a folder
    #[error("Output path is not a folder: {0}")]
    OutputNotDirectory(PathBuf),
    /// Output folder cannot be written to
    #[error("Output folder is not writable: {0}")]
    OutputDirReadOnly(PathBuf),
    /// No output format was selected
    #[error("Please select at least one format")]
    NoFormats,
    /// Format identifier outside the supported set
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
    /// Size identifier outside the predefined table
    #[error("Unknown size: {0}")]
    UnknownSize(String),
    /// Neither a predefined size nor a custom width and suffix were given
    #[error("Please select at least one size or enter a custom width and suffix")]
    NoSizes,
    /// Custom suffix would place the output outside the output folder
    #[error("Custom suffix must not contain path separators: {0}")]
    InvalidSuffix(String),
    /// Quality outside 1..=100
    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u32),
}

/// Failures raised while the batch export is running.
///
/// Any of these aborts the remainder of the job.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportError {
    /// Custom width could not be read as a positive integer
    #[error("Custom width '{0}' is not valid.")]
    InvalidCustomWidth(String),

    /// Source image could not be opened or decoded
    #[error("Failed to open '{path}': {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Proportional height truncated to zero
    #[error("Resizing '{path}' to width {width} leaves no rows (source is {source_width}x{source_height})")]
    EmptyResize {
        path: PathBuf,
        width: u32,
        source_width: u32,
        source_height: u32,
    },

    /// Resized pixel buffer would exceed the allocation cap
    #[error("Resizing '{path}' to {width}x{height} needs {bytes} bytes, over the {limit} byte limit")]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        bytes: u64,
        limit: u64,
    },

    /// Output file could not be encoded or written
    #[error("Failed to save '{path}': {reason}")]
    Encode { path: PathBuf, reason: String },
}

/// Main error type for the command layer.
///
/// Front-ends only ever see this type, either before a run (validation) or
/// after it (processing, worker failure).
#[derive(Error, Debug, Serialize)]
pub enum AppError {
    /// Request could not be turned into a job
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Export aborted
    #[error("Processing error: {0}")]
    Export(#[from] ExportError),

    /// Background worker died before reporting a summary
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience result type for the command layer.
pub type AppResult<T> = Result<T, AppError>;

impl ExportError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn encode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl AppError {
    pub fn worker<T: Into<String>>(msg: T) -> Self {
        Self::Worker(msg.into())
    }
}
