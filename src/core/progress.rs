use std::fmt;
use std::path::PathBuf;
use serde::Serialize;
use crate::utils::ExportError;

/// One (file, size, format) unit written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFile {
    /// Output file name, `{base}-{suffix}.{format}`
    pub file_name: String,
    /// Full path of the written file
    pub path: PathBuf,
    /// Encoded size in bytes
    pub size: u64,
    /// Units finished so far, this one included
    pub completed: usize,
    /// Units the job would write if it runs to completion
    pub total: usize,
}

impl SavedFile {
    /// Progress percentage (0-100)
    pub fn percentage(&self) -> usize {
        if self.total > 0 {
            (self.completed * 100) / self.total
        } else {
            0
        }
    }
}

/// Notification sent from the export worker.
///
/// Displays as the single line a front-end shows to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ExportEvent {
    Saved(SavedFile),
    /// Terminal; nothing follows it
    Failed(ExportError),
}

impl ExportEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ExportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved(saved) => write!(f, "Saved: {}", saved.file_name),
            Self::Failed(err) => write!(f, "Error: {}", err),
        }
    }
}

/// Outcome of one run, returned when the worker finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    /// Files written
    pub saved: usize,
    /// Bytes written across all files
    pub bytes_written: u64,
    /// Error that stopped the run early
    pub error: Option<ExportError>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub(crate) fn record(&mut self, saved: &SavedFile) {
        self.saved += 1;
        self.bytes_written += saved.size;
    }
}
