// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{ExportEvent, ExportJob, ExportRequest, ExportSummary, SavedFile, SizeSpec};
pub use crate::processing::{ExportHandle, export_blocking, spawn_export};
pub use crate::utils::{AppError, AppResult, ExportError, OutputFormat, ValidationError, assemble_job};
pub use crate::commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The command-line front-end lives in main.rs.
