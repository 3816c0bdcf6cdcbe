//! Core export types.
//!
//! - [`ExportJob`]: Immutable description of one batch run
//! - [`SizeSpec`] / [`CustomSize`]: Resize variants
//! - [`ExportRequest`]: Settings as a front-end collects them
//! - [`ExportEvent`] / [`ExportSummary`]: Progress stream and final outcome

mod types;
mod job;
mod progress;

pub use types::{CustomSize, DEFAULT_QUALITY, ExportRequest, PREDEFINED_SIZES, SizeSpec};
pub use job::ExportJob;
pub use progress::{ExportEvent, ExportSummary, SavedFile};
