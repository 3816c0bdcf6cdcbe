pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{AppError, AppResult, ExportError, ExportResult, ValidationError};
pub use validation::assemble_job;
pub use formats::{OutputFormat, SOURCE_EXTENSIONS, is_supported_source};
pub use fs::{base_name, ensure_writable_dir, output_file_name, output_path};
