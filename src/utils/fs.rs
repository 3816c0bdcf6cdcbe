use std::path::{Path, PathBuf};
use tokio::fs;
use crate::core::SizeSpec;
use crate::utils::{OutputFormat, ValidationError};

/// File name with directory and final extension stripped
pub fn base_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output file name: `{base}-{suffix}.{format}`
pub fn output_file_name(base: &str, size: &SizeSpec, format: OutputFormat) -> String {
    format!("{}-{}.{}", base, size.suffix(), format.keyword())
}

/// Full output path inside `dir`
pub fn output_path(dir: impl AsRef<Path>, base: &str, size: &SizeSpec, format: OutputFormat) -> PathBuf {
    dir.as_ref().join(output_file_name(base, size, format))
}

/// Checks that `dir` exists, is a directory and is not read-only
pub async fn ensure_writable_dir(dir: impl AsRef<Path>) -> Result<(), ValidationError> {
    let dir = dir.as_ref();
    let metadata = fs::metadata(dir)
        .await
        .map_err(|_| ValidationError::OutputDirNotFound(dir.to_path_buf()))?;

    if !metadata.is_dir() {
        return Err(ValidationError::OutputNotDirectory(dir.to_path_buf()));
    }

    if metadata.permissions().readonly() {
        return Err(ValidationError::OutputDirReadOnly(dir.to_path_buf()));
    }

    Ok(())
}
