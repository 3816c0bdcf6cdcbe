//! Export job definition.

use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::core::{CustomSize, SizeSpec};
use crate::utils::{ExportResult, OutputFormat};

/// Fully resolved description of one batch run.
///
/// Built once per start action by [`assemble_job`](crate::utils::assemble_job)
/// and moved into the export worker. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ExportJob {
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    formats: Vec<OutputFormat>,
    sizes: Vec<SizeSpec>,
    custom_size: Option<CustomSize>,
    quality: u8,
}

impl ExportJob {
    pub(crate) fn new(
        files: Vec<PathBuf>,
        output_dir: PathBuf,
        formats: Vec<OutputFormat>,
        sizes: Vec<SizeSpec>,
        custom_size: Option<CustomSize>,
        quality: u8,
    ) -> Self {
        Self {
            files,
            output_dir,
            formats,
            sizes,
            custom_size,
            quality,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    /// Selected predefined sizes, without the custom size.
    pub fn sizes(&self) -> &[SizeSpec] {
        &self.sizes
    }

    pub fn custom_size(&self) -> Option<&CustomSize> {
        self.custom_size.as_ref()
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Predefined sizes followed by the parsed custom size, if any.
    ///
    /// Fails when the custom width is not a positive integer.
    pub fn resolved_sizes(&self) -> ExportResult<Vec<SizeSpec>> {
        let mut sizes = self.sizes.clone();
        if let Some(custom) = &self.custom_size {
            sizes.push(custom.resolve()?);
        }
        Ok(sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ExportError;

    fn job(custom: Option<CustomSize>) -> ExportJob {
        ExportJob::new(
            vec![PathBuf::from("a.jpg")],
            PathBuf::from("/out"),
            vec![OutputFormat::Jpeg],
            vec![SizeSpec::predefined("small").unwrap(), SizeSpec::predefined("large").unwrap()],
            custom,
            90,
        )
    }

    #[test]
    fn custom_size_goes_last() {
        let sizes = job(CustomSize::from_input("640", "thumb")).resolved_sizes().unwrap();
        let suffixes: Vec<_> = sizes.iter().map(|s| s.suffix()).collect();
        assert_eq!(suffixes, ["small", "large", "thumb"]);
    }

    #[test]
    fn without_custom_size_predefined_only() {
        assert_eq!(job(None).resolved_sizes().unwrap().len(), 2);
    }

    #[test]
    fn invalid_custom_width_fails_resolution() {
        let err = job(CustomSize::from_input("abc", "thumb")).resolved_sizes().unwrap_err();
        assert_eq!(err, ExportError::InvalidCustomWidth("abc".into()));
    }
}
