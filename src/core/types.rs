//! Core types for export settings.

use std::collections::HashMap;
use std::path::PathBuf;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::utils::{ExportError, ExportResult, OutputFormat};

/// Quality used when a request does not carry one.
pub const DEFAULT_QUALITY: u32 = 90;

/// Fixed size table: identifier (also the file suffix) and target width.
pub const PREDEFINED_SIZES: [(&str, u32); 5] = [
    ("small", 320),
    ("medium", 480),
    ("large", 800),
    ("extra-large", 1200),
    ("cover", 2000),
];

lazy_static! {
    static ref SIZE_LOOKUP: HashMap<&'static str, u32> = PREDEFINED_SIZES.iter().copied().collect();
}

/// One resize variant: target width and the suffix appended to the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SizeSpec {
    width: u32,
    suffix: String,
}

impl SizeSpec {
    /// Returns `None` for a zero width.
    pub fn new(width: u32, suffix: impl Into<String>) -> Option<Self> {
        (width > 0).then(|| Self {
            width,
            suffix: suffix.into(),
        })
    }

    /// Looks up an entry of [`PREDEFINED_SIZES`] by identifier.
    pub fn predefined(id: &str) -> Option<Self> {
        SIZE_LOOKUP.get(id).map(|&width| Self {
            width,
            suffix: id.to_string(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// Custom width and suffix exactly as typed.
///
/// The width stays text until the export starts; an unparsable value aborts
/// the run rather than the assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomSize {
    width: String,
    suffix: String,
}

impl CustomSize {
    /// Both fields are trimmed; returns `None` unless both are non-empty.
    pub fn from_input(width: &str, suffix: &str) -> Option<Self> {
        let (width, suffix) = (width.trim(), suffix.trim());
        if width.is_empty() || suffix.is_empty() {
            return None;
        }
        Some(Self {
            width: width.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn raw_width(&self) -> &str {
        &self.width
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Parses the width as a positive integer.
    pub fn resolve(&self) -> ExportResult<SizeSpec> {
        self.width
            .parse::<u32>()
            .ok()
            .and_then(|w| SizeSpec::new(w, self.suffix.clone()))
            .ok_or_else(|| ExportError::InvalidCustomWidth(self.width.clone()))
    }
}

/// Export settings as a front-end collects them.
///
/// Deserialized from camelCase JSON. Missing selections fall back to what
/// the picker pre-checks: every format, every predefined size, quality 90.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Source images, processed in this order
    #[serde(default)]
    pub files: Vec<PathBuf>,
    /// Destination folder
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Output format keywords (jpeg, webp, png)
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Predefined size identifiers
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
    /// Custom width text, only used together with `custom_suffix`
    #[serde(default)]
    pub custom_width: String,
    /// Custom file suffix
    #[serde(default)]
    pub custom_suffix: String,
    /// Encoder quality (1-100)
    #[serde(default = "default_quality")]
    pub quality: u32,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output_dir: None,
            formats: default_formats(),
            sizes: default_sizes(),
            custom_width: String::new(),
            custom_suffix: String::new(),
            quality: DEFAULT_QUALITY,
        }
    }
}

fn default_formats() -> Vec<String> {
    OutputFormat::ALL.iter().map(|f| f.keyword().to_string()).collect()
}

fn default_sizes() -> Vec<String> {
    PREDEFINED_SIZES.iter().map(|(id, _)| id.to_string()).collect()
}

fn default_quality() -> u32 {
    DEFAULT_QUALITY
}
