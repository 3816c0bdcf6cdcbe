use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use crate::utils::ValidationError;

/// Extensions the source picker offers.
pub const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Output encodings an export can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    WebP,
    Png,
}

impl OutputFormat {
    /// All formats in the order the picker lists them
    pub const ALL: [OutputFormat; 3] = [Self::Jpeg, Self::WebP, Self::Png];

    /// Lowercase keyword, used verbatim as the output file extension
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::WebP),
            "png" => Ok(Self::Png),
            _ => Err(ValidationError::UnknownFormat(s.to_string())),
        }
    }
}

/// Check whether a source path carries one of the picker's extensions
pub fn is_supported_source(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
