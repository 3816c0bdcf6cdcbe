use crate::core::{CustomSize, ExportJob, ExportRequest, SizeSpec};
use crate::utils::{OutputFormat, ValidationError, ensure_writable_dir};

/// Turns a front-end request into an [`ExportJob`].
///
/// Refuses with the first unmet condition: no files, a missing or unusable
/// output folder, no formats, no sizes, a custom suffix holding a path
/// separator, or quality outside 1..=100. The
/// custom width is carried as text and only parsed when the export runs.
pub async fn assemble_job(request: &ExportRequest) -> Result<ExportJob, ValidationError> {
    if request.files.is_empty() {
        return Err(ValidationError::NoSourceFiles);
    }

    let output_dir = request
        .output_dir
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ValidationError::MissingOutputDir)?;
    ensure_writable_dir(output_dir).await?;

    let formats = parse_formats(&request.formats)?;
    let sizes = parse_sizes(&request.sizes)?;

    let custom_size = CustomSize::from_input(&request.custom_width, &request.custom_suffix);
    if let Some(custom) = &custom_size {
        if custom.suffix().chars().any(|c| c == '/' || c == '\\') {
            return Err(ValidationError::InvalidSuffix(custom.suffix().to_string()));
        }
    }
    if sizes.is_empty() && custom_size.is_none() {
        return Err(ValidationError::NoSizes);
    }

    let quality = validate_quality(request.quality)?;

    Ok(ExportJob::new(
        request.files.clone(),
        output_dir.clone(),
        formats,
        sizes,
        custom_size,
        quality,
    ))
}

/// Parses format keywords, keeping first occurrence order
fn parse_formats(keywords: &[String]) -> Result<Vec<OutputFormat>, ValidationError> {
    if keywords.is_empty() {
        return Err(ValidationError::NoFormats);
    }

    let mut formats = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let format: OutputFormat = keyword.parse()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }
    Ok(formats)
}

/// Maps predefined size identifiers to specs, keeping first occurrence order
fn parse_sizes(ids: &[String]) -> Result<Vec<SizeSpec>, ValidationError> {
    let mut sizes: Vec<SizeSpec> = Vec::with_capacity(ids.len());
    for id in ids {
        let size = SizeSpec::predefined(id.trim())
            .ok_or_else(|| ValidationError::UnknownSize(id.clone()))?;
        if !sizes.contains(&size) {
            sizes.push(size);
        }
    }
    Ok(sizes)
}

fn validate_quality(quality: u32) -> Result<u8, ValidationError> {
    match quality {
        1..=100 => Ok(quality as u8),
        _ => Err(ValidationError::InvalidQuality(quality)),
    }
}
