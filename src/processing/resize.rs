//! Width-driven proportional resize.

use std::path::Path;
use image::{DynamicImage, Limits};
use image::imageops::FilterType;
use crate::core::SizeSpec;
use crate::utils::{ExportError, ExportResult};

/// Height that keeps the aspect ratio at `target_width`.
///
/// Truncates toward zero: 1000x500 at width 320 gives 160, 333x100 at width
/// 100 gives 30.
pub fn scaled_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    if source_width == 0 {
        return 0;
    }
    let scale = target_width as f64 / source_width as f64;
    (source_height as f64 * scale) as u32
}

/// Largest resized buffer allowed, matching the decoder's default allocation cap.
const FALLBACK_MAX_ALLOC: u64 = 512 * 1024 * 1024;

fn max_alloc() -> u64 {
    Limits::default().max_alloc.unwrap_or(FALLBACK_MAX_ALLOC)
}

/// Bytes needed for a `width` x `height` buffer of `image`'s pixel type.
pub fn buffer_bytes(image: &DynamicImage, width: u32, height: u32) -> u64 {
    (width as u64)
        .saturating_mul(height as u64)
        .saturating_mul(image.color().bytes_per_pixel() as u64)
}

/// Resizes `image` to the width in `size` with Lanczos3 resampling.
///
/// Upscales when the target is wider than the source. Fails when the
/// proportional height truncates to zero or the result would not fit the
/// allocation cap.
pub fn resize_to_width(image: &DynamicImage, size: &SizeSpec, source: &Path) -> ExportResult<DynamicImage> {
    let (source_width, source_height) = (image.width(), image.height());
    let height = scaled_height(source_width, source_height, size.width());

    if height == 0 {
        return Err(ExportError::EmptyResize {
            path: source.to_path_buf(),
            width: size.width(),
            source_width,
            source_height,
        });
    }

    let bytes = buffer_bytes(image, size.width(), height);
    let limit = max_alloc();
    if bytes > limit {
        return Err(ExportError::TooLarge {
            path: source.to_path_buf(),
            width: size.width(),
            height,
            bytes,
            limit,
        });
    }

    Ok(image.resize_exact(size.width(), height, FilterType::Lanczos3))
}
