//! Maps the export quality onto each output encoder.
//!
//! Encoders write into memory; the caller persists the bytes so a failed
//! encode never leaves a truncated file behind.

use std::borrow::Cow;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::DynamicImage;
use crate::utils::OutputFormat;

type Result<T> = std::result::Result<T, String>;

/// Quality at which WebP switches to lossless mode.
const LOSSLESS_QUALITY: u8 = 100;

/// Encodes `image` as baseline JPEG.
///
/// JPEG has no alpha channel, so the image is flattened to RGB8 first.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| format!("JPEG encode failed: {e}"))?;
    Ok(buf)
}

/// Encodes `image` as PNG with maximum compression.
///
/// PNG is lossless; `quality` does not apply.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let image: Cow<'_, DynamicImage> = match image {
        // 32-bit float buffers have no PNG representation
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        other => Cow::Borrowed(other),
    };

    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| format!("PNG encode failed: {e}"))?;
    Ok(buf)
}

/// Encodes `image` as WebP.
///
/// When quality == 100: lossless mode.
/// Otherwise: lossy at the given quality. Alpha is kept when present.
pub fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    let lossless = quality >= LOSSLESS_QUALITY;

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
        encoder.encode_simple(lossless, quality as f32).map(|m| m.to_vec())
    } else {
        let rgb = image.to_rgb8();
        let encoder = webp::Encoder::from_rgb(rgb.as_raw(), width, height);
        encoder.encode_simple(lossless, quality as f32).map(|m| m.to_vec())
    };

    encoded.map_err(|e| format!("WebP encode failed: {e:?}"))
}

/// Dispatches to the encoder for `format`.
pub fn encode_image_as(image: &DynamicImage, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(image, quality),
        OutputFormat::WebP => encode_webp(image, quality),
        OutputFormat::Png => encode_png(image),
    }
}
