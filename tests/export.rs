//! Integration tests for the export commands.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;
use web_image_export_lib::{
    AppError, ExportEvent, ExportRequest, ValidationError, run_export, start_export,
};

mod helpers {
    //! Test helpers for generating source images.

    use super::*;

    /// Writes a patterned RGB image; the format follows the extension.
    pub fn rgb_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_fn(width, height, |x, y| {
            let v = (x * 31) ^ (y * 17);
            Rgb([v as u8, (x / 3) as u8, (y / 2) as u8])
        })
        .save(&path)
        .unwrap();
        path
    }

    /// Writes a translucent RGBA PNG.
    pub fn rgba_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 200, (x + y) as u8]))
            .save(&path)
            .unwrap();
        path
    }

    pub fn request(files: Vec<PathBuf>, out: &TempDir) -> ExportRequest {
        ExportRequest {
            files,
            output_dir: Some(out.path().to_path_buf()),
            ..ExportRequest::default()
        }
    }

    pub fn listing(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

use helpers::*;

#[tokio::test]
async fn saves_every_file_size_format_combination() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let files = vec![
        rgb_source(src.path(), "beach.jpg", 600, 400),
        rgb_source(src.path(), "forest.png", 300, 600),
    ];
    let mut req = request(files, &out);
    req.sizes = vec!["small".into(), "large".into()];
    req.custom_width = "100".into();
    req.custom_suffix = "tiny".into();

    let mut lines = Vec::new();
    let summary = run_export(&req, |e| lines.push(e.to_string())).await.unwrap();

    // 2 files x 3 sizes x 3 formats
    assert_eq!(summary.saved, 18);
    assert_eq!(lines.len(), 18);
    assert!(summary.is_complete());

    let mut expected = Vec::new();
    for base in ["beach", "forest"] {
        for suffix in ["small", "large", "tiny"] {
            for ext in ["jpeg", "webp", "png"] {
                expected.push(format!("Saved: {base}-{suffix}.{ext}"));
            }
        }
    }
    assert_eq!(lines, expected);

    let written = listing(out.path());
    assert_eq!(written.len(), 18);
    assert!(written.contains("forest-tiny.webp"));
}

#[tokio::test]
async fn outputs_keep_aspect_ratio_with_truncation() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let mut req = request(vec![rgb_source(src.path(), "wide.png", 1000, 500)], &out);
    req.sizes = vec!["small".into(), "medium".into(), "cover".into()];

    let summary = run_export(&req, |_| {}).await.unwrap();
    assert_eq!(summary.saved, 9);

    let dims = |name: &str| image::image_dimensions(out.path().join(name)).unwrap();
    assert_eq!(dims("wide-small.png"), (320, 160));
    assert_eq!(dims("wide-medium.jpeg"), (480, 240));
    assert_eq!(dims("wide-cover.webp"), (2000, 1000));
}

#[tokio::test]
async fn invalid_custom_width_aborts_without_output() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let mut req = request(vec![rgb_source(src.path(), "a.png", 400, 300)], &out);
    req.custom_width = "abc".into();
    req.custom_suffix = "thumb".into();

    let mut events = Vec::new();
    let summary = run_export(&req, |e| events.push(e.clone())).await.unwrap();

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ExportEvent::Failed(_)));
    assert!(events[0].to_string().contains("abc"));
    assert_eq!(summary.saved, 0);
    assert!(listing(out.path()).is_empty());
}

#[tokio::test]
async fn missing_output_dir_never_starts() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let mut req = request(vec![rgb_source(src.path(), "a.png", 400, 300)], &out);
    req.output_dir = Some(out.path().join("not-created"));

    let result = start_export(&req).await;
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::OutputDirNotFound(_)))
    ));
}

#[tokio::test]
async fn rerun_produces_same_names() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let req = request(vec![rgb_source(src.path(), "a.png", 640, 480)], &out);

    let mut first = Vec::new();
    run_export(&req, |e| first.push(e.to_string())).await.unwrap();
    let first_listing = listing(out.path());

    let mut second = Vec::new();
    run_export(&req, |e| second.push(e.to_string())).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first_listing, listing(out.path()));
    assert_eq!(first.len(), 15);
}

#[tokio::test]
async fn quality_is_honored_for_lossy_formats() {
    let src = tempfile::tempdir().unwrap();
    let source = rgb_source(src.path(), "a.png", 900, 600);

    let mut sizes = Vec::new();
    for quality in [100, 10] {
        let out = tempfile::tempdir().unwrap();
        let mut req = request(vec![source.clone()], &out);
        req.formats = vec!["jpeg".into()];
        req.sizes = vec!["medium".into()];
        req.quality = quality;
        run_export(&req, |_| {}).await.unwrap();
        sizes.push(fs::metadata(out.path().join("a-medium.jpeg")).unwrap().len());
    }

    assert_ne!(sizes[0], sizes[1]);
    assert!(sizes[0] > sizes[1]);
}

#[tokio::test]
async fn overwrites_existing_outputs() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("a-small.png");
    fs::write(&target, b"stale").unwrap();

    let mut req = request(vec![rgb_source(src.path(), "a.png", 640, 480)], &out);
    req.formats = vec!["png".into()];
    req.sizes = vec!["small".into()];
    run_export(&req, |_| {}).await.unwrap();

    assert_eq!(image::image_dimensions(&target).unwrap(), (320, 240));
}

#[tokio::test]
async fn transparent_sources_export_to_all_formats() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let mut req = request(vec![rgba_source(src.path(), "logo.png", 200, 100)], &out);
    req.sizes = vec!["small".into()];

    let summary = run_export(&req, |_| {}).await.unwrap();
    assert_eq!(summary.saved, 3);

    let png = image::open(out.path().join("logo-small.png")).unwrap();
    assert!(png.color().has_alpha());
    let jpeg = image::open(out.path().join("logo-small.jpeg")).unwrap();
    assert!(!jpeg.color().has_alpha());
}
