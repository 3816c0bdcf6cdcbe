//! Batch export executor.
//!
//! The whole batch runs inside one `tokio::task::spawn_blocking` call so the
//! async runtime (and whatever front-end drives it) is never blocked. Work
//! inside the batch is strictly sequential: file, then size, then format.
//! Progress flows back over an unbounded channel, one event per written file.

use std::path::Path;
use image::{DynamicImage, ImageReader};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{ExportEvent, ExportJob, ExportSummary, SavedFile};
use crate::utils::{AppError, AppResult, ExportError, ExportResult, base_name, output_path};

use super::formats::encode_image_as;
use super::resize::resize_to_width;

/// Running export: the progress stream plus the worker that feeds it.
pub struct ExportHandle {
    events: UnboundedReceiver<ExportEvent>,
    worker: JoinHandle<ExportSummary>,
}

impl ExportHandle {
    /// Next progress event, or `None` once the worker has finished and every
    /// event has been delivered.
    pub async fn next_event(&mut self) -> Option<ExportEvent> {
        self.events.recv().await
    }

    /// Waits for the worker and returns its summary.
    ///
    /// Events not yet received are discarded.
    pub async fn finish(self) -> AppResult<ExportSummary> {
        drop(self.events);
        self.worker
            .await
            .map_err(|e| AppError::worker(format!("Export worker failed: {e}")))
    }
}

/// Starts `job` on a background worker. Must be called inside a tokio runtime.
pub fn spawn_export(job: ExportJob) -> ExportHandle {
    let (tx, events) = mpsc::unbounded_channel();

    let worker = tokio::task::spawn_blocking(move || {
        info!(
            "Exporting {} file(s) to {}",
            job.files().len(),
            job.output_dir().display()
        );
        // A dropped receiver only means nobody is listening; keep writing files.
        let summary = export_blocking(&job, |event| {
            let _ = tx.send(event);
        });
        info!(
            "Export finished: {} file(s) saved, {} bytes{}",
            summary.saved,
            summary.bytes_written,
            if summary.is_complete() { "" } else { " (aborted)" }
        );
        summary
    });

    ExportHandle { events, worker }
}

/// Runs `job` on the current thread, handing every event to `sink`.
///
/// The first error is sent as a [`ExportEvent::Failed`] and ends the run;
/// files written before it stay on disk.
pub fn export_blocking(job: &ExportJob, mut sink: impl FnMut(ExportEvent)) -> ExportSummary {
    let mut summary = ExportSummary::default();

    if let Err(err) = run_job(job, &mut sink, &mut summary) {
        warn!("Export aborted: {}", err);
        summary.error = Some(err.clone());
        sink(ExportEvent::Failed(err));
    }

    summary
}

fn run_job(
    job: &ExportJob,
    sink: &mut impl FnMut(ExportEvent),
    summary: &mut ExportSummary,
) -> ExportResult<()> {
    let sizes = job.resolved_sizes()?;
    let total = job.files().len() * sizes.len() * job.formats().len();
    let mut completed = 0;

    for source in job.files() {
        let base = base_name(source);
        let image = open_source(source)?;

        for size in &sizes {
            let resized = resize_to_width(&image, size, source)?;

            for &format in job.formats() {
                let path = output_path(job.output_dir(), &base, size, format);
                let bytes = encode_image_as(&resized, format, job.quality())
                    .map_err(|reason| ExportError::encode(&path, reason))?;
                std::fs::write(&path, &bytes).map_err(|e| ExportError::encode(&path, e))?;

                completed += 1;
                let saved = SavedFile {
                    file_name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    path,
                    size: bytes.len() as u64,
                    completed,
                    total,
                };
                log_progress(&saved);
                summary.record(&saved);
                sink(ExportEvent::Saved(saved));
            }
        }
    }

    Ok(())
}

/// Decodes a source image, sniffing the content when the extension lies.
fn open_source(path: &Path) -> ExportResult<DynamicImage> {
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ExportError::decode(path, e))?
        .decode()
        .map_err(|e| ExportError::decode(path, e))?;

    debug!(
        "Loaded '{}': {}×{}",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

fn log_progress(saved: &SavedFile) {
    let payload = serde_json::json!({
        "completedTasks": saved.completed,
        "totalTasks": saved.total,
        "progressPercentage": saved.percentage(),
        "status": if saved.completed == saved.total { "complete" } else { "processing" },
        "fileName": saved.file_name,
        "size": saved.size,
    });
    debug!("export progress {}", payload);
}
