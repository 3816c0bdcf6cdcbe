//! Export command handlers.

use tracing::debug;
use crate::core::{ExportEvent, ExportRequest, ExportSummary};
use crate::processing::{ExportHandle, spawn_export};
use crate::utils::{AppResult, assemble_job};

/// Validates `request` and starts the export on a background worker.
///
/// Nothing is spawned when validation fails.
///
/// # Arguments
/// * `request` - Settings collected by the front-end
///
/// # Returns
/// A handle yielding progress events and, once finished, the run summary.
pub async fn start_export(request: &ExportRequest) -> AppResult<ExportHandle> {
    debug!(
        "Received start_export for {} file(s), formats {:?}, sizes {:?}",
        request.files.len(),
        request.formats,
        request.sizes
    );

    let job = assemble_job(request).await?;
    Ok(spawn_export(job))
}

/// Runs a whole export, handing each event to `on_event` as it arrives.
///
/// # Returns
/// The run summary. A processing failure does not make this an `Err`; it
/// is reported through the `Failed` event and [`ExportSummary::error`].
pub async fn run_export(
    request: &ExportRequest,
    mut on_event: impl FnMut(&ExportEvent),
) -> AppResult<ExportSummary> {
    let mut handle = start_export(request).await?;

    while let Some(event) = handle.next_event().await {
        on_event(&event);
    }

    handle.finish().await
}
