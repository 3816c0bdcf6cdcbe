//! Resize-and-encode pipeline built on the `image` and `webp` crates.
//!
//! # Architecture
//!
//! - [`executor`]: Drives the batch on one background worker and streams progress.
//! - [`resize`]: Proportional width-driven resize with Lanczos3 resampling.
//! - [`formats`]: Maps the export quality onto the JPEG, WebP and PNG encoders.

pub mod executor;
pub mod formats;
pub mod resize;

pub use executor::{ExportHandle, export_blocking, spawn_export};
pub use resize::scaled_height;
