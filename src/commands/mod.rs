//! Command handlers for front-ends.
//!
//! - [`start_export`]: Validate a request and start the background export
//! - [`run_export`]: Start an export and drive it to the end

mod export;

pub use export::*;
