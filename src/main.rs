// Command-line front-end for the exporter.
//
// Reads an export request (camelCase JSON) from the file named on the
// command line, or from stdin when no file or "-" is given, runs it on the
// background worker and prints one line per progress event.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use web_image_export_lib::utils::is_supported_source;
use web_image_export_lib::{ExportRequest, run_export};

const USAGE: &str = "\
Usage: web-image-export [REQUEST.json | -]

Reads an export request from the given file, or stdin when omitted:

  {
    \"files\": [\"photos/beach.jpg\"],
    \"outputDir\": \"out\",
    \"formats\": [\"jpeg\", \"webp\", \"png\"],
    \"sizes\": [\"small\", \"medium\", \"large\", \"extra-large\", \"cover\"],
    \"customWidth\": \"640\",
    \"customSuffix\": \"thumb\",
    \"quality\": 90
  }

Only files and outputDir are required. Set RUST_LOG to change log verbosity.";

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr) // stdout carries the progress lines
        .compact();

    subscriber.init();

    let arg = std::env::args().nth(1);
    if matches!(arg.as_deref(), Some("-h" | "--help")) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let request = match load_request(arg.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!();
            eprintln!("For more information, try '--help'");
            return ExitCode::from(2);
        }
    };

    for file in request.files.iter().filter(|f| !is_supported_source(f)) {
        warn!("{} is not a jpg/jpeg/png file, trying anyway", file.display());
    }

    info!("=== Export Starting ===");

    match run_export(&request, |event| println!("{event}")).await {
        Ok(summary) if summary.is_complete() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            println!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_request(source: Option<&str>) -> anyhow::Result<ExportRequest> {
    let text = match source {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read request from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read request file '{path}'"))?,
    };

    serde_json::from_str(&text).context("request is not a valid export request")
}
