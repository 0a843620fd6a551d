mod exports;
mod progress;
mod styling;
mod summary;
mod tables;

use std::path::Path;

pub use exports::{export_json, write_feature_file};
pub use progress::GenerationProgress;
use styling::{failed, muted, pending, succeeded, tool_name};
pub use summary::render_report;

/// Prints the `bddgen` banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        tool_name("🥒 bddgen"),
        muted(env!("CARGO_PKG_VERSION")),
        muted("BDD Scenario Generator")
    );
}

/// Generic notice for a failed backend call; details go to the error chain.
pub fn print_backend_failure(backend: &str) {
    eprintln!(
        "{}",
        failed(format!(
            "Could not generate scenarios: the {backend} request failed."
        ))
    );
}

pub fn print_feature_file_saved(path: &Path, happy: usize) {
    if happy == 0 {
        eprintln!(
            "{} {}",
            pending("Feature file has no scenarios:"),
            muted(path.display())
        );
    } else {
        eprintln!(
            "{} {}",
            succeeded(format!("Saved {happy} happy-path scenario(s) to")),
            path.display()
        );
    }
}
