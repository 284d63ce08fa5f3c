use std::fmt::Write as _;
use std::path::Path;

use storage::repository::{Storage, StorageError};
use storage::{LoadReport, ValidationPolicy};

/// Bank used when no `--bank` is given.
pub const SAMPLE_BANK: &str = include_str!("../assets/sample_bank.json");

/// Load `path`, or the bundled sample bank when it is `None`.
///
/// # Errors
///
/// Propagates I/O, parse and (strict) validation failures from `storage`.
pub fn load(
    path: Option<&Path>,
    policy: ValidationPolicy,
) -> Result<(Storage, LoadReport), StorageError> {
    match path {
        Some(path) => Storage::json(path, policy),
        None => {
            tracing::info!("no bank given, using the bundled sample");
            Storage::json_str(SAMPLE_BANK, policy)
        }
    }
}

/// Human-readable summary printed by `quiz check`.
#[must_use]
pub fn render_report(source: &str, report: &LoadReport) -> String {
    let mut out = format!(
        "{source}: {} sets, {} categories, {} questions",
        report.sets, report.categories, report.questions
    );
    if report.is_clean() {
        out.push_str("\nall questions valid");
        return out;
    }
    let _ = write!(out, "\n{} invalid questions dropped:", report.dropped.len());
    for dropped in &report.dropped {
        let _ = write!(
            out,
            "\n  {} / {} #{}: {}",
            dropped.set,
            dropped.category,
            dropped.index + 1,
            dropped.reason
        );
    }
    out
}
