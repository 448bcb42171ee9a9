//! Console rendering of fetch outcomes.

use imgfetch_core::batch::BatchReport;
use imgfetch_core::pipeline::{FailReason, FetchOutcome, SkipReason};

pub(super) const SUCCESS_MARK: &str = "✓";
pub(super) const FAILURE_MARK: &str = "✗";

const CLOSING_LINE: &str = "Connection strengthened. Community enriched.";

pub(super) fn separator() -> String {
    "-".repeat(30)
}

/// Status lines printed for one URL.
pub(super) fn outcome_lines(url: &str, outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Saved(s) => vec![
            format!("{} Successfully fetched: {}", SUCCESS_MARK, s.filename),
            format!("{} Image saved to {}", SUCCESS_MARK, s.path.display()),
        ],
        // A duplicate is not a problem, so it carries the success mark.
        FetchOutcome::Skipped(r @ SkipReason::Duplicate { .. }) => {
            vec![format!("{} Skipping {}: {}", SUCCESS_MARK, url, r)]
        }
        FetchOutcome::Skipped(r) => vec![format!("{} Skipping {}: {}", FAILURE_MARK, url, r)],
        FetchOutcome::Failed(r @ FailReason::Network(_)) => {
            vec![format!("{} Connection error for {}: {}", FAILURE_MARK, url, r)]
        }
        FetchOutcome::Failed(r @ FailReason::Unexpected(_)) => vec![format!(
            "{} An unexpected error occurred for {}: {}",
            FAILURE_MARK, url, r
        )],
    }
}

pub(super) fn summary_line(report: &BatchReport) -> String {
    format!(
        "Processed {} URL(s): {} saved, {} skipped, {} failed.",
        report.total(),
        report.saved,
        report.skipped,
        report.failed
    )
}

/// Lines printed once the batch is done: a blank line, the summary, and the sign-off.
pub(super) fn trailer_lines(report: &BatchReport) -> Vec<String> {
    vec![String::new(), summary_line(report), CLOSING_LINE.to_string()]
}
