//! Batch runner: feeds a URL list through one [`FetchPipeline`].
//!
//! With `jobs == 1` URLs are fetched strictly in input order and each outcome
//! is reported as soon as it is known. With `jobs > 1` a fixed set of worker
//! threads shares the pipeline; outcomes are reported in input order once the
//! whole batch has finished.

use crate::pipeline::{FailReason, FetchOutcome, FetchPipeline};
use crate::transport::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Split a free-form line on commas and trim each piece.
///
/// Empty pieces are kept; the pipeline reports them as invalid URLs.
pub fn parse_url_list(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved(_) => self.saved += 1,
            FetchOutcome::Skipped(_) => self.skipped += 1,
            FetchOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}

/// Runs every URL through `pipeline`, calling `on_outcome(index, url, outcome)`
/// once per URL in input order.
pub fn run_batch<T, F>(
    pipeline: &FetchPipeline<T>,
    urls: &[String],
    jobs: usize,
    on_outcome: F,
) -> BatchReport
where
    T: Transport + Sync,
    F: FnMut(usize, &str, &FetchOutcome),
{
    if jobs <= 1 || urls.len() <= 1 {
        run_sequential(pipeline, urls, on_outcome)
    } else {
        run_concurrent(pipeline, urls, jobs, on_outcome)
    }
}

/// One URL at a time, in order.
pub fn run_sequential<T, F>(pipeline: &FetchPipeline<T>, urls: &[String], mut on_outcome: F) -> BatchReport
where
    T: Transport,
    F: FnMut(usize, &str, &FetchOutcome),
{
    let mut report = BatchReport::default();
    for (i, url) in urls.iter().enumerate() {
        tracing::debug!(index = i, url = %url, "fetching");
        let outcome = pipeline.fetch(url);
        report.record(&outcome);
        on_outcome(i, url, &outcome);
    }
    tracing::info!(
        saved = report.saved,
        skipped = report.skipped,
        failed = report.failed,
        "batch finished"
    );
    report
}

/// Up to `jobs` worker threads pull the next URL index from a shared counter.
pub fn run_concurrent<T, F>(
    pipeline: &FetchPipeline<T>,
    urls: &[String],
    jobs: usize,
    mut on_outcome: F,
) -> BatchReport
where
    T: Transport + Sync,
    F: FnMut(usize, &str, &FetchOutcome),
{
    let workers = jobs.clamp(1, urls.len().max(1));
    let next = AtomicUsize::new(0);
    tracing::debug!(workers, urls = urls.len(), "starting concurrent batch");

    let mut slots: Vec<Option<FetchOutcome>> = std::thread::scope(|s| {
        let next = &next;
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(url) = urls.get(i) else { break };
                        done.push((i, pipeline.fetch(url)));
                    }
                    done
                })
            })
            .collect();

        let mut slots: Vec<Option<FetchOutcome>> = (0..urls.len()).map(|_| None).collect();
        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (i, outcome) in done {
                        slots[i] = Some(outcome);
                    }
                }
                Err(_) => tracing::error!("fetch worker panicked"),
            }
        }
        slots
    });

    let mut report = BatchReport::default();
    for (i, url) in urls.iter().enumerate() {
        let outcome = slots[i].take().unwrap_or_else(|| {
            FetchOutcome::Failed(FailReason::Unexpected(anyhow::anyhow!(
                "fetch worker stopped before reporting"
            )))
        });
        report.record(&outcome);
        on_outcome(i, url, &outcome);
    }
    tracing::info!(
        saved = report.saved,
        skipped = report.skipped,
        failed = report.failed,
        "batch finished"
    );
    report
}
