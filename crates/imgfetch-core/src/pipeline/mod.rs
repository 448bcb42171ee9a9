//! Fetch pipeline: scheme check, GET, header guards, duplicate guard, save.
//!
//! Each call handles one URL and always ends in a [`FetchOutcome`]; no error
//! escapes and no state other than the hash registry carries over to the next URL.

mod guard;
mod outcome;

pub use outcome::{FailReason, FetchOutcome, SavedImage, SkipReason};

use crate::checksum::sha256_hex;
use crate::config::FetchSettings;
use crate::registry::HashRegistry;
use crate::storage;
use crate::transport::{Transport, TransportError};
use crate::url_model;
use std::sync::{Mutex, MutexGuard};

/// Why `run_guards` stopped early.
enum Halt {
    Skip(SkipReason),
    Fail(FailReason),
}

impl From<SkipReason> for Halt {
    fn from(r: SkipReason) -> Self {
        Halt::Skip(r)
    }
}

impl From<TransportError> for Halt {
    fn from(e: TransportError) -> Self {
        Halt::Fail(FailReason::Network(e))
    }
}

impl From<anyhow::Error> for Halt {
    fn from(e: anyhow::Error) -> Self {
        Halt::Fail(FailReason::Unexpected(e))
    }
}

/// One batch worth of fetching: a transport, the settings, and the hash registry.
///
/// `fetch` takes `&self`, so a pipeline can be shared across worker threads
/// when `T: Sync`; the registry check-and-insert is done under its lock.
pub struct FetchPipeline<T> {
    transport: T,
    settings: FetchSettings,
    registry: Mutex<HashRegistry>,
}

impl<T: Transport> FetchPipeline<T> {
    /// New pipeline with an empty registry.
    pub fn new(transport: T, settings: FetchSettings) -> Self {
        Self {
            transport,
            settings,
            registry: Mutex::new(HashRegistry::new()),
        }
    }

    /// Number of distinct bodies accepted so far.
    pub fn registry_len(&self) -> usize {
        self.registry().len()
    }

    /// Runs every guard for `url` and saves the body if all pass.
    pub fn fetch(&self, url: &str) -> FetchOutcome {
        let outcome = match self.run_guards(url) {
            Ok(saved) => FetchOutcome::Saved(saved),
            Err(Halt::Skip(reason)) => FetchOutcome::Skipped(reason),
            Err(Halt::Fail(reason)) => FetchOutcome::Failed(reason),
        };

        match &outcome {
            FetchOutcome::Saved(s) => tracing::info!(
                url,
                path = %s.path.display(),
                bytes = s.bytes,
                hash = %s.hash,
                "saved"
            ),
            FetchOutcome::Skipped(r) => tracing::info!(url, reason = r.code(), "skipped: {}", r),
            FetchOutcome::Failed(r) => tracing::warn!(url, reason = r.code(), "failed: {}", r),
        }
        outcome
    }

    fn run_guards(&self, url: &str) -> Result<SavedImage, Halt> {
        if !url_model::has_allowed_scheme(url) {
            return Err(SkipReason::InvalidUrl.into());
        }

        let resp = self.transport.get(url, self.settings.timeout)?;
        guard::check_status(&resp)?;
        guard::check_content_type(&resp.headers)?;
        let declared = guard::declared_length(&resp.headers)?;
        guard::check_size(declared, self.settings.max_content_length)?;

        let hash = sha256_hex(&resp.body);
        if !self.registry().insert_if_new(&hash) {
            return Err(SkipReason::Duplicate { hash }.into());
        }

        let filename = url_model::derive_filename(url);
        let path = storage::save_image(&self.settings.output_dir, &filename, &resp.body)?;

        Ok(SavedImage {
            filename,
            path,
            bytes: resp.body.len(),
            hash,
        })
    }

    fn registry(&self) -> MutexGuard<'_, HashRegistry> {
        // A plain set cannot be left half-updated, so poisoning is ignored.
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
