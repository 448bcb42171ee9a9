//! Terminal result of one pipeline run.

use crate::transport::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// What happened to one URL. Exactly one is produced per [`super::FetchPipeline::fetch`] call.
#[derive(Debug)]
pub enum FetchOutcome {
    Saved(SavedImage),
    Skipped(SkipReason),
    Failed(FailReason),
}

impl FetchOutcome {
    /// Short stable code for logs: `saved`, or the reason code.
    pub fn code(&self) -> &'static str {
        match self {
            FetchOutcome::Saved(_) => "saved",
            FetchOutcome::Skipped(r) => r.code(),
            FetchOutcome::Failed(r) => r.code(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved(_))
    }
}

/// An image that passed every guard and was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub filename: String,
    pub path: PathBuf,
    /// Body size actually received.
    pub bytes: usize,
    /// Hex SHA-256 of the body, as recorded in the registry.
    pub hash: String,
}

/// A guard rejected the URL. Nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("Invalid URL format.")]
    InvalidUrl,
    #[error("Content is not an image ({content_type}).")]
    NotAnImage { content_type: String },
    #[error("File is too large ({declared} bytes).")]
    TooLarge { declared: u64, limit: u64 },
    #[error("This image is a duplicate.")]
    Duplicate { hash: String },
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::InvalidUrl => "invalid-url",
            SkipReason::NotAnImage { .. } => "non-image-content-type",
            SkipReason::TooLarge { .. } => "oversized",
            SkipReason::Duplicate { .. } => "duplicate",
        }
    }
}

/// The fetch or the write failed.
#[derive(Debug, Error)]
pub enum FailReason {
    /// Transport failure or non-2xx status.
    #[error("{0}")]
    Network(#[from] TransportError),
    /// Anything the guards do not anticipate (malformed header, disk error).
    #[error("{0:#}")]
    Unexpected(anyhow::Error),
}

impl FailReason {
    pub fn code(&self) -> &'static str {
        match self {
            FailReason::Network(_) => "network-error",
            FailReason::Unexpected(_) => "unexpected-error",
        }
    }
}
