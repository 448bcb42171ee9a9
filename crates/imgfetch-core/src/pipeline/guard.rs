//! Header guards applied to a successful response, before the body is hashed.

use super::outcome::SkipReason;
use crate::transport::{HttpResponse, ResponseHeaders, TransportError};
use anyhow::{Context, Result};

const IMAGE_PREFIX: &str = "image/";

/// Non-2xx is reported the same way as a transport failure.
pub(super) fn check_status(resp: &HttpResponse) -> Result<(), TransportError> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(TransportError::Status(resp.status))
    }
}

/// Declared type must start with `image/`. A missing header counts as empty.
pub(super) fn check_content_type(headers: &ResponseHeaders) -> Result<(), SkipReason> {
    let content_type = headers.content_type.as_deref().unwrap_or("");
    if content_type.starts_with(IMAGE_PREFIX) {
        Ok(())
    } else {
        Err(SkipReason::NotAnImage {
            content_type: content_type.to_string(),
        })
    }
}

/// Declared body length; a missing header counts as 0.
///
/// A value that is not an integer is an error. Negative values are accepted
/// and clamp to 0, which always passes the size guard.
pub(super) fn declared_length(headers: &ResponseHeaders) -> Result<u64> {
    let raw = match headers.content_length.as_deref() {
        Some(v) => v.trim(),
        None => return Ok(0),
    };
    let n: i64 = raw
        .parse()
        .with_context(|| format!("invalid Content-Length header {:?}", raw))?;
    Ok(u64::try_from(n).unwrap_or(0))
}

/// Rejects when the declared length exceeds `limit`. Equal to the limit passes.
pub(super) fn check_size(declared: u64, limit: u64) -> Result<(), SkipReason> {
    if declared > limit {
        Err(SkipReason::TooLarge { declared, limit })
    } else {
        Ok(())
    }
}
