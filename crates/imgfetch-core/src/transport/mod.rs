//! HTTP transport: the single blocking GET the fetch pipeline performs per URL.
//!
//! [`Transport`] is the seam the pipeline depends on; [`CurlTransport`] is the
//! libcurl-backed implementation used by the CLI.

mod easy;
mod error;
mod parse;

pub use easy::CurlTransport;
pub use error::TransportError;

use std::time::Duration;

/// Response headers the guards look at. Values are kept raw; the pipeline interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    /// `Content-Type` value, if present.
    pub content_type: Option<String>,
    /// `Content-Length` value, if present. Not validated here.
    pub content_length: Option<String>,
}

/// A completed GET: final status, headers of the final response, and the full body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking "GET url with timeout" capability.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        (**self).get(url, timeout)
    }
}

#[cfg(test)]
pub(crate) mod scripted;
