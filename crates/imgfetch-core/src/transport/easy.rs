//! libcurl-backed transport (easy interface, one handle per request).

use super::{parse, HttpResponse, Transport, TransportError};
use std::str;
use std::time::Duration;

/// Low-speed floor in bytes/sec; a transfer below it for `timeout` is aborted.
const STALL_BYTES_PER_SEC: u32 = 1;

/// Blocking GET via libcurl. Follows redirects.
///
/// `timeout` bounds connection setup and any stretch of the transfer without
/// progress, not the total transfer time.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    user_agent: Option<String>,
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(timeout)?;
        easy.low_speed_limit(STALL_BYTES_PER_SEC)?;
        easy.low_speed_time(timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET finished");

        Ok(HttpResponse {
            status,
            headers: parse::parse_headers(&header_lines),
            body,
        })
    }
}
