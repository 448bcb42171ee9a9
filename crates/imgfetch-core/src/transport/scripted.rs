//! In-memory transport for pipeline and batch tests.

use super::{HttpResponse, ResponseHeaders, Transport, TransportError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Response(HttpResponse),
    Timeout,
    Refused,
}

/// Returns canned replies per URL and records every requested URL.
/// Unknown URLs get a connection failure.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    /// 200 with the given content type, an accurate Content-Length, and `body`.
    pub(crate) fn image(self, url: &str, content_type: &str, body: &[u8]) -> Self {
        self.reply(
            url,
            Reply::Response(response(
                200,
                Some(content_type),
                Some(&body.len().to_string()),
                body,
            )),
        )
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub(crate) fn response(
    status: u32,
    content_type: Option<&str>,
    content_length: Option<&str>,
    body: &[u8],
) -> HttpResponse {
    HttpResponse {
        status,
        headers: ResponseHeaders {
            content_type: content_type.map(str::to_string),
            content_length: content_length.map(str::to_string),
        },
        body: body.to_vec(),
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Response(r)) => Ok(r.clone()),
            Some(Reply::Timeout) => Err(TransportError::Timeout(
                "Operation timed out after 10000 milliseconds".into(),
            )),
            Some(Reply::Refused) | None => {
                Err(TransportError::Connection("Couldn't connect to server".into()))
            }
        }
    }
}
