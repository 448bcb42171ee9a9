//! Transport error type and curl error classification.

use thiserror::Error;

/// Why a GET did not produce a usable response.
///
/// Every variant maps to the pipeline's network-error outcome.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connect or transfer exceeded the timeout.
    #[error("timed out: {0}")]
    Timeout(String),
    /// DNS failure, refused connection, or the connection dropped mid-transfer.
    #[error("connection failed: {0}")]
    Connection(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Any other transport failure (bad URL syntax for libcurl, TLS, redirect limit, ...).
    #[error("{0}")]
    Other(String),
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        let msg = e.to_string();
        if e.is_operation_timedout() {
            return TransportError::Timeout(msg);
        }
        if e.is_couldnt_connect()
            || e.is_couldnt_resolve_host()
            || e.is_couldnt_resolve_proxy()
            || e.is_read_error()
            || e.is_recv_error()
            || e.is_send_error()
            || e.is_got_nothing()
        {
            return TransportError::Connection(msg);
        }
        TransportError::Other(msg)
    }
}
