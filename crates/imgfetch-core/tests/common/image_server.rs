//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses keyed by request path. Each connection handles one
//! request and is closed after the response.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    /// When true, send `Content-Length` matching the body; otherwise the body ends at close.
    pub send_length: bool,
    pub body: Vec<u8>,
    /// Hold the connection open without answering (for timeout tests).
    pub hang: bool,
}

impl Route {
    pub fn image(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            content_type: Some(content_type),
            send_length: true,
            body,
            hang: false,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            send_length: true,
            body: b"error".to_vec(),
            hang: false,
        }
    }

    pub fn hang() -> Self {
        Self {
            hang: true,
            ..Self::status("200 OK")
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
pub fn start(routes: Vec<(&'static str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL on which nothing listens.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<&'static str, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");

    let route = match routes.get(path) {
        Some(r) => r.clone(),
        None => Route::status("404 Not Found"),
    };
    if route.hang {
        thread::sleep(Duration::from_secs(5));
        return;
    }

    let mut head = format!("HTTP/1.1 {}\r\nConnection: close\r\n", route.status);
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if route.send_length {
        head.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
