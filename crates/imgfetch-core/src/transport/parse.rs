//! Parse HTTP response header lines into ResponseHeaders.

use super::ResponseHeaders;

/// Parse collected header lines into ResponseHeaders.
///
/// libcurl hands over the headers of every response in a redirect chain; a
/// status line starts a new block so only the final response's headers survive.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let mut headers = ResponseHeaders::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers = ResponseHeaders::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                headers.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                headers.content_length = Some(value.to_string());
            }
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_type_and_length() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
            "Content-Length: 12345",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("image/png"));
        assert_eq!(r.content_length.as_deref(), Some("12345"));
    }

    #[test]
    fn parse_headers_case_insensitive_names() {
        let r = parse_headers(&lines(&["content-type: image/gif", "CONTENT-LENGTH:7"]));
        assert_eq!(r.content_type.as_deref(), Some("image/gif"));
        assert_eq!(r.content_length.as_deref(), Some("7"));
    }

    #[test]
    fn parse_headers_missing() {
        let r = parse_headers(&lines(&["HTTP/1.1 200 OK", "Server: test"]));
        assert_eq!(r, ResponseHeaders::default());
    }

    #[test]
    fn parse_headers_keeps_final_response_after_redirect() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 301 Moved Permanently",
            "Location: /real.png",
            "Content-Type: text/html",
            "Content-Length: 99",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("image/png"));
        assert!(r.content_length.is_none());
    }
}
