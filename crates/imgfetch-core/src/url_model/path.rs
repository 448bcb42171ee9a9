//! Basename extraction from a URL path.

/// Returns the text after the last `/` of the URL's path component.
///
/// The path is cut from the input as written (after `scheme://authority`, up
/// to the first `?` or `#`), so it is not percent-encoded or normalized, and
/// `\` is an ordinary character. `;params` on the last segment are dropped.
/// Returns `None` if the URL does not parse; returns an empty string for root
/// or trailing-slash paths.
pub fn basename_from_url(url: &str) -> Option<String> {
    url::Url::parse(url).ok()?;
    let (_, after_scheme) = url.split_once("://")?;

    let path_start = after_scheme
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(after_scheme.len());
    let rest = &after_scheme[path_start..];
    let path_end = rest.find(|c| matches!(c, '?' | '#')).unwrap_or(rest.len());
    let path = &rest[..path_end];

    let segment = path.rsplit('/').next().unwrap_or("");
    let segment = segment.split(';').next().unwrap_or("");
    Some(segment.to_string())
}
