//! URL modeling and filename derivation.
//!
//! Derives a safe local filename from the last path segment of a URL.

mod path;
mod sanitize;

pub use path::basename_from_url;
pub use sanitize::sanitize_filename;

/// Filename used when the URL path yields nothing usable.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// URL schemes the fetch pipeline accepts.
const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// True if `url` starts with `http://` or `https://` (case-sensitive prefix check).
pub fn has_allowed_scheme(url: &str) -> bool {
    ALLOWED_SCHEMES.iter().any(|s| url.starts_with(s))
}

/// Derives a safe filename for saving the body fetched from `url`.
///
/// Takes the basename of the URL path and keeps only alphanumerics, `.`, `_`
/// and `-`. Falls back to [`DEFAULT_FILENAME`] when that leaves nothing, or
/// leaves `.` / `..`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/cat.png")` → `"cat.png"`
/// - `derive_filename("https://example.com/")` → `"downloaded_image.jpg"`
pub fn derive_filename(url: &str) -> String {
    let raw = match basename_from_url(url) {
        Some(b) => b,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
