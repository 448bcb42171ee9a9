//! Filename sanitization for a single path segment.

/// Keeps only alphanumerics, `.`, `_` and `-`; everything else is dropped.
///
/// No escaping or replacement happens, so the result may be empty.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
