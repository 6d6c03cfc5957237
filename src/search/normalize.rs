//! Text normalization for case- and whitespace-insensitive comparison.

/// Lower-case and trim `text`; absent text normalizes to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    text.map(|t| t.trim().to_lowercase()).unwrap_or_default()
}
