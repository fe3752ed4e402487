//! Query-string construction for list filters

/// Build a query string from filter pairs
///
/// Keys and values are percent-encoded; pairs keep their given order.
/// Returns an empty string for an empty filter set.
#[must_use]
pub fn query_string(filters: &[(&'static str, String)]) -> String {
    filters
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
