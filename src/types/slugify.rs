//! Slug normalization shared by tag lookup, tag indexes and card views.

/// Normalize a display string into a URL-safe, lowercase slug.
///
/// `"Rust Lang"` becomes `"rust-lang"`.
pub fn slugify_str(value: &str) -> String {
    ::slug::slugify(value)
}

/// Slugify every string, keeping input order.
pub fn slugify_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| slugify_str(v.as_ref())).collect()
}
