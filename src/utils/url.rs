// src/utils/url.rs

//! URL manipulation utilities.

/// Append a path segment to a base URL, tolerating a trailing slash.
///
/// # Examples
/// ```
/// use pantip_scraper::utils::url::join_segment;
///
/// assert_eq!(
///     join_segment("https://pantip.com/topic/", "42"),
///     "https://pantip.com/topic/42"
/// );
/// ```
pub fn join_segment(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}
