//! Title to filename fragment.
//!
//! The mapping is intentionally shallow: lowercase, spaces and underscores become
//! hyphens, and nothing else changes. Runs of hyphens, leading or trailing
//! hyphens and non-ASCII characters pass through as they are.

pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            other => other,
        })
        .collect()
}
