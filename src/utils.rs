use scraper::ElementRef;

/// Text of an element with each text node trimmed and the pieces concatenated
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Text of an element with every whitespace run collapsed to one space
pub fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefix an href with the site root
///
/// The href is appended as-is, so a path prefix on the root is kept and
/// protocol-relative or non-ASCII hrefs stay on the configured site.
pub fn resolve_link(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url, href)
}
