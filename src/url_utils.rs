//! URL Utility Functions
//!
//! Page URL validation, `<base href>` discovery and resolution of relative
//! image sources to absolute URLs.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse the URL a page was fetched from.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] unless `page_url` is an absolute http(s) URL
/// with a host.
pub fn parse_page_url(page_url: &str) -> Result<Url> {
    match is_absolute_url(page_url) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUrl {
            url: page_url.to_string(),
            reason: "expected an absolute http(s) URL".to_string(),
        }),
    }
}

/// Determine the base URL relative links in `doc` resolve against.
///
/// A `<base href>` element wins over the page URL; a relative `href` is
/// itself resolved against the page URL. Returns `None` when neither yields
/// an absolute URL.
#[must_use]
pub fn document_base_url(doc: &Document, page_url: Option<&Url>) -> Option<Url> {
    let href = dom::select_first(doc, "base[href]").and_then(|base| dom::get_attribute(&base, "href"));

    let Some(href) = href.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()) else {
        return page_url.cloned();
    };

    if let (true, Some(url)) = is_absolute_url(&href) {
        return Some(url);
    }

    match page_url {
        Some(page) => page.join(&href).ok().or_else(|| Some(page.clone())),
        None => None,
    }
}

/// Resolve a (possibly relative) URL against `base`.
///
/// # Returns
/// * The absolute URL, or `None` for empty input, non-fetchable schemes
///   (`data:`, `javascript:`, ...) or a relative URL with no base to resolve
///   against.
#[must_use]
pub fn resolve_url(url_str: &str, base: Option<&Url>) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return None;
    }

    if let (true, Some(url)) = is_absolute_url(url_str) {
        return Some(url.to_string());
    }

    let resolved = base?.join(url_str).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Check whether `host` is `domain` or one of its subdomains.
///
/// Comparison is case-insensitive and ignores a trailing dot.
#[must_use]
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();

    if domain.is_empty() {
        return false;
    }

    host == domain
        || host
            .strip_suffix(&domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
