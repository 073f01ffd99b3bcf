// src/links/resolve.rs
// =============================================================================
// This module turns raw href values into absolute, same-site URLs.
//
// Two independent stages:
// 1. resolve_hrefs: raw href -> absolute URL (or dropped)
// 2. filter + with_prefix: keep only URLs that start with our origin
//
// The rules are deliberately simple string rules, not a browser-grade URL
// resolver:
// - "/path"          -> origin + "/path" (plain concatenation)
// - "http..."        -> used as-is
// - anything else    -> dropped ("#frag", "mailto:", "relative/path", "//cdn")
//
// Rust concepts:
// - Newtype structs: Origin wraps a String so it can't be mixed up with a URL
// - Enums with borrowed data: HrefKind<'a> points into the original href
// - Closures: with_prefix returns a predicate we can pass around
// =============================================================================

use std::fmt;

use url::Url;

// The scheme + host (+ non-default port) of the page we actually landed on
//
// Examples:
//   https://example.com/docs?page=2   -> "https://example.com"
//   http://127.0.0.1:8080/index.html  -> "http://127.0.0.1:8080"
//
// There is never a trailing slash, path, query or fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    // Builds the origin of `url`, or `None` if the URL has no host
    // (`data:`, `mailto:`, ...)
    pub fn of(url: &Url) -> Option<Self> {
        let host = url.host_str()?;

        // url.port() is None when the port is the scheme's default
        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        Some(Origin(origin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Resolves one href against this origin
    //
    // Returns: Some(absolute_url) or None if the href is dropped
    pub fn resolve(&self, href: &str) -> Option<String> {
        match HrefKind::classify(href) {
            HrefKind::RootRelative(path) => Some(format!("{}{}", self.0, path)),
            HrefKind::Absolute(url) => Some(url.to_string()),
            HrefKind::Unsupported => None,
        }
    }

    // Literal string prefix check, no parsing involved
    //
    // Note: "https://ex.com" is also a prefix of "https://ex.com.other.org/",
    // which is therefore kept.
    pub fn is_prefix_of(&self, url: &str) -> bool {
        url.starts_with(self.as_str())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// What kind of link target an href is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind<'a> {
    // Starts with a single "/" (e.g. "/about")
    RootRelative(&'a str),
    // Starts with the literal text "http" (http:// and https:// links)
    Absolute(&'a str),
    // Everything else: fragments, mailto:, javascript:, "//host/x", "docs/intro"
    Unsupported,
}

impl<'a> HrefKind<'a> {
    pub fn classify(href: &'a str) -> Self {
        if href.starts_with("//") {
            // Protocol-relative: points at some other host
            HrefKind::Unsupported
        } else if href.starts_with('/') {
            HrefKind::RootRelative(href)
        } else if href.starts_with("http") {
            HrefKind::Absolute(href)
        } else {
            HrefKind::Unsupported
        }
    }
}

// Stage 1: resolves every href against `origin`, in order, dropping the
// ones we don't follow
pub fn resolve_hrefs<I, S>(hrefs: I, origin: &Origin) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hrefs
        .into_iter()
        .filter_map(|href| origin.resolve(href.as_ref()))
        .collect()
}

// Stage 2: keeps only the links for which `keep` returns true
pub fn filter<F>(links: Vec<String>, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    links.into_iter().filter(|link| keep(link.as_str())).collect()
}

// Builds the same-site predicate used with `filter`
pub fn with_prefix(origin: &Origin) -> impl Fn(&str) -> bool + '_ {
    move |link: &str| origin.is_prefix_of(link)
}

// Both stages chained: the absolute same-site URLs found in `hrefs`
pub fn same_site_links<I, S>(hrefs: I, origin: &Origin) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter(resolve_hrefs(hrefs, origin), with_prefix(origin))
}
