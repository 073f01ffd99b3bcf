// src/links/html.rs
// =============================================================================
// This module pulls raw href values out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever never fails on bad markup: it recovers the same way a browser
// does, so broken HTML just gives us whatever anchors it could still find.
//
// This module knows nothing about origins, depths or visited pages. It
// returns the hrefs of the anchors in the parsed tree, in document order,
// duplicates included. For well-formed markup that is exactly what was
// written; for misnested anchors the parser's repair may repeat one.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every <a href="..."> element
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::error!(error = ?e, "invalid anchor selector");
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
