// src/sitemap.rs
// =============================================================================
// This module writes the crawled URLs as a sitemap.xml document.
//
// Output shape:
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// We describe the document with plain structs and let quick-xml's serde
// support produce (and escape) the XML.
// =============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// The <urlset> root element
//
// Field names starting with "@" become attributes in quick-xml
#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: Vec<UrlEntry<'a>>,
}

// One <url><loc>...</loc></url> entry
#[derive(Debug, Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

// Renders the sitemap document (declaration included) as a String
pub fn render<S: AsRef<str>>(urls: &[S]) -> Result<String> {
    let urlset = UrlSet {
        xmlns: SITEMAP_XMLNS,
        urls: urls
            .iter()
            .map(|url| UrlEntry { loc: url.as_ref() })
            .collect(),
    };

    let mut xml = String::new();
    xml.push_str(XML_HEADER);
    xml.push('\n');

    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    urlset
        .serialize(serializer)
        .context("failed to serialize sitemap")?;

    xml.push('\n');
    Ok(xml)
}

// Renders the sitemap and writes it to `out`
pub fn write_sitemap<W: Write, S: AsRef<str>>(out: &mut W, urls: &[S]) -> Result<()> {
    let xml = render(urls)?;
    out.write_all(xml.as_bytes())
        .context("failed to write sitemap")?;
    out.flush().context("failed to write sitemap")?;
    Ok(())
}
