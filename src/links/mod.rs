// src/links/mod.rs
// =============================================================================
// This module turns a fetched page into the list of links worth following.
//
// Submodules:
// - html: Extracts raw href values from HTML (Link Extractor)
// - resolve: Resolves hrefs to absolute URLs and keeps same-site ones
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod resolve;

pub use html::extract_hrefs;
pub use resolve::{same_site_links, Origin};
