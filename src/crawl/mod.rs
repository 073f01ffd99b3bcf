// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL, one level per round
// - Same-site restriction (doesn't crawl external sites)
// - Configurable depth limit
// - Fetch failures never stop the crawl
//
// Submodules:
// - fetch: downloading pages (the Fetcher trait and its reqwest implementation)
// - queue: the breadth-first traversal itself
// =============================================================================

mod fetch;
mod queue;

pub use fetch::HttpFetcher;
pub use queue::crawl_website;
