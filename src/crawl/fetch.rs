// src/crawl/fetch.rs
// =============================================================================
// This module is the boundary between the crawler and the network.
//
// Key functionality:
// - Fetcher trait: "give me the page at this URL"
// - HttpFetcher: the real implementation, using reqwest
// - FetchOutcome: either the page we got, or why we didn't get one
//
// What counts as a failure?
// - Only transport problems: DNS, refused connection, broken redirect chain,
//   a body that couldn't be read
// - A 404 or 500 is NOT a failure: the error page is parsed for links too
//
// Rust concepts:
// - Traits: so tests can swap the network for an in-memory site
// - async fn in traits: the fetch waits on network I/O
// - thiserror: derives std::error::Error for our error enum
// =============================================================================

use reqwest::Client;
use thiserror::Error;
use url::Url;

// Why a fetch produced no page
#[derive(Debug, Error)]
pub enum FetchError {
    // The request never produced a response
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    // We got a response but couldn't read its body
    #[error("could not read response body")]
    Body(#[source] reqwest::Error),
}

// A page we managed to download
#[derive(Debug, Clone)]
pub struct Page {
    // The URL that actually served the page, after following redirects
    pub effective_url: Url,
    // The full response body
    pub body: String,
}

// The result of fetching one URL
//
// The crawler treats Failed exactly like a page with no links, but keeping
// the reason around lets it log what went wrong.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Page),
    Failed(FetchError),
}

// Anything that can turn a URL into a page
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

// Fetches pages over HTTP(S) with a single shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates the HTTP client
    //
    // No timeout is set: requests use reqwest's defaults.
    // Redirects are followed (reqwest follows up to 10 by default).
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failed(FetchError::Transport(e)),
        };

        // Grab the post-redirect URL before text() consumes the response
        let effective_url = response.url().clone();

        tracing::debug!(
            url,
            effective = %effective_url,
            status = response.status().as_u16(),
            "got response"
        );

        // text() reads the body to the end and drops the response,
        // whether or not the read succeeds
        match response.text().await {
            Ok(body) => FetchOutcome::Fetched(Page {
                effective_url,
                body,
            }),
            Err(e) => FetchOutcome::Failed(FetchError::Body(e)),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawler only needs "URL in, page out"
//    - Tests implement Fetcher with a HashMap of fake pages
//
// 2. What is #[allow(async_fn_in_trait)]?
//    - Rust warns about `async fn` in public traits because callers can't
//      require the returned future to be Send
//    - Our crawler awaits one fetch at a time on one task, so it never
//      needs Send futures
//
// 3. What does #[source] do?
//    - It tells thiserror which inner error caused ours
//    - Error reporters can then walk the whole chain of causes
//
// 4. Why clone the URL before calling text()?
//    - text() takes `self` by value: the response is moved and gone
//    - Anything we still need from it must be copied out first
// -----------------------------------------------------------------------------
