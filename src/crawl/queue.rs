// src/crawl/queue.rs
// =============================================================================
// This module implements website crawling with a level-by-level breadth-first
// search.
//
// How it works:
// 1. The root URL is the only entry of the first level
// 2. For every URL in the current level that we haven't visited yet:
//    mark it visited, fetch it, extract its same-site links
// 3. Links we haven't visited go into the next level
// 4. Swap levels and repeat, exactly max_depth + 1 times
//
// Rules worth knowing:
// - A URL is marked visited BEFORE it is fetched, so it's fetched at most once
// - A failed fetch still counts as visited; it just contributes no links
// - Empty levels don't stop the loop early, they're simply no-op rounds
// - Nothing in here can fail: the crawl always returns what it visited
//
// Rust concepts:
// - HashSet: To track visited URLs and the two levels (O(1) lookup)
// - std::mem::take: To move a set out and leave an empty one behind
// - Generics: crawl_website works with any Fetcher
// =============================================================================

use std::collections::HashSet;

use super::fetch::{FetchOutcome, Fetcher, Page};
use crate::links::{extract_hrefs, same_site_links, Origin};

// Everything the BFS mutates, created fresh for each crawl
#[derive(Debug, Default)]
struct CrawlState {
    visited: HashSet<String>,
    current: HashSet<String>,
    next: HashSet<String>,
}

impl CrawlState {
    fn new(root_url: &str) -> Self {
        let mut state = Self::default();
        // The root is "discovered" before round 0, so the first swap picks it up
        state.next.insert(root_url.to_string());
        state
    }

    // Makes the next level the current one and starts a fresh next level
    fn advance(&mut self) {
        self.current = std::mem::take(&mut self.next);
    }

    // Returns false if the URL was already visited
    fn mark_visited(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.to_string())
    }

    // Queues every link not visited *right now* for the next level
    //
    // A link may still be visited by a sibling later in this same round;
    // it's then skipped when the next level is processed.
    fn enqueue(&mut self, links: Vec<String>) {
        for link in links {
            if !self.visited.contains(&link) {
                self.next.insert(link);
            }
        }
    }
}

// Crawls a website starting from a URL
//
// Parameters:
//   fetcher: how pages are downloaded (HttpFetcher, or a fake in tests)
//   root_url: the URL to start crawling from
//   max_depth: how many link hops to follow from the root
//
// Returns: every URL that was visited, in no particular order
//
// Example:
//   max_depth=0: only the root
//   max_depth=1: the root + the pages it links to
//   max_depth=2: ... + the pages those link to
pub async fn crawl_website<F: Fetcher>(
    fetcher: &F,
    root_url: &str,
    max_depth: usize,
) -> Vec<String> {
    let mut state = CrawlState::new(root_url);

    for depth in 0..=max_depth {
        state.advance();

        // Move the level out so we can mutate `state` while walking it
        let level = std::mem::take(&mut state.current);

        for url in level {
            if !state.mark_visited(&url) {
                continue;
            }

            let links = page_links(fetcher, &url).await;
            state.enqueue(links);
        }

        tracing::info!(
            depth,
            visited = state.visited.len(),
            next = state.next.len(),
            "finished crawl round"
        );
    }

    state.visited.into_iter().collect()
}

// Fetches one URL and returns the same-site links on it
//
// Failures are logged and turned into "no links".
async fn page_links<F: Fetcher>(fetcher: &F, url: &str) -> Vec<String> {
    tracing::debug!(url, "fetching");

    match fetcher.fetch(url).await {
        FetchOutcome::Fetched(page) => links_on_page(&page),
        FetchOutcome::Failed(e) => {
            tracing::debug!(url, error = ?e, "fetch failed; treating as a page with no links");
            Vec::new()
        }
    }
}

// Links are resolved against the origin of the URL that actually served the
// page, which differs from the requested one after a cross-host redirect
fn links_on_page(page: &Page) -> Vec<String> {
    let Some(origin) = Origin::of(&page.effective_url) else {
        tracing::debug!(url = %page.effective_url, "page has no origin; ignoring its links");
        return Vec::new();
    };

    same_site_links(extract_hrefs(&page.body), &origin)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two sets instead of a VecDeque?
//    - Each round needs to know exactly which URLs belong to it
//    - A set also drops duplicates: a page linked from ten places in one
//      round is queued once
//
// 2. What is std::mem::take?
//    - Replaces a value with its Default (an empty HashSet here)
//      and hands you the old value
//    - It lets us own the current level while still borrowing `state`
//      mutably inside the loop
//
// 3. Why is there no error type here?
//    - The fetcher already turns every failure into FetchOutcome::Failed
//    - The crawler only logs it, so the function can't fail
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::fetch::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use url::Url;

    // An in-memory website
    //
    // Each entry maps a requested URL to (effective URL, HTML).
    // Requesting a URL that isn't in the map fails like a dead host.
    #[derive(Default)]
    struct FakeSite {
        pages: HashMap<String, (String, String)>,
        fetched: RefCell<Vec<String>>,
    }

    impl FakeSite {
        fn page(mut self, url: &str, html: &str) -> Self {
            self.pages
                .insert(url.to_string(), (url.to_string(), html.to_string()));
            self
        }

        fn redirect(mut self, url: &str, effective_url: &str, html: &str) -> Self {
            self.pages
                .insert(url.to_string(), (effective_url.to_string(), html.to_string()));
            self
        }

        fn fetch_count(&self, url: &str) -> usize {
            self.fetched.borrow().iter().filter(|u| *u == url).count()
        }
    }

    impl Fetcher for FakeSite {
        async fn fetch(&self, url: &str) -> FetchOutcome {
            self.fetched.borrow_mut().push(url.to_string());

            match self.pages.get(url) {
                Some((effective_url, html)) => FetchOutcome::Fetched(Page {
                    effective_url: Url::parse(effective_url).unwrap(),
                    body: html.clone(),
                }),
                None => {
                    // reqwest refuses to build a request for "::", which gives
                    // us a genuine reqwest::Error to wrap
                    let err = reqwest::Client::new().get("::").build().unwrap_err();
                    FetchOutcome::Failed(FetchError::Transport(err))
                }
            }
        }
    }

    fn links(hrefs: &[&str]) -> String {
        hrefs
            .iter()
            .map(|href| format!(r#"<a href="{}">link</a>"#, href))
            .collect()
    }

    fn sorted(mut urls: Vec<String>) -> Vec<String> {
        urls.sort();
        urls
    }

    const R: &str = "https://ex.com/";
    const A: &str = "https://ex.com/a";
    const B: &str = "https://ex.com/b";
    const C: &str = "https://ex.com/c";

    fn chain() -> FakeSite {
        FakeSite::default()
            .page(R, &links(&["/a"]))
            .page(A, &links(&["/b"]))
            .page(B, &links(&["/c"]))
            .page(C, "")
    }

    #[tokio::test]
    async fn test_depth_zero_visits_only_root() {
        let site = chain();
        let visited = crawl_website(&site, R, 0).await;
        assert_eq!(visited, vec![R]);
        assert_eq!(site.fetched.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_depth_one_stops_after_second_round() {
        let site = chain();
        let visited = crawl_website(&site, R, 1).await;
        assert_eq!(sorted(visited), vec![R, A]);
        // B was discovered but never fetched
        assert_eq!(site.fetch_count(B), 0);
    }

    #[tokio::test]
    async fn test_depth_two_reaches_third_page() {
        let site = chain();
        let visited = crawl_website(&site, R, 2).await;
        assert_eq!(sorted(visited), vec![R, A, B]);
    }

    #[tokio::test]
    async fn test_depth_beyond_graph_is_harmless() {
        let site = chain();
        let visited = crawl_website(&site, R, 50).await;
        assert_eq!(sorted(visited), vec![R, A, B, C]);
        assert_eq!(site.fetched.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        for max_depth in [1, 2, 10] {
            let site = FakeSite::default()
                .page(R, &links(&["/a"]))
                .page(A, &links(&[R]));

            let visited = crawl_website(&site, R, max_depth).await;
            assert_eq!(sorted(visited), vec![R, A]);
            assert_eq!(site.fetch_count(R), 1);
            assert_eq!(site.fetch_count(A), 1);
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_still_visited() {
        // A is not on the fake site, so fetching it fails
        let site = FakeSite::default()
            .page(R, &links(&["/a", "/b"]))
            .page(B, "");

        let visited = crawl_website(&site, R, 3).await;
        assert_eq!(sorted(visited), vec![R, A, B]);
        assert_eq!(site.fetch_count(A), 1);
    }

    #[tokio::test]
    async fn test_failed_root_is_still_visited() {
        let site = FakeSite::default();
        let visited = crawl_website(&site, R, 5).await;
        assert_eq!(visited, vec![R]);
    }

    #[tokio::test]
    async fn test_other_sites_are_not_followed() {
        let site = FakeSite::default()
            .page(
                R,
                &links(&["https://other.com/x", "http://ex.com/a", "mailto:a@ex.com"]),
            )
            .page("https://other.com/x", "");

        let visited = crawl_website(&site, R, 3).await;
        assert_eq!(visited, vec![R]);
        assert_eq!(site.fetch_count("https://other.com/x"), 0);
    }

    #[tokio::test]
    async fn test_page_linked_twice_in_a_round_is_fetched_once() {
        // R -> A, B; A -> B, C; B -> C
        let site = FakeSite::default()
            .page(R, &links(&["/a", "/b"]))
            .page(A, &links(&["/b", "/c"]))
            .page(B, &links(&["/c"]))
            .page(C, &links(&["/a", "/"]));

        let visited = crawl_website(&site, R, 4).await;
        assert_eq!(sorted(visited), vec![R, A, B, C]);
        for url in [R, A, B, C] {
            assert_eq!(site.fetch_count(url), 1, "{} fetched more than once", url);
        }
    }

    #[tokio::test]
    async fn test_urls_are_compared_as_plain_strings() {
        // "/a" and "/a/" are different pages
        let site = FakeSite::default()
            .page(R, &links(&["/a", "/a/"]))
            .page(A, "")
            .page("https://ex.com/a/", "");

        let visited = crawl_website(&site, R, 1).await;
        assert_eq!(sorted(visited), vec![R, A, "https://ex.com/a/"]);
    }

    #[tokio::test]
    async fn test_links_resolve_against_redirect_target() {
        let site = FakeSite::default()
            .redirect(R, "https://www.ex.com/home", &links(&["/about", R]))
            .page("https://www.ex.com/about", "");

        let visited = crawl_website(&site, R, 1).await;
        // The root is recorded under the URL we asked for. R itself is an
        // absolute link to another origin from www.ex.com's point of view.
        assert_eq!(sorted(visited), vec![R, "https://www.ex.com/about"]);
    }

    #[test]
    fn test_enqueue_skips_visited_and_duplicates() {
        let mut state = CrawlState::new(R);
        state.advance();
        assert!(state.mark_visited(R));
        assert!(!state.mark_visited(R));

        state.enqueue(vec![R.to_string(), A.to_string(), A.to_string()]);
        assert_eq!(state.next.len(), 1);
        assert!(state.next.contains(A));
    }
}
