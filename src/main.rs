// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr only)
// 2. Parse command-line arguments using clap
// 3. Crawl the site breadth-first from the root URL
// 4. Print the visited pages as sitemap.xml on stdout
// 5. Exit with proper code (0 = success, 2 = error)
//
// A crawl itself never fails: pages that can't be fetched just end up with
// no links. The only errors that reach this file are setup problems and
// failing to write the sitemap.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - fetching pages and the BFS
mod links;    // src/links/ - href extraction and resolution
mod logging;  // src/logging.rs - tracing setup
mod sitemap;  // src/sitemap.rs - XML output

use anyhow::{Context, Result};
use cli::Cli;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    logging::init().context("init logging")?;

    let cli = Cli::parse_args();
    tracing::debug!(?cli, "parsed cli");

    let fetcher = crawl::HttpFetcher::new().context("failed to create HTTP client")?;

    let mut pages = crawl::crawl_website(&fetcher, &cli.url, cli.depth).await;
    tracing::info!(pages = pages.len(), "crawl finished");

    // The crawl returns pages in no particular order; sort so the same
    // site always produces the same file
    pages.sort();

    let stdout = std::io::stdout();
    sitemap::write_sitemap(&mut stdout.lock(), &pages)?;

    Ok(())
}
