// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   sitemap-builder -url https://example.com -depth 3 > sitemap.xml
//
// clap only understands single-letter short flags ("-u") and double-dash
// long flags ("--url"). We also accept "-url" and "-depth", so before clap
// sees the arguments we rewrite those to "--url" and "--depth".
// =============================================================================

use clap::Parser;

// Long flag names that may also be written with a single dash
const LONG_FLAGS: &[&str] = &["url", "depth"];

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawls a website breadth-first and prints its sitemap.xml",
    long_about = "sitemap-builder follows same-site links from a root URL, level by level, \
                  and writes every page it visited to stdout as a sitemap.xml document."
)]
pub struct Cli {
    /// The url you want to build a sitemap for
    #[arg(long, default_value = "https://gophercises.com")]
    pub url: String,

    /// The maximum number of link hops to follow from the root
    ///
    /// Depth 0 = just the root page
    /// Depth 1 = the root + every page it links to
    /// etc.
    #[arg(long, default_value_t = 10)]
    pub depth: usize,
}

impl Cli {
    // Parses the process arguments, accepting "-url" / "-depth" as well
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }
}

// Rewrites single-dash long flags ("-url", "-depth=3") to their
// double-dash form; every other argument is passed through unchanged
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().map(normalize_arg).collect()
}

fn normalize_arg(arg: String) -> String {
    let Some(rest) = arg.strip_prefix('-') else {
        return arg;
    };

    // "--url" is already fine, "-" on its own is a value
    if rest.starts_with('-') || rest.is_empty() {
        return arg;
    }

    let name = rest.split('=').next().unwrap_or(rest);
    if LONG_FLAGS.contains(&name) {
        format!("-{}", arg)
    } else {
        arg
    }
}
