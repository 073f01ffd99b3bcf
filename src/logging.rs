// src/logging.rs
// =============================================================================
// Sets up `tracing` so log events go to stderr.
//
// stdout is reserved for the sitemap itself, so piping the output into a
// file never picks up log lines. The level comes from RUST_LOG
// (e.g. RUST_LOG=debug) and defaults to "warn", which keeps a normal run
// silent.
// =============================================================================

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}
