//! Hook binary: stdin event in, verdict JSON out.

use anyhow::Result;
use sentinel_core::{select_client, Settings};
use sentinel_hook::{decide, CaptureStore};
use std::io::Read as _;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Verbosity is gated by the resolved
/// debug flag; `SENTINEL_LOG` overrides it with a full filter directive.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SENTINEL_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_tracing(settings.debug);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let client = select_client(&settings);
    let store = CaptureStore::default();
    let verdict = decide(&input, &store, client.as_ref()).await;

    // Stdout carries exactly one JSON document; diagnostics stay on stderr.
    println!("{}", serde_json::to_string(&verdict)?);
    Ok(())
}
