mod allocator;
mod config;
mod crawl_state;
mod fetch;
mod output;
mod parser;
mod pipeline;
mod sources;
mod store;

use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::info;

use config::Settings;
use fetch::HttpFetcher;
use output::OutputTables;
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let settings = Settings::load()?;
    info!(?settings, "Starting essay scraper");

    std::fs::create_dir_all(&settings.output_dir)
        .with_context(|| format!("Failed to create {:?}", settings.output_dir))?;

    let stores = store::open(&settings)?;
    let output = OutputTables::open(&settings.output_dir)?;
    let fetcher = HttpFetcher::new(
        &settings.user_agent,
        Duration::from_secs(settings.timeout_secs),
    )?;

    let mut pipeline = Pipeline::new(fetcher, stores, output, settings.persist_id_each_record)?;
    let stats = pipeline.run(sources::ESSAY_URLS).await?;

    let (full, titles) = pipeline.output_paths();
    info!(
        "CSV files saved to {:?} and {:?} ({} processed, {} skipped, {} failed) in {:.1}s",
        full,
        titles,
        stats.processed,
        stats.skipped,
        stats.failed,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
