use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::allocator::IdAllocator;
use crate::crawl_state::CrawlState;
use crate::fetch::Fetch;
use crate::output::{EssayRow, OutputTables};
use crate::parser;
use crate::store::{CounterStore, StateStores};

/// Counts returned after the batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Skipped,
    Failed,
    Processed,
}

pub struct Pipeline<F> {
    fetcher: F,
    crawl: CrawlState,
    ids: IdAllocator,
    counter: Box<dyn CounterStore>,
    output: OutputTables,
    persist_id_each_record: bool,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(
        fetcher: F,
        stores: StateStores,
        output: OutputTables,
        persist_id_each_record: bool,
    ) -> Result<Self> {
        let ids = IdAllocator::new(stores.counter.load()?);
        let crawl = CrawlState::load(stores.processed)?;
        info!(
            "Loaded state: {} sources processed, last id {}",
            crawl.processed_count(),
            ids.last()
        );

        Ok(Pipeline {
            fetcher,
            crawl,
            ids,
            counter: stores.counter,
            output,
            persist_id_each_record,
        })
    }

    /// Visit every source in order, then persist the allocator counter.
    ///
    /// Fetch failures are logged and leave the source for the next run;
    /// persistence failures abort the run.
    pub async fn run(&mut self, sources: &[&str]) -> Result<RunStats> {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );

        let mut stats = RunStats::default();
        for url in sources {
            match self.visit(url).await? {
                Outcome::Skipped => stats.skipped += 1,
                Outcome::Failed => stats.failed += 1,
                Outcome::Processed => stats.processed += 1,
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        self.counter.save(self.ids.last())?;
        Ok(stats)
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        self.output.paths()
    }

    async fn visit(&mut self, url: &str) -> Result<Outcome> {
        if self.crawl.is_processed(url) {
            info!("Already processed, skipping: {}", url);
            return Ok(Outcome::Skipped);
        }

        let markup = match self.fetcher.fetch(url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Fetch failed, will retry next run: {}", e);
                return Ok(Outcome::Failed);
            }
        };

        let id = self.ids.next_id();
        let essay = parser::extract(&markup);
        self.output.write(&EssayRow::new(id.clone(), essay))?;
        self.crawl.mark_processed(url)?;
        if self.persist_id_each_record {
            self.counter.save(self.ids.last())?;
        }

        info!("Processed {} as {}", url, id);
        Ok(Outcome::Processed)
    }
}
