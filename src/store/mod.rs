//! Durable run state: the allocator counter and the set of processed sources.
//!
//! Both live behind narrow traits so the flat-file layout and the SQLite
//! database are interchangeable without touching the pipeline.

pub mod file;
pub mod sqlite;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{Settings, StateBackend, LAST_ID_FILE, PROCESSED_FILE, SQLITE_FILE};

/// Last identifier issued, 0 when nothing was ever issued.
pub trait CounterStore {
    fn load(&self) -> Result<u64>;
    fn save(&self, value: u64) -> Result<()>;
}

/// Append-only log of source URLs that have been fully persisted.
pub trait ProcessedStore {
    fn load(&self) -> Result<HashSet<String>>;
    fn append(&self, url: &str) -> Result<()>;
}

pub struct StateStores {
    pub counter: Box<dyn CounterStore>,
    pub processed: Box<dyn ProcessedStore>,
}

pub fn open(settings: &Settings) -> Result<StateStores> {
    match settings.backend {
        StateBackend::File => Ok(StateStores {
            counter: Box::new(file::FileCounter::new(settings.output_path(LAST_ID_FILE))),
            processed: Box::new(file::FileProcessedLog::new(
                settings.output_path(PROCESSED_FILE),
            )),
        }),
        StateBackend::Sqlite => {
            let path = settings.output_path(SQLITE_FILE);
            let db = open_sqlite(&path)?;
            Ok(StateStores {
                counter: Box::new(db.clone()),
                processed: Box::new(db),
            })
        }
    }
}

fn open_sqlite(path: &Path) -> Result<sqlite::SqliteState> {
    let db = sqlite::SqliteState::open(path)
        .with_context(|| format!("Failed to open state database {:?}", path))?;
    db.init_schema()?;
    Ok(db)
}
