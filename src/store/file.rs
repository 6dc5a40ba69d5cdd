use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{CounterStore, ProcessedStore};

/// Counter kept as a single decimal integer in a text file.
pub struct FileCounter {
    path: PathBuf,
}

impl FileCounter {
    pub fn new(path: PathBuf) -> Self {
        FileCounter { path }
    }
}

impl CounterStore for FileCounter {
    fn load(&self) -> Result<u64> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e).with_context(|| format!("Failed to read {:?}", self.path)),
        };
        raw.trim()
            .parse()
            .with_context(|| format!("Corrupt counter in {:?}: {:?}", self.path, raw.trim()))
    }

    fn save(&self, value: u64) -> Result<()> {
        fs::write(&self.path, value.to_string())
            .with_context(|| format!("Failed to write {:?}", self.path))
    }
}

/// Newline-delimited list of processed URLs.
pub struct FileProcessedLog {
    path: PathBuf,
}

impl FileProcessedLog {
    pub fn new(path: PathBuf) -> Self {
        FileProcessedLog { path }
    }
}

impl ProcessedStore for FileProcessedLog {
    fn load(&self) -> Result<HashSet<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e).with_context(|| format!("Failed to read {:?}", self.path)),
        };
        Ok(raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn append(&self, url: &str) -> Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {:?}", self.path))?;
        writeln!(f, "{}", url)?;
        f.sync_data()?;
        Ok(())
    }
}
