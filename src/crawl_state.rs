use std::collections::HashSet;

use anyhow::Result;

use crate::store::ProcessedStore;

/// Sources already turned into a persisted record. Only ever grows.
pub struct CrawlState {
    seen: HashSet<String>,
    store: Box<dyn ProcessedStore>,
}

impl CrawlState {
    pub fn load(store: Box<dyn ProcessedStore>) -> Result<Self> {
        let seen = store.load()?;
        Ok(CrawlState { seen, store })
    }

    pub fn is_processed(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Durable before returning.
    pub fn mark_processed(&mut self, url: &str) -> Result<()> {
        self.store.append(url)?;
        self.seen.insert(url.to_string());
        Ok(())
    }

    pub fn processed_count(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::file::FileProcessedLog;

    #[test]
    fn marked_sources_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processados.txt");

        let mut state = CrawlState::load(Box::new(FileProcessedLog::new(path.clone()))).unwrap();
        assert!(!state.is_processed("https://a.example/1.html"));
        state.mark_processed("https://a.example/1.html").unwrap();
        assert!(state.is_processed("https://a.example/1.html"));

        let reloaded = CrawlState::load(Box::new(FileProcessedLog::new(path))).unwrap();
        assert!(reloaded.is_processed("https://a.example/1.html"));
        assert!(!reloaded.is_processed("https://a.example/2.html"));
        assert_eq!(reloaded.processed_count(), 1);
    }
}
