use std::path::PathBuf;
#[cfg(test)]
use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const FULL_RECORDS_FILE: &str = "dados_redacoes.csv";
pub const TITLES_FILE: &str = "titulos.csv";
pub const PROCESSED_FILE: &str = "processados.txt";
pub const LAST_ID_FILE: &str = "ultimo_id.txt";
pub const SQLITE_FILE: &str = "state.sqlite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateBackend {
    File,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub backend: StateBackend,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Write the allocator counter after every persisted record instead of
    /// once at the end of the run.
    pub persist_id_each_record: bool,
}

impl Settings {
    /// Defaults overridden by `ESSAYS_*` environment variables.
    pub fn load() -> Result<Self> {
        Config::builder()
            .set_default("output_dir", "textos_uol")?
            .set_default("backend", "file")?
            .set_default("timeout_secs", 30)?
            .set_default(
                "user_agent",
                concat!("essay_scraper/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("persist_id_each_record", false)?
            .add_source(Environment::with_prefix("ESSAYS").try_parsing(true))
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid ESSAYS_* settings")
    }

    pub fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }

    #[cfg(test)]
    pub fn for_dir(dir: &Path) -> Self {
        Settings {
            output_dir: dir.to_path_buf(),
            backend: StateBackend::File,
            timeout_secs: 30,
            user_agent: concat!("essay_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            persist_id_each_record: false,
        }
    }
}
