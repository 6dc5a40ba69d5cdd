use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{FULL_RECORDS_FILE, TITLES_FILE};
use crate::parser::Essay;

const FULL_HEADER: [&str; 8] = [
    "ID",
    "Title",
    "Subtitle",
    "Body",
    "Competences",
    "CompetenceScores",
    "CompetenceComments",
    "FinalScore",
];
const TITLE_HEADER: [&str; 2] = ["ID", "Title"];

const LIST_SEPARATOR: &str = "; ";

/// Flattened full-record row; list fields joined with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EssayRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub competences: String,
    pub competence_scores: String,
    pub competence_comments: String,
    pub final_score: String,
}

impl EssayRow {
    pub fn new(id: String, essay: Essay) -> Self {
        EssayRow {
            competences: essay.competences().join(LIST_SEPARATOR),
            competence_scores: essay.competence_scores().join(LIST_SEPARATOR),
            competence_comments: essay.comments.join(LIST_SEPARATOR),
            id,
            title: essay.title,
            subtitle: essay.subtitle,
            body: essay.body,
            final_score: essay.final_score,
        }
    }
}

/// The two CSV tables of a run, open for its whole duration.
///
/// The full-record table accumulates across runs; the title table only holds
/// this run's rows.
pub struct OutputTables {
    full: csv::Writer<File>,
    titles: csv::Writer<File>,
    full_path: PathBuf,
    titles_path: PathBuf,
}

impl OutputTables {
    pub fn open(dir: &Path) -> Result<Self> {
        let full_path = dir.join(FULL_RECORDS_FILE);
        let titles_path = dir.join(TITLES_FILE);

        let needs_header = fs::metadata(&full_path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open {:?}", full_path))?;
        let mut full = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            full.write_record(FULL_HEADER)?;
            full.flush()?;
        }

        let mut titles = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&titles_path)
            .with_context(|| format!("Failed to create {:?}", titles_path))?;
        titles.write_record(TITLE_HEADER)?;
        titles.flush()?;

        Ok(OutputTables {
            full,
            titles,
            full_path,
            titles_path,
        })
    }

    /// Both rows are flushed before returning.
    pub fn write(&mut self, row: &EssayRow) -> Result<()> {
        self.titles.write_record([row.id.as_str(), row.title.as_str()])?;
        self.full.serialize(row)?;
        self.titles.flush()?;
        self.full
            .flush()
            .with_context(|| format!("Failed to flush {:?}", self.full_path))?;
        Ok(())
    }

    pub fn paths(&self) -> (&Path, &Path) {
        (&self.full_path, &self.titles_path)
    }
}
