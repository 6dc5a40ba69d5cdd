pub mod extract;
pub mod text;

use scraper::Html;

pub const TITLE_MISSING: &str = "Título não encontrado";
pub const SUBTITLE_MISSING: &str = "Subtítulo não encontrado";
pub const BODY_MISSING: &str = "Redação não encontrada";
pub const FINAL_SCORE_MISSING: &str = "Nota final não encontrada";

/// One graded criterion of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetenceScore {
    pub name: String,
    pub points: String,
}

/// Everything extracted from one essay page. Absent fields hold their
/// sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Essay {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub scores: Vec<CompetenceScore>,
    /// Feedback list, not aligned with `scores`.
    pub comments: Vec<String>,
    pub final_score: String,
}

impl Essay {
    pub fn competences(&self) -> Vec<&str> {
        self.scores.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn competence_scores(&self) -> Vec<&str> {
        self.scores.iter().map(|s| s.points.as_str()).collect()
    }
}

/// Never fails: each field degrades to its sentinel independently.
pub fn extract(markup: &str) -> Essay {
    let doc = Html::parse_document(markup);
    extract::extract_all(&doc)
}
