pub mod body;
pub mod comments;
pub mod headline;
pub mod scores;

use scraper::Html;

use super::{Essay, BODY_MISSING, FINAL_SCORE_MISSING, SUBTITLE_MISSING, TITLE_MISSING};

pub fn extract_all(doc: &Html) -> Essay {
    let table = scores::extract(doc);

    Essay {
        title: headline::title(doc).unwrap_or_else(|| TITLE_MISSING.to_string()),
        subtitle: headline::subtitle(doc).unwrap_or_else(|| SUBTITLE_MISSING.to_string()),
        body: body::body(doc).unwrap_or_else(|| BODY_MISSING.to_string()),
        scores: table.scores,
        comments: comments::extract(doc),
        final_score: table
            .final_score
            .unwrap_or_else(|| FINAL_SCORE_MISSING.to_string()),
    }
}

// ── Tests ──
