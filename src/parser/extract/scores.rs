use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::parser::text::{text_of, Lookup};
use crate::parser::CompetenceScore;

static RESULTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.results-table").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.rt-line-option").unwrap());
static TOPIC: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.topic").unwrap());
static POINTS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.points").unwrap());

/// Topic label marking the overall grade row.
const FINAL_SCORE_LABEL: &str = "Nota final";

#[derive(Debug, Default, PartialEq)]
pub struct ScoreTable {
    pub scores: Vec<CompetenceScore>,
    pub final_score: Option<String>,
}

/// Score rows in document order. The final-grade row is diverted; if several
/// match, the last one wins.
pub fn extract(doc: &Html) -> ScoreTable {
    let mut table = ScoreTable::default();
    let Some(section) = Lookup::document(doc).find(&RESULTS).element() else {
        return table;
    };

    for row in section.select(&ROW) {
        let Some(topic) = first_text(row, &TOPIC) else {
            debug!("score row without topic label, skipping");
            continue;
        };
        let points = first_text(row, &POINTS).unwrap_or_default();

        if topic.contains(FINAL_SCORE_LABEL) {
            table.final_score = Some(points);
        } else {
            table.scores.push(CompetenceScore {
                name: topic,
                points,
            });
        }
    }

    table
}

fn first_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector).next().map(text_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(topic: &str, points: &str) -> String {
        format!(
            "<div class='rt-line-option'><span class='topic'>{}</span><span class='points'>{}</span></div>",
            topic, points
        )
    }

    fn table(rows: &[String]) -> Html {
        Html::parse_document(&format!(
            "<section class='results-table'>{}</section>",
            rows.concat()
        ))
    }

    #[test]
    fn final_score_is_diverted() {
        let doc = table(&[
            row("Competência 1", "200"),
            row("Competência 2", "180"),
            row("Nota final", "960"),
        ]);
        let t = extract(&doc);
        assert_eq!(t.final_score.as_deref(), Some("960"));
        let names: Vec<&str> = t.scores.iter().map(|s| s.name.as_str()).collect();
        let points: Vec<&str> = t.scores.iter().map(|s| s.points.as_str()).collect();
        assert_eq!(names, ["Competência 1", "Competência 2"]);
        assert_eq!(points, ["200", "180"]);
    }

    #[test]
    fn last_final_score_wins() {
        let doc = table(&[
            row("Nota final", "900"),
            row("Competência 1", "200"),
            row("Nota final (revisada)", "920"),
        ]);
        let t = extract(&doc);
        assert_eq!(t.final_score.as_deref(), Some("920"));
        assert_eq!(t.scores.len(), 1);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let doc = table(&[row("nota final", "960")]);
        let t = extract(&doc);
        assert_eq!(t.final_score, None);
        assert_eq!(t.scores.len(), 1);
    }

    #[test]
    fn row_without_topic_is_skipped() {
        let doc = Html::parse_document(
            "<section class='results-table'>
               <div class='rt-line-option'><span class='points'>40</span></div>
               <div class='rt-line-option'><span class='topic'>Competência 3</span></div>
             </section>",
        );
        let t = extract(&doc);
        assert_eq!(
            t.scores,
            vec![CompetenceScore {
                name: "Competência 3".into(),
                points: String::new()
            }]
        );
    }

    #[test]
    fn rows_outside_results_section_ignored() {
        let doc = Html::parse_document(&row("Competência 1", "200"));
        assert_eq!(extract(&doc), ScoreTable::default());
    }
}
