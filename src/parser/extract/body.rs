use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::text::{padded_text_of, Lookup};

static COMPOSITION_TEXT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.text-composition").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Paragraphs of the composition joined by single spaces, or `None` when the
/// container is absent. A container without paragraphs yields an empty body.
pub fn body(doc: &Html) -> Option<String> {
    let container = Lookup::document(doc).find(&COMPOSITION_TEXT).element()?;
    let paragraphs: Vec<String> = container
        .select(&PARAGRAPH)
        .map(padded_text_of)
        .filter(|p| !p.is_empty())
        .collect();
    Some(paragraphs.join(" "))
}
