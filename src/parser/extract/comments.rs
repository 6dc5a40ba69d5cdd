use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::parser::text::text_of;

static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

const COMMENTS_HEADING: &str = "Competências";

/// Items of the first `ul` that follows the "Competências" heading in
/// document order.
pub fn extract(doc: &Html) -> Vec<String> {
    let Some(heading) = doc
        .select(&HEADING)
        .find(|h| text_of(*h) == COMMENTS_HEADING)
    else {
        return Vec::new();
    };

    match list_after(doc, heading) {
        Some(list) => list.select(&ITEM).map(text_of).collect(),
        None => Vec::new(),
    }
}

fn list_after<'a>(doc: &'a Html, heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != heading.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "ul")
}
