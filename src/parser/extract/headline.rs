use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::text::Lookup;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("i.custom-title").unwrap());
static CORRECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.wording-correction").unwrap());
static COMPOSITION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.container-composition").unwrap());
static SUBHEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());

pub fn title(doc: &Html) -> Option<String> {
    Lookup::document(doc).find(&TITLE).text()
}

/// First `h2` of the composition container inside the correction section.
pub fn subtitle(doc: &Html) -> Option<String> {
    Lookup::document(doc)
        .find(&CORRECTION)
        .find(&COMPOSITION)
        .find(&SUBHEADING)
        .text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let doc = Html::parse_document("<h1><i class='custom-title'>\n  Carnaval ou cultura?  </i></h1>");
        assert_eq!(title(&doc).as_deref(), Some("Carnaval ou cultura?"));
    }

    #[test]
    fn title_needs_the_marker_class() {
        let doc = Html::parse_document("<h1><i>Carnaval</i></h1>");
        assert_eq!(title(&doc), None);
    }

    #[test]
    fn subtitle_nested() {
        let doc = Html::parse_document(
            "<h2>outside</h2>
             <section class='wording-correction'>
               <div class='container-composition'><h2> Tema </h2><h2>second</h2></div>
             </section>",
        );
        assert_eq!(subtitle(&doc).as_deref(), Some("Tema"));
    }

    #[test]
    fn subtitle_without_container() {
        let doc = Html::parse_document(
            "<section class='wording-correction'><h2>Tema</h2></section>",
        );
        assert_eq!(subtitle(&doc), None);
    }

    #[test]
    fn subtitle_without_section() {
        let doc = Html::parse_document("<div class='container-composition'><h2>Tema</h2></div>");
        assert_eq!(subtitle(&doc), None);
    }
}
