use scraper::{ElementRef, Html, Selector};

/// Tags whose content is padded with spaces inside body paragraphs.
pub const INLINE_TAGS: &[&str] = &["strong", "span", "b", "em", "i", "mark"];

/// A structural lookup that may already have come up empty.
///
/// Each `find` step is independent: an absent scope yields an absent result
/// instead of short-circuiting the caller.
#[derive(Clone, Copy)]
pub struct Lookup<'a>(Option<ElementRef<'a>>);

impl<'a> Lookup<'a> {
    pub fn document(doc: &'a Html) -> Self {
        Lookup(Some(doc.root_element()))
    }

    pub fn find(self, selector: &Selector) -> Self {
        Lookup(self.0.and_then(|scope| scope.select(selector).next()))
    }

    pub fn element(self) -> Option<ElementRef<'a>> {
        self.0
    }

    pub fn text(self) -> Option<String> {
        self.0.map(text_of)
    }
}

/// Collapse whitespace runs to one space and trim.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn text_of(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// Text of `el` with every inline element's content surrounded by spaces,
/// so dropping the tag does not glue words together.
pub fn padded_text_of(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_padded(el, &mut raw);
    clean_text(&raw)
}

fn push_padded(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let inline = INLINE_TAGS.contains(&child_el.value().name());
            if inline {
                out.push(' ');
            }
            push_padded(child_el, out);
            if inline {
                out.push(' ');
            }
        }
    }
}
