// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// Every text node under `el`, concatenated (like lxml's `text_content()`).
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Direct text children only; nested elements are skipped.
pub fn own_text<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.children()
        .filter_map(|node| node.value().as_text())
        .map(|t| &**t)
        .collect()
}
