//! `scraper`-backed implementation of [`QueryNode`].

use scraper::{ElementRef, Html, Selector};

use crate::query::{Marker, QueryNode};

/// Elements whose text is never visible page copy.
const INVISIBLE: [&str; 4] = ["script", "style", "template", "noscript"];

/// A parsed HTML document.
///
/// Parsing is lenient: malformed markup still yields a tree, so there is no
/// error path.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// Element handle borrowed from an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> HtmlNode<'a> {
    pub fn element(&self) -> ElementRef<'a> {
        self.0
    }
}

fn selector_for(marker: &Marker) -> Option<Selector> {
    match Selector::parse(&marker.css()) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!(marker = %marker, error = %e, "html.selector.invalid");
            None
        }
    }
}

fn push_stripped_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
            }
        } else if let Some(el) = ElementRef::wrap(child) {
            if !INVISIBLE.contains(&el.value().name()) {
                push_stripped_text(el, out);
            }
        }
    }
}

impl<'a> QueryNode for HtmlNode<'a> {
    fn find_first(&self, marker: &Marker) -> Option<Self> {
        let selector = selector_for(marker)?;
        self.0.select(&selector).next().map(HtmlNode)
    }

    fn find_all(&self, marker: &Marker) -> Vec<Self> {
        let Some(selector) = selector_for(marker) else {
            return Vec::new();
        };
        self.0.select(&selector).map(HtmlNode).collect()
    }

    fn stripped_text(&self) -> String {
        let mut out = String::new();
        push_stripped_text(self.0, &mut out);
        out
    }
}
