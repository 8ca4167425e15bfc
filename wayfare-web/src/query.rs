//! Back-end independent document queries.
//!
//! The extractors only ever ask three things of a document: the first
//! descendant carrying a marker, all such descendants in document order, and
//! a node's stripped text. [`QueryNode`] captures exactly that so the
//! extraction rules don't depend on a particular HTML parser.

use std::fmt;

/// Structural marker: a tag name plus, optionally, one class the element must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl Marker {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    /// CSS selector equivalent (`tag` or `tag.class`).
    ///
    /// ```
    /// use wayfare_web::Marker;
    ///
    /// assert_eq!(Marker::new("li", "js-ao-common-accordion").css(), "li.js-ao-common-accordion");
    /// assert_eq!(Marker::tag("p").css(), "p");
    /// ```
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            Some(class) => write!(f, "{}.{}", self.tag, class),
            None => f.write_str(self.tag),
        }
    }
}

/// A node handle that can be searched by [`Marker`].
///
/// Searches cover descendants only, never the node itself.
pub trait QueryNode: Copy {
    fn find_first(&self, marker: &Marker) -> Option<Self>;

    fn find_all(&self, marker: &Marker) -> Vec<Self>;

    /// Every descendant text fragment trimmed, empty fragments dropped, the
    /// rest concatenated without separators.
    fn stripped_text(&self) -> String;
}

/// Markers of the tour page schema.
pub mod markers {
    use super::Marker;

    pub const DESCRIPTION: Marker = Marker::new("div", "ao-clp-custom-tdp-itinerary__description");
    /// The itinerary section. The inclusions section reuses the accordion
    /// markup but never carries this class.
    pub const ITINERARY_SECTION: Marker = Marker::new("section", "ao-clp-custom-tdp-itinerary");
    pub const DAY_ITEM: Marker = Marker::new("li", "js-ao-common-accordion");
    pub const DAY_TITLE: Marker = Marker::new("div", "js-ao-common-accordion__title");
    pub const TITLE_ARROW: Marker = Marker::new("div", "ao-common-accordion__arrow");
    pub const DAY_CONTENT: Marker = Marker::new("div", "ao-common-accordion__bottom-content");
    pub const PARAGRAPH: Marker = Marker::tag("p");
}
