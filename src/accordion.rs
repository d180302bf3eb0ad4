//! Accordion section parsing.
//!
//! The product description accordion stores free-text sections as a flat run
//! of `<h2>` headings each followed by loosely structured content. The body
//! is walked in document order: every heading opens a section, and the text
//! that follows (with all markup dropped) belongs to that section until the
//! next heading. Text before the first heading is ignored.

use std::collections::hash_map;
use std::collections::HashMap;

use dom_query::{Document, NodeRef};
use tracing::{debug, trace};

use crate::dom;
use crate::options::Selectors;

/// Accordion key for the botanical name section.
pub const SCIENTIFIC_NAME: &str = "scientific_name";
/// Accordion key for the cultivation notes section.
pub const CULTURE: &str = "culture";

/// Section key to section text mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion(HashMap<String, String>);

impl Accordion {
    /// Text of the section with normalized `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the page had no accordion or the accordion had no headings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, text)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Accordion {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Normalize a section heading into a mapping key.
///
/// Trims, drops every `:`, lowercases and turns spaces into underscores, so
/// `"Scientific Name:"` becomes `scientific_name`.
#[must_use]
pub fn normalize_key(heading: &str) -> String {
    heading.trim().replace(':', "").to_lowercase().replace(' ', "_")
}

/// Build the accordion mapping from the first accordion body in `doc`.
///
/// Returns an empty mapping when the page has no accordion body. A repeated
/// heading keeps the text of its last occurrence.
#[must_use]
pub fn parse_accordion(doc: &Document, selectors: &Selectors) -> Accordion {
    let Some(body) = dom::select_first(doc, &selectors.accordion) else {
        debug!(selector = %selectors.accordion, "no accordion body on page");
        return Accordion::default();
    };
    let Some(root) = body.nodes().first() else {
        return Accordion::default();
    };

    let mut walker = SectionWalker {
        heading_tag: selectors.accordion_heading.to_ascii_lowercase(),
        current: None,
        sections: Accordion::default(),
    };
    walker.visit_children(root);
    walker.finish()
}

/// Accumulates sections while walking the accordion body.
struct SectionWalker {
    heading_tag: String,
    current: Option<(String, String)>,
    sections: Accordion,
}

impl SectionWalker {
    fn visit_children(&mut self, node: &NodeRef) {
        let mut child = node.first_child();
        while let Some(c) = child {
            if c.is_text() {
                if let Some((_, value)) = self.current.as_mut() {
                    value.push_str(&c.text());
                }
            } else if c.is_element() {
                if dom::node_tag_name(&c).as_deref() == Some(self.heading_tag.as_str()) {
                    self.open_section(&c);
                } else {
                    self.visit_children(&c);
                }
            }
            child = c.next_sibling();
        }
    }

    fn open_section(&mut self, heading: &NodeRef) {
        self.close_section();
        let key = normalize_key(&heading.text());
        trace!(key = %key, "accordion section");
        self.current = Some((key, String::new()));
    }

    fn close_section(&mut self) {
        if let Some((key, value)) = self.current.take() {
            self.sections.0.insert(key, value.trim().to_string());
        }
    }

    fn finish(mut self) -> Accordion {
        self.close_section();
        self.sections
    }
}
