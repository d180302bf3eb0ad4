//! Facts list parsing.
//!
//! Product pages summarise key attributes in a definition list: each term
//! container holds a heading with the label, each definition container holds
//! the value in one of three shapes (a heading, a run of abbreviations, or
//! loose text). Terms and definitions are paired by position.

use std::collections::hash_map;
use std::collections::HashMap;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::options::Selectors;

/// Fact label for days to maturity.
pub const DAYS_TO_MATURITY: &str = "Days To Maturity";
/// Fact label for life cycle.
pub const LIFE_CYCLE: &str = "Life Cycle";
/// Fact label for disease resistance codes.
pub const DISEASE_RESISTANCE: &str = "Disease Resistance Codes";
/// Fact label for hybrid status.
pub const HYBRID_STATUS: &str = "Hybrid Status";

/// Term to definition mapping, keyed by the human-readable term text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts(HashMap<String, String>);

impl Facts {
    /// Definition for `term`, if the page listed it.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&str> {
        self.0.get(term).map(String::as_str)
    }

    /// Number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the page had no usable facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(term, definition)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.0.iter()
    }

    fn insert(&mut self, term: String, definition: String) {
        self.0.insert(term, definition);
    }
}

impl<'a> IntoIterator for &'a Facts {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the facts mapping from the first facts list in `doc`.
///
/// Returns an empty mapping when the page has no facts list. Pairs whose
/// term or definition is empty after trimming are skipped; a later pair with
/// the same term overwrites an earlier one.
#[must_use]
pub fn parse_facts(doc: &Document, selectors: &Selectors) -> Facts {
    let mut facts = Facts::default();

    let Some(list) = dom::select_first(doc, &selectors.facts_list) else {
        debug!(selector = %selectors.facts_list, "no facts list on page");
        return facts;
    };

    let terms = dom::select_all(&list, &selectors.term);
    let definitions = dom::select_all(&list, &selectors.definition);
    if terms.len() != definitions.len() {
        debug!(
            terms = terms.len(),
            definitions = definitions.len(),
            "facts list has unbalanced terms and definitions; pairing by position"
        );
    }

    for (term, definition) in terms.iter().zip(&definitions) {
        let Some(label) = term_text(term, selectors) else {
            continue;
        };
        let value = definition_text(definition, selectors);

        let label = label.trim();
        let value = value.trim();
        if label.is_empty() || value.is_empty() {
            continue;
        }

        facts.insert(label.to_string(), value.to_string());
    }

    facts
}

/// Label from the first text child of the heading in a term container.
fn term_text(term: &Selection, selectors: &Selectors) -> Option<String> {
    dom::first(term, &selectors.term_heading).and_then(|heading| dom::first_text(&heading))
}

/// Value of a definition container, first non-empty of: nested heading,
/// abbreviations joined by ", ", all text nodes joined by a space.
///
/// Only the heading's first direct text child is read. When the heading wraps
/// the abbreviations, that child is a separator such as `", "`, which counts
/// as empty and hands over to the abbreviation tier.
fn definition_text(definition: &Selection, selectors: &Selectors) -> String {
    let heading = dom::first(definition, &selectors.definition_heading)
        .and_then(|heading| dom::first_text(&heading))
        .unwrap_or_default();
    if !matches!(heading.trim(), "" | ",") {
        return heading;
    }

    let abbreviations = dom::select_all(definition, &selectors.abbreviation)
        .iter()
        .filter_map(dom::own_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !abbreviations.is_empty() {
        return abbreviations;
    }

    dom::text_nodes(definition)
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
