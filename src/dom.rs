//! DOM Operations Adapter
//!
//! Small set of query helpers over the `dom_query` crate. Selectors come from
//! user-editable [`crate::Selectors`], so every query goes through
//! `try_select` and an invalid selector behaves like one that matches nothing.

pub use dom_query::{Document, NodeRef, Selection};

// === Querying ===

/// First element in `doc` matching `css`.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, css: &str) -> Option<Selection<'a>> {
    doc.try_select(css)
        .map(|found| found.first())
        .filter(|found| !found.is_empty())
}

/// First descendant of `sel` matching `css`.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>, css: &str) -> Option<Selection<'a>> {
    sel.try_select(css)
        .map(|found| found.first())
        .filter(|found| !found.is_empty())
}

/// All descendants of `sel` matching `css`, in document order.
#[must_use]
pub fn select_all<'a>(sel: &Selection<'a>, css: &str) -> Vec<Selection<'a>> {
    sel.try_select(css)
        .map(|found| found.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

// === Attributes ===

/// Get any attribute value of the first node
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase) of a node
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Text of the direct text children of the first node, concatenated.
///
/// Text inside child elements is not included. Returns `None` when the node
/// has no direct text children at all.
#[must_use]
pub fn own_text(sel: &Selection) -> Option<String> {
    let node = sel.nodes().first()?;

    let mut text = String::new();
    let mut found = false;
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() {
            text.push_str(&c.text());
            found = true;
        }
        child = c.next_sibling();
    }

    found.then_some(text)
}

/// Text of the first direct text child of the first node.
///
/// Later text children and text inside child elements are ignored, so
/// `<h3>Days To<br>Maturity</h3>` yields `"Days To"` and
/// `<h4><abbr>A</abbr>, <abbr>B</abbr></h4>` yields `", "`.
#[must_use]
pub fn first_text(sel: &Selection) -> Option<String> {
    let node = sel.nodes().first()?;

    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() {
            return Some(c.text().to_string());
        }
        child = c.next_sibling();
    }
    None
}

/// Every descendant text node of the first node, in document order.
#[must_use]
pub fn text_nodes(sel: &Selection) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(node) = sel.nodes().first() {
        collect_text_nodes(node, &mut out);
    }
    out
}

fn collect_text_nodes(node: &NodeRef, out: &mut Vec<String>) {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_text() {
            out.push(c.text().to_string());
        } else if c.is_element() {
            collect_text_nodes(&c, out);
        }
        child = c.next_sibling();
    }
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_text_skips_child_elements() {
        let doc = parse("<h1>Deep Purple <span>Onion</span></h1>");
        let h1 = select_first(&doc, "h1").expect("h1 present");
        assert_eq!(own_text(&h1).as_deref(), Some("Deep Purple "));
    }

    #[test]
    fn own_text_none_without_text_children() {
        let doc = parse("<h4><abbr>A</abbr></h4>");
        let h4 = select_first(&doc, "h4").expect("h4 present");
        assert_eq!(own_text(&h4), None);
    }

    #[test]
    fn first_text_stops_at_first_text_child() {
        let doc = parse("<h3>Days To<br>Maturity</h3><h4><abbr>A</abbr>, <abbr>B</abbr>, <abbr>C</abbr></h4>");
        let h3 = select_first(&doc, "h3").expect("h3 present");
        let h4 = select_first(&doc, "h4").expect("h4 present");
        assert_eq!(first_text(&h3).as_deref(), Some("Days To"));
        assert_eq!(first_text(&h4).as_deref(), Some(", "));
    }

    #[test]
    fn text_nodes_in_document_order() {
        let doc = parse("<dd>one <b>two</b> <i>three</i></dd>");
        let dd = select_first(&doc, "dd").expect("dd present");
        let texts: Vec<String> = text_nodes(&dd).iter().map(|t| t.trim().to_string()).collect();
        assert_eq!(texts, vec!["one", "two", "", "three"]);
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let doc = parse("<div><p>x</p></div>");
        assert!(select_first(&doc, "p[").is_none());
        let div = select_first(&doc, "div").expect("div present");
        assert!(select_all(&div, "::::").is_empty());
    }
}
