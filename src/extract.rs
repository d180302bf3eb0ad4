//! Page extraction.
//!
//! Runs the independent passes over one product page (title, facts,
//! germination image, accordion) and merges them into a [`ProductRecord`].
//! No pass can fail the record; a missing source only blanks its fields.

use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::accordion::{self, parse_accordion};
use crate::dom;
use crate::facts::{self, parse_facts};
use crate::options::Selectors;
use crate::result::ProductRecord;
use crate::url_utils;
use crate::Options;

/// Main entry point for extracting one parsed document.
pub(crate) fn extract_record(doc: &Document, options: &Options) -> ProductRecord {
    let selectors = &options.selectors;

    let name = extract_title(doc, selectors);
    let facts = parse_facts(doc, selectors);
    let base_url = url_utils::document_base_url(doc, options.base_url.as_ref());
    let image = extract_germination_image(doc, selectors, base_url.as_ref());
    let sections = parse_accordion(doc, selectors);

    debug!(
        name = name.as_deref().unwrap_or("<none>"),
        facts = facts.len(),
        sections = sections.len(),
        has_image = image.is_some(),
        "extracted product page"
    );

    let fact = |term: &str| facts.get(term).map(str::to_string);
    let section = |key: &str| sections.get(key).map(str::to_string);

    ProductRecord {
        name,
        scientific_name: section(accordion::SCIENTIFIC_NAME),
        days_to_maturity: fact(facts::DAYS_TO_MATURITY),
        life_cycle: fact(facts::LIFE_CYCLE),
        disease_resistance: fact(facts::DISEASE_RESISTANCE),
        hybrid_status: fact(facts::HYBRID_STATUS),
        image_urls: image.into_iter().collect(),
        notes: section(accordion::CULTURE),
    }
}

/// Product name: trimmed title and subtitle joined by one space.
///
/// `None` unless both elements are present with non-blank text.
#[must_use]
pub fn extract_title(doc: &Document, selectors: &Selectors) -> Option<String> {
    let part = |css: &str| {
        dom::select_first(doc, css)
            .and_then(|el| dom::first_text(&el))
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    };

    let title = part(&selectors.title);
    let subtitle = part(&selectors.subtitle);
    match (title, subtitle) {
        (Some(title), Some(subtitle)) => Some(format!("{title} {subtitle}")),
        (title, subtitle) => {
            debug!(
                has_title = title.is_some(),
                has_subtitle = subtitle.is_some(),
                "product name incomplete"
            );
            None
        }
    }
}

/// Absolute URL of the germination guide image.
///
/// `None` when the image is absent, has no `src`, or its `src` cannot be made
/// absolute against `base_url`.
#[must_use]
pub fn extract_germination_image(
    doc: &Document,
    selectors: &Selectors,
    base_url: Option<&Url>,
) -> Option<String> {
    let src = dom::select_first(doc, &selectors.germination_image)
        .and_then(|img| dom::get_attribute(&img, "src"))?;

    let resolved = url_utils::resolve_url(&src, base_url);
    if resolved.is_none() {
        debug!(src = %src, "germination image source could not be resolved");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_requires_both_parts() {
        let selectors = Selectors::default();
        let doc = Document::from(r#"<h1 class="product-name">Deep Purple</h1>"#);
        assert_eq!(extract_title(&doc, &selectors), None);

        let doc = Document::from(r#"<span class="product-alternate-name">Onion</span>"#);
        assert_eq!(extract_title(&doc, &selectors), None);
    }

    #[test]
    fn title_parts_trimmed_and_joined() {
        let doc = Document::from(
            r#"<h1 class="product-name">
                 Deep Purple
               </h1>
               <span class="product-alternate-name">  Onion </span>"#,
        );
        assert_eq!(
            extract_title(&doc, &Selectors::default()).as_deref(),
            Some("Deep Purple Onion")
        );
    }

    #[test]
    fn title_reads_first_text_child_only() {
        let doc = Document::from(
            r#"<h1 class="product-name">Deep Purple<sup>TM</sup> Select</h1>
               <span class="product-alternate-name">Onion</span>"#,
        );
        assert_eq!(
            extract_title(&doc, &Selectors::default()).as_deref(),
            Some("Deep Purple Onion")
        );
    }

    #[test]
    fn blank_subtitle_counts_as_missing() {
        let doc = Document::from(
            r#"<h1 class="product-name">Deep Purple</h1><span class="product-alternate-name">  </span>"#,
        );
        assert_eq!(extract_title(&doc, &Selectors::default()), None);
    }

    #[test]
    fn germination_image_resolved_against_base() {
        let doc = Document::from(r#"<img class="c-facts__supplementary_image" src="/img/g.jpg">"#);
        let base = Url::parse("https://example.com/page.html").expect("valid url");
        assert_eq!(
            extract_germination_image(&doc, &Selectors::default(), Some(&base)).as_deref(),
            Some("https://example.com/img/g.jpg")
        );
    }

    #[test]
    fn germination_image_without_src_is_none() {
        let doc = Document::from(r#"<img class="c-facts__supplementary_image" alt="guide">"#);
        assert_eq!(extract_germination_image(&doc, &Selectors::default(), None), None);
    }
}
