//! Configuration options for page extraction.
//!
//! `Options` carries the page URL used to absolutize image links and the
//! CSS selectors that locate each field source. Defaults target the
//! product detail pages of the built-in seed list; every selector can be
//! overridden from a JSON document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::url_utils;
use crate::Result;

/// Configuration options for page extraction.
///
/// # Example
///
/// ```rust
/// use seedinfo::Options;
///
/// let options = Options::for_page("https://www.johnnyseeds.com/vegetables/onions/x.html")?;
/// assert!(options.base_url.is_some());
/// # Ok::<(), seedinfo::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// URL the document was fetched from.
    ///
    /// Relative image sources are resolved against this URL (or against the
    /// document's `<base href>`, which takes precedence).
    ///
    /// Default: `None`
    pub base_url: Option<Url>,

    /// Selectors locating each field source on the page.
    pub selectors: Selectors,
}

impl Options {
    /// Options for a page fetched from `page_url`, with default selectors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if `page_url` is not an absolute
    /// http(s) URL.
    pub fn for_page(page_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Some(url_utils::parse_page_url(page_url)?),
            ..Self::default()
        })
    }

    /// Decode options from a JSON document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Json`] if it cannot be decoded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// CSS selectors for the three field sources and the germination image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Product title element.
    pub title: String,
    /// Product subtitle (alternate name) element.
    pub subtitle: String,
    /// Facts definition list; only the first match is used.
    pub facts_list: String,
    /// Term containers inside the facts list.
    pub term: String,
    /// Definition containers inside the facts list.
    pub definition: String,
    /// Heading carrying the term label inside a term container.
    pub term_heading: String,
    /// Heading carrying the value inside a definition container.
    pub definition_heading: String,
    /// Abbreviation elements inside a definition container.
    pub abbreviation: String,
    /// Supplementary germination guide image.
    pub germination_image: String,
    /// Accordion body holding the free-text sections.
    pub accordion: String,
    /// Tag name of the section headings inside the accordion body.
    pub accordion_heading: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            title: "h1.product-name".to_string(),
            subtitle: "span.product-alternate-name".to_string(),
            facts_list: "dl.c-facts__list".to_string(),
            term: "dt".to_string(),
            definition: "dd".to_string(),
            term_heading: "h3".to_string(),
            definition_heading: "h4".to_string(),
            abbreviation: "abbr".to_string(),
            germination_image: "img.c-facts__supplementary_image".to_string(),
            accordion: "div.c-accordion__body.s-lgc-pdp-content".to_string(),
            accordion_heading: "h2".to_string(),
        }
    }
}
