//! # seedinfo
//!
//! Structured product attributes from seed catalogue detail pages.
//!
//! Each product page spreads its attributes over three loosely structured
//! sources: a title/subtitle pair, a definition list of facts and an
//! accordion of free-text sections. This crate reads all three and merges
//! them into one flat [`ProductRecord`]. Fetching pages is left to the host
//! crawler; [`SeedList`] supplies the pages it should start from.
//!
//! ## Quick Start
//!
//! ```rust
//! use seedinfo::{extract_with_options, Options};
//!
//! let html = r#"<html><body>
//!   <h1 class="product-name">Deep Purple</h1>
//!   <span class="product-alternate-name">Onion</span>
//!   <dl class="c-facts__list">
//!     <dt><h3>Days To Maturity</h3></dt><dd><h4>60</h4></dd>
//!   </dl>
//! </body></html>"#;
//!
//! let options = Options::for_page("https://www.johnnyseeds.com/deep-purple-onion-seed-491.html")?;
//! let record = extract_with_options(html, &options);
//! assert_eq!(record.name.as_deref(), Some("Deep Purple Onion"));
//! assert_eq!(record.days_to_maturity.as_deref(), Some("60"));
//! # Ok::<(), seedinfo::Error>(())
//! ```
//!
//! Extraction never fails: a field whose source is missing is `None`.

mod error;
mod extract;
mod options;
mod result;

/// DOM query helpers over `dom_query`.
pub mod dom;

/// Facts list (definition list) parsing.
pub mod facts;

/// Accordion section parsing.
pub mod accordion;

/// URL utilities for base URL discovery and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Crawl seed list.
pub mod seeds;

// Public API - re-exports
pub use accordion::{parse_accordion, Accordion};
pub use dom_query::Document;
pub use error::{Error, Result};
pub use extract::{extract_germination_image, extract_title};
pub use facts::{parse_facts, Facts};
pub use options::{Options, Selectors};
pub use result::ProductRecord;
pub use seeds::SeedList;

/// Extracts a product record from an HTML document using default options.
///
/// With no base URL, a relative germination image source cannot be made
/// absolute and `image_urls` stays empty; use [`extract_with_options`] with
/// [`Options::for_page`] to keep it.
#[must_use]
pub fn extract(html: &str) -> ProductRecord {
    extract_with_options(html, &Options::default())
}

/// Extracts a product record from an HTML document with custom options.
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ProductRecord {
    extract_document(&dom::parse(html), options)
}

/// Extracts a product record from an already parsed document.
///
/// # Example
///
/// ```rust
/// use seedinfo::{extract_document, Document, Options};
///
/// let doc = Document::from("<html><body><p>Not a product page</p></body></html>");
/// let record = extract_document(&doc, &Options::default());
/// assert!(record.is_empty());
/// ```
#[must_use]
pub fn extract_document(doc: &Document, options: &Options) -> ProductRecord {
    extract::extract_record(doc, options)
}

/// Extracts a product record from HTML bytes with automatic encoding detection.
///
/// The charset is taken from `<meta charset>` or
/// `<meta http-equiv="Content-Type">`, defaulting to UTF-8. Invalid
/// characters are replaced with U+FFFD rather than causing errors.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ProductRecord {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts a product record from HTML bytes with custom options and
/// automatic encoding detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ProductRecord {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
