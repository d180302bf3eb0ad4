//! Seed list for the product crawl.
//!
//! The seed list is plain data handed to the fetching host: a crawl name,
//! the domains it may visit and the product pages it starts from. The
//! built-in list covers the spring order; other lists load from JSON:
//!
//! ```json
//! {
//!   "name": "2026SpringBuy",
//!   "allowed_domains": ["johnnyseeds.com"],
//!   "start_urls": ["https://www.johnnyseeds.com/vegetables/..."]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::url_utils;
use crate::Result;

const DEFAULT_NAME: &str = "2026SpringBuy";

const DEFAULT_DOMAINS: &[&str] = &["johnnyseeds.com"];

const DEFAULT_START_URLS: &[&str] = &[
    "https://www.johnnyseeds.com/vegetables/onions/bunching-onions/deep-purple-onion-seed-491.html",
    "https://www.johnnyseeds.com/vegetables/tomatoes/heirloom-tomatoes/san-marzano-ii-organic-tomato-seed-3405G.html",
    "https://www.johnnyseeds.com/vegetables/lettuce/butterhead-lettuce-boston/milagro-organic-lettuce-seed-4215G.html",
    "https://www.johnnyseeds.com/vegetables/chicory/endive/curlesi-organic-endive-seed-3448G.html",
    "https://www.johnnyseeds.com/vegetables/chicory/radicchio/perseo-radicchio-seed-3099.html",
    "https://www.johnnyseeds.com/vegetables/chicory/radicchio/bel-fiore-radicchio-seed-3113.html",
    "https://www.johnnyseeds.com/vegetables/cucumbers/seedless-and-thin-skinned-cucumbers/diva-cucumber-seed-2198.html",
    "https://www.johnnyseeds.com/vegetables/cucumbers/specialty-cucumbers/quick-snack-f1-cucumber-seed-5158.html",
    "https://www.johnnyseeds.com/vegetables/radishes/round-radishes/sora-organic-radish-seed-612G.html",
    "https://www.johnnyseeds.com/vegetables/radishes/round-radishes/donato-f1-radish-seed-4910.html",
    "https://www.johnnyseeds.com/vegetables/greens/specialty-greens/red-leaf-vegetable-amaranth-specialty-green-seed-516.html",
    "https://www.johnnyseeds.com/vegetables/lettuce/romaine-lettuce-cos/tendita-lettuce-seed-4595.html",
    "https://www.johnnyseeds.com/vegetables/chinese-cabbage/citrus-f1-chinese-cabbage-seed-4271.html",
    "https://www.johnnyseeds.com/vegetables/chicory/italian-dandelion/italiko-red-italian-dandelion-seed-3358.html",
    "https://www.johnnyseeds.com/vegetables/chicory/italian-dandelion/catalogna-special-italian-dandelion-seed-375.html",
    "https://www.johnnyseeds.com/vegetables/chicory/endive/sempre-bianca-endive-seed-4265.html",
    "https://www.johnnyseeds.com/vegetables/chicory/escarole/eros-organic-escarole-seed-2811G.html",
];

/// Starting point of a product crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedList {
    /// Crawl name, used by the host to label its output.
    pub name: String,

    /// Domains the crawl may visit. Subdomains are included; an empty list
    /// allows every host.
    #[serde(default)]
    pub allowed_domains: Vec<String>,

    /// Product pages to fetch.
    pub start_urls: Vec<String>,
}

impl Default for SeedList {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            allowed_domains: DEFAULT_DOMAINS.iter().map(ToString::to_string).collect(),
            start_urls: DEFAULT_START_URLS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SeedList {
    /// Decode a seed list from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if the JSON is malformed or lacks
    /// `name` or `start_urls`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a seed list from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Json`] if it cannot be decoded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Whether `url` lies within the allowed domains.
    #[must_use]
    pub fn is_allowed(&self, url: &Url) -> bool {
        if self.allowed_domains.is_empty() {
            return true;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        self.allowed_domains
            .iter()
            .any(|domain| url_utils::host_matches_domain(host, domain))
    }

    /// Start URLs that parse as absolute http(s) URLs within the allowed
    /// domains, in list order. Rejected entries are logged and skipped.
    #[must_use]
    pub fn urls(&self) -> Vec<Url> {
        self.start_urls
            .iter()
            .filter_map(|raw| match url_utils::parse_page_url(raw) {
                Ok(url) if self.is_allowed(&url) => Some(url),
                Ok(url) => {
                    warn!(url = %url, crawl = %self.name, "seed outside allowed domains; skipping");
                    None
                }
                Err(err) => {
                    warn!(error = %err, crawl = %self.name, "invalid seed; skipping");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    #[test]
    fn default_list_is_fully_allowed() {
        let seeds = SeedList::default();
        assert_eq!(seeds.name, "2026SpringBuy");
        assert_eq!(seeds.start_urls.len(), 17);
        assert_eq!(seeds.urls().len(), 17);
    }

    #[test]
    fn foreign_and_invalid_seeds_are_skipped() {
        let seeds = SeedList {
            name: "test".to_string(),
            allowed_domains: vec!["johnnyseeds.com".to_string()],
            start_urls: vec![
                "https://www.johnnyseeds.com/a.html".to_string(),
                "https://example.com/b.html".to_string(),
                "not a url".to_string(),
            ],
        };
        let urls = seeds.urls();
        assert_eq!(urls, vec![url("https://www.johnnyseeds.com/a.html")]);
    }

    #[test]
    fn empty_domain_list_allows_everything() {
        let seeds = SeedList {
            name: "open".to_string(),
            allowed_domains: Vec::new(),
            start_urls: Vec::new(),
        };
        assert!(seeds.is_allowed(&url("https://anything.example/")));
    }

    #[test]
    fn decodes_json_without_domains() {
        let seeds = SeedList::from_json(r#"{"name": "fall", "start_urls": ["https://a.example/x"]}"#)
            .expect("valid seed list");
        assert_eq!(seeds.name, "fall");
        assert!(seeds.allowed_domains.is_empty());
        assert_eq!(seeds.urls().len(), 1);
    }

    #[test]
    fn json_without_start_urls_is_rejected() {
        assert!(SeedList::from_json(r#"{"name": "fall"}"#).is_err());
    }
}
