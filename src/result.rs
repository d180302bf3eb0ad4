//! Result type for extraction output.
//!
//! One [`ProductRecord`] is produced per product page. Field names on the
//! wire are fixed; absent values serialize as `null`.

use serde::{Deserialize, Serialize};

/// Normalized product attributes extracted from one detail page.
///
/// All text fields are optional: a page missing a source still yields a
/// record, with that field set to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Title and subtitle joined by a single space.
    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// Botanical name, from the `scientific_name` accordion section.
    #[serde(rename = "Scientific_name")]
    pub scientific_name: Option<String>,

    /// From the "Days To Maturity" fact.
    #[serde(rename = "Days_to_maturity")]
    pub days_to_maturity: Option<String>,

    /// From the "Life Cycle" fact.
    #[serde(rename = "Life_cycle")]
    pub life_cycle: Option<String>,

    /// From the "Disease Resistance Codes" fact.
    #[serde(rename = "Disease_resistance")]
    pub disease_resistance: Option<String>,

    /// From the "Hybrid Status" fact.
    #[serde(rename = "Hybrid_status")]
    pub hybrid_status: Option<String>,

    /// Absolute URL of the germination guide image, if any (zero or one entry).
    ///
    /// These are the URLs an image downloader should fetch.
    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Cultivation notes, from the `culture` accordion section.
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

impl ProductRecord {
    /// True when no field at all could be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_urls.is_empty()
            && [
                &self.name,
                &self.scientific_name,
                &self.days_to_maturity,
                &self.life_cycle,
                &self.disease_resistance,
                &self.hybrid_status,
                &self.notes,
            ]
            .iter()
            .all(|field| field.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_fixed_keys_and_nulls() {
        let record = ProductRecord {
            name: Some("Deep Purple Onion".to_string()),
            ..ProductRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serializable");

        assert_eq!(json["Name"], "Deep Purple Onion");
        assert!(json["Scientific_name"].is_null());
        assert!(json["Days_to_maturity"].is_null());
        assert!(json["Life_cycle"].is_null());
        assert!(json["Disease_resistance"].is_null());
        assert!(json["Hybrid_status"].is_null());
        assert!(json["Notes"].is_null());
        assert_eq!(json["image_urls"], serde_json::json!([]));
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(8));
    }

    #[test]
    fn default_record_is_empty() {
        assert!(ProductRecord::default().is_empty());
        let record = ProductRecord {
            image_urls: vec!["https://example.com/g.jpg".to_string()],
            ..ProductRecord::default()
        };
        assert!(!record.is_empty());
    }
}
