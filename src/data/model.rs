use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Company – one record of the source collection
// ---------------------------------------------------------------------------

/// A single company entry, immutable once loaded.
///
/// Missing or `null` text fields become empty, and a revenue that is not a
/// string is treated as absent, so one sparse record never drops out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    /// Categorical; matched by exact equality.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub sector: String,
    /// Comma-separated hierarchy, country last: `"Austin, TX, USA"`.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
    /// Free-form revenue text (`"$10M"`, `"$10M to $50M"`, `"$10-50M"`).
    /// `None` when the field is missing or not a string.
    #[serde(default, deserialize_with = "string_or_none")]
    pub revenue: Option<String>,
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl Company {
    /// Country of this company: the last `", "`-separated segment of its location.
    pub fn country(&self) -> &str {
        country_of(&self.location)
    }
}

/// Extract the country from a location string.
///
/// A location without any `", "` separator is itself the country.
pub fn country_of(location: &str) -> &str {
    location.rsplit(", ").next().unwrap_or(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_is_last_segment() {
        assert_eq!(country_of("Austin, TX, USA"), "USA");
        assert_eq!(country_of("London, UK"), "UK");
    }

    #[test]
    fn test_country_without_comma_is_whole_location() {
        assert_eq!(country_of("Remote"), "Remote");
        assert_eq!(country_of(""), "");
    }

    #[test]
    fn test_country_splits_on_comma_space_only() {
        // A bare comma is not a separator.
        assert_eq!(country_of("Berlin,Germany"), "Berlin,Germany");
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let company: Company = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.sector, "");
        assert_eq!(company.revenue, None);

        let company: Company =
            serde_json::from_str(r#"{"name": "Acme", "revenue": null}"#).unwrap();
        assert_eq!(company.revenue, None);
    }

    #[test]
    fn test_null_text_and_non_string_revenue_keep_record() {
        let company: Company = serde_json::from_str(
            r#"{"name": "Acme", "sector": null, "description": null, "revenue": 10}"#,
        )
        .unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.sector, "");
        assert_eq!(company.description, "");
        assert_eq!(company.revenue, None);
    }
}
