//! Data carried through the search path.

use serde::{Deserialize, Deserializer, Serialize};

/// One candidate resource scraped from the search result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Link text of the result.
    pub title: String,
    /// Destination URL, with search-engine redirects unwrapped.
    pub url: String,
    /// Short excerpt shown under the link.  Empty when the page had none.
    #[serde(default)]
    pub snippet: String,
}

/// Descriptive vehicle context used to sharpen the search query.
///
/// No validation is applied; absent fields simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// Model year.  Accepts either a JSON string or a JSON number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl VehicleInfo {
    /// Convenience constructor for fully specified vehicles.
    pub fn new(
        year: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            year: Some(year.into()),
            make: Some(make.into()),
            model: Some(model.into()),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}
