use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /analyze`.
///
/// Fields holding anything other than a JSON string read as absent, so a
/// stray `ioc` value never hides a valid query.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text incident description. Required and non-empty.
    #[serde(default, deserialize_with = "string_or_none")]
    pub query: Option<String>,
    /// Indicator of compromise supplied alongside the query.
    #[serde(default, deserialize_with = "string_or_none")]
    pub ioc: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// HTML report fragment.
    pub response: String,
}
