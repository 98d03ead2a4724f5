use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One article as the service sends it. Unknown fields are ignored.
///
/// The unfiltered listing sends `category: null`, and `description` may be
/// null as well; both become empty strings. The keys themselves are still
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    pub url: String,
    pub source: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("expected a JSON array of articles, got {found}")]
    NotAnArray { found: &'static str },
    #[error("article {index} is malformed: {message}")]
    InvalidArticle { index: usize, message: String },
}

/// Decode a `/api/news` body. The whole response is rejected if any entry is
/// malformed; entries are never dropped individually.
pub fn decode_articles(bytes: &[u8]) -> Result<Vec<NewsArticle>, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|err| DecodeError::InvalidArticle {
                index,
                message: err.to_string(),
            })
        })
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
