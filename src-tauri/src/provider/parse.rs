use serde_json::Value;

use crate::error::ProviderError;
use crate::models::DharmaWord;

/// Turn the raw model output into a validated [`DharmaWord`].
///
/// Empty or missing text, invalid JSON, and JSON lacking a non-empty string
/// `title` or `explanation` each map to their own error.
pub fn parse_dharma_word(raw: Option<&str>) -> Result<DharmaWord, ProviderError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|source| ProviderError::MalformedResponse {
            raw: text.to_string(),
            source,
        })?;

    let field = |name: &str| value.get(name).and_then(Value::as_str);

    match (field("title"), field("explanation")) {
        (Some(title), Some(explanation)) => {
            DharmaWord::new(title, explanation).ok_or(ProviderError::NonConforming)
        }
        _ => Err(ProviderError::NonConforming),
    }
}
