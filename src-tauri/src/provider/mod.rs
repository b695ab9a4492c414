//! Word provider: one call to the generative API per fetch.

pub mod parse;
pub mod prompt;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::DharmaWord;

pub use parse::parse_dharma_word;
pub use prompt::{GenerateContentRequest, GenerateContentResponse, PROMPT};

/// Header carrying the API credential
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Fetches Dharma words from the generative API.
///
/// Built once from a validated [`ProviderConfig`]; each call to
/// [`WordProvider::fetch_dharma_word`] issues exactly one HTTP request with no
/// retries or caching.
#[derive(Debug, Clone)]
pub struct WordProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl WordProvider {
    /// Create a provider with an HTTP client honouring the configured timeout
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Generate a new Dharma word.
    ///
    /// # Errors
    /// * `Transport` - the request could not be sent or timed out
    /// * `Api` - the API answered with a non-success status
    /// * `EmptyResponse` / `MalformedResponse` / `NonConforming` - the answer
    ///   did not contain a usable word
    pub async fn fetch_dharma_word(&self) -> Result<DharmaWord, ProviderError> {
        let endpoint = self.config.endpoint();
        tracing::debug!("Requesting Dharma word from {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&GenerateContentRequest::dharma_word())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Generative API returned {}: {}", status, body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw_body = response.text().await?;
        // A body that is not a generateContent envelope carries no usable text
        let envelope = match serde_json::from_str::<GenerateContentResponse>(&raw_body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Unexpected generateContent envelope: {}", e);
                GenerateContentResponse::default()
            }
        };
        let text = envelope.text();

        let result = parse_dharma_word(text.as_deref());
        if let Err(ProviderError::MalformedResponse { raw, source }) = &result {
            tracing::error!(
                "Failed to parse JSON from generative API: {:?} ({})",
                raw,
                source
            );
        }
        result
    }
}
