//! Error types for configuration and the word provider

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("request to generative API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generative API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("received empty response from generative API")]
    EmptyResponse,

    #[error("failed to parse Dharma word from API response: {source}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API response does not conform to the Dharma word structure")]
    NonConforming,
}

impl ProviderError {
    /// Stable short tag for logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Transport(_) => "transport",
            Self::Api { .. } => "api",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::NonConforming => "non_conforming_response",
        }
    }
}
