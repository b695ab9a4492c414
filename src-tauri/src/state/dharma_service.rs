use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::{ConfigError, ProviderError};
use crate::models::DharmaWord;
use crate::provider::WordProvider;

/// Tauri-managed state: the word provider, or the reason it could not be built.
#[derive(Clone)]
pub struct DharmaService {
    provider: Result<WordProvider, ConfigError>,
    /// Monotonic id attached to each fetch for log correlation
    fetch_seq: Arc<AtomicU64>,
}

impl DharmaService {
    /// Wrap an already-built provider
    pub fn new(provider: WordProvider) -> Self {
        Self {
            provider: Ok(provider),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A service whose every fetch fails with `error` before touching the network
    pub fn unconfigured(error: ConfigError) -> Self {
        Self {
            provider: Err(error),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Resolve configuration from the environment and build the provider.
    ///
    /// Configuration problems are logged and kept so each fetch can report them.
    pub fn from_env() -> Self {
        match ProviderConfig::from_env() {
            Ok(config) => {
                tracing::info!("Provider configured: {:?}", config);
                Self::from_config(config)
            }
            Err(e) => {
                tracing::error!("Word provider not configured: {}", e);
                Self::unconfigured(e)
            }
        }
    }

    pub fn from_config(config: ProviderConfig) -> Self {
        match WordProvider::new(config) {
            Ok(provider) => Self::new(provider),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                Self::unconfigured(ConfigError::HttpClient(e.to_string()))
            }
        }
    }

    /// True if a provider is available
    pub const fn is_configured(&self) -> bool {
        self.provider.is_ok()
    }

    /// Number of fetches attempted so far
    pub fn fetch_count(&self) -> u64 {
        self.fetch_seq.load(Ordering::Relaxed)
    }

    /// Fetch one word, logging the outcome and the error kind on failure.
    pub async fn fetch_dharma_word(&self) -> Result<DharmaWord, ProviderError> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!("Fetch #{} started", seq);

        let provider = match &self.provider {
            Ok(provider) => provider,
            Err(e) => {
                tracing::error!("Fetch #{} rejected: {}", seq, e);
                return Err(ProviderError::Config(e.clone()));
            }
        };

        match provider.fetch_dharma_word().await {
            Ok(word) => {
                tracing::info!("Fetch #{} succeeded: {:?}", seq, word.title);
                Ok(word)
            }
            Err(e) => {
                tracing::error!("Fetch #{} failed [{}]: {}", seq, e.kind(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_service_fails_fast_with_config_error() {
        let service = DharmaService::unconfigured(ConfigError::MissingVar("API_KEY"));
        assert!(!service.is_configured());

        let result = service.fetch_dharma_word().await;
        assert!(matches!(
            result,
            Err(ProviderError::Config(ConfigError::MissingVar("API_KEY")))
        ));
    }

    #[tokio::test]
    async fn test_fetch_count_increments_per_attempt() {
        let service = DharmaService::unconfigured(ConfigError::MissingVar("API_KEY"));
        assert_eq!(service.fetch_count(), 0);

        let _ = service.fetch_dharma_word().await;
        let _ = service.fetch_dharma_word().await;
        assert_eq!(service.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_clone_shares_fetch_counter() {
        let service = DharmaService::unconfigured(ConfigError::MissingVar("API_KEY"));
        let cloned = service.clone();

        let _ = cloned.fetch_dharma_word().await;
        assert_eq!(service.fetch_count(), 1);
    }

    #[test]
    fn test_from_config_builds_provider() {
        let service = DharmaService::from_config(ProviderConfig::new("k"));
        assert!(service.is_configured());
    }
}
