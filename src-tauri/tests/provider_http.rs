//! Integration tests for the word provider
//!
//! These tests run `WordProvider` against a local stub of the generateContent
//! endpoint and check every success and failure path end to end.

use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;

use dharma_words_lib::config::ProviderConfig;
use dharma_words_lib::error::{ConfigError, ProviderError};
use dharma_words_lib::provider::WordProvider;
use dharma_words_lib::state::DharmaService;

/// What the stub saw for the single request it served
struct CapturedRequest {
    head: String,
    body: Value,
}

/// Serve one HTTP response and report the request that produced it.
async fn serve_once(status: u16, body: String) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        // Read headers, then as much body as Content-Length promises
        let (head, body) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                while buf.len() < pos + 4 + content_length {
                    let n = socket.read(&mut chunk).await.unwrap();
                    assert!(n > 0, "client closed before sending body");
                    buf.extend_from_slice(&chunk[..n]);
                }
                break (head, buf[pos + 4..pos + 4 + content_length].to_vec());
            }
        };

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(CapturedRequest {
            head,
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });
    });

    (base_url, rx)
}

/// Wrap model text the way generateContent does
fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn provider_for(base_url: &str) -> WordProvider {
    let config = ProviderConfig::new("test-key")
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    WordProvider::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_valid_word() {
    let (base_url, captured) = serve_once(
        200,
        envelope(r#"{"title": "Equanimidade", "explanation": "Texto X"}"#),
    )
    .await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    let word = result.expect("Fetch should succeed");
    assert_eq!(word.title, "Equanimidade");
    assert_eq!(word.explanation, "Texto X");

    let request = captured.await.unwrap();
    assert!(request
        .head
        .starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent"));
    assert!(request
        .head
        .to_ascii_lowercase()
        .contains("x-goog-api-key: test-key"));
    assert_eq!(
        request.body["generationConfig"]["responseSchema"]["required"],
        json!(["title", "explanation"])
    );
    assert_eq!(
        request.body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}

#[tokio::test]
async fn test_fetch_empty_text_is_empty_response() {
    let (base_url, _captured) = serve_once(200, envelope("")).await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    assert!(matches!(result, Err(ProviderError::EmptyResponse)));
}

#[tokio::test]
async fn test_fetch_without_candidates_is_empty_response() {
    let (base_url, _captured) = serve_once(200, json!({ "candidates": [] }).to_string()).await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    assert!(matches!(result, Err(ProviderError::EmptyResponse)));
}

#[tokio::test]
async fn test_fetch_non_json_text_is_malformed() {
    let (base_url, _captured) = serve_once(200, envelope("not json")).await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    match result {
        Err(ProviderError::MalformedResponse { raw, .. }) => assert_eq!(raw, "not json"),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_missing_explanation_is_non_conforming() {
    let (base_url, _captured) = serve_once(200, envelope(r#"{"title": "Equanimidade"}"#)).await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    assert!(matches!(result, Err(ProviderError::NonConforming)));
}

#[tokio::test]
async fn test_fetch_error_status_is_api_error() {
    let (base_url, _captured) = serve_once(
        403,
        json!({ "error": { "code": 403, "message": "API key not valid" } }).to_string(),
    )
    .await;

    let result = timeout(Duration::from_secs(5), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    match result {
        Err(ProviderError::Api { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = timeout(Duration::from_secs(10), provider_for(&base_url).fetch_dharma_word())
        .await
        .expect("Fetch timed out");

    assert!(matches!(result, Err(ProviderError::Transport(_))));
}

#[tokio::test]
async fn test_service_counts_and_forwards_fetches() {
    let (base_url, _captured) =
        serve_once(200, envelope(r#"{"title": "Metta", "explanation": "Amor"}"#)).await;

    let config = ProviderConfig::new("test-key").with_base_url(&base_url);
    let service = DharmaService::from_config(config);

    let word = timeout(Duration::from_secs(5), service.fetch_dharma_word())
        .await
        .expect("Fetch timed out")
        .unwrap();

    assert_eq!(word.title, "Metta");
    assert_eq!(service.fetch_count(), 1);
}

#[tokio::test]
async fn test_missing_credential_never_reaches_network() {
    let config = ProviderConfig::from_lookup(|_| None);
    assert!(matches!(config, Err(ConfigError::MissingVar("API_KEY"))));

    let service = DharmaService::unconfigured(config.err().unwrap());
    let result = service.fetch_dharma_word().await;
    assert!(matches!(result, Err(ProviderError::Config(_))));
}
