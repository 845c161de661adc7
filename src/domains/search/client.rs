//! HTTP client for the Tavily Search API.

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use super::error::{SearchError, SearchResult};
use super::request::SearchRequest;
use crate::core::{Config, Error, Result};

/// Anything that can answer a [`SearchRequest`].
///
/// The response schema belongs to the remote API, so successful results are
/// plain JSON values.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Submit a single search and return the remote response body.
    async fn submit(&self, request: SearchRequest) -> SearchResult<serde_json::Value>;
}

/// Client posting search payloads to the Tavily `/search` endpoint.
#[derive(Clone)]
pub struct TavilyClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    api_key: Option<String>,
}

impl TavilyClient {
    /// Build a client from the loaded configuration.
    ///
    /// The credential is taken once from the configuration; a missing key is
    /// not an error here, only at submission time.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.search.endpoint).map_err(|e| {
            Error::config(format!(
                "invalid search endpoint '{}': {}",
                config.search.endpoint, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        let api_key = config
            .credentials
            .tavily_api_key
            .clone()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("TAVILY_API_KEY not set - every search will return an error result");
        }

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl SearchBackend for TavilyClient {
    #[instrument(skip_all, fields(query = %request.query))]
    async fn submit(&self, mut request: SearchRequest) -> SearchResult<serde_json::Value> {
        let Some(api_key) = self.api_key.as_ref() else {
            warn!("Search rejected: no API key configured");
            return Err(SearchError::MissingApiKey);
        };
        request.api_key = Some(api_key.clone());

        info!("Submitting search to {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Search request failed: {}", e);
                SearchError::from(e)
            })?;

        let body = response.json::<serde_json::Value>().await.map_err(|e| {
            error!("Search response could not be decoded: {}", e);
            SearchError::from(e)
        })?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone)]
    struct Stub {
        hits: Arc<AtomicUsize>,
        status: StatusCode,
    }

    async fn stub_search(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        stub.hits.fetch_add(1, Ordering::SeqCst);
        (stub.status, Json(json!({ "received": body, "results": [] })))
    }

    /// Serve a stub `/search` endpoint on an ephemeral port.
    async fn spawn_stub(status: StatusCode) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new().route("/search", post(stub_search)).with_state(Stub {
            hits: hits.clone(),
            status,
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        (format!("http://{}/search", addr), hits)
    }

    fn config_for(endpoint: &str, api_key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.search.endpoint = endpoint.to_string();
        config.credentials.tavily_api_key = api_key.map(str::to_string);
        config
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let (url, hits) = spawn_stub(StatusCode::OK).await;
        let client = TavilyClient::new(&config_for(&url, None)).unwrap();

        let err = client.submit(SearchRequest::new("hello")).await.unwrap_err();

        assert!(matches!(err, SearchError::MissingApiKey));
        assert_eq!(err.to_string(), "TAVILY_API_KEY environment variable not set.");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_key_treated_as_missing() {
        let (url, hits) = spawn_stub(StatusCode::OK).await;
        let client = TavilyClient::new(&config_for(&url, Some(""))).unwrap();

        let err = client.submit(SearchRequest::new("hello")).await.unwrap_err();

        assert!(matches!(err, SearchError::MissingApiKey));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_relays_body_and_injects_key() {
        let (url, hits) = spawn_stub(StatusCode::OK).await;
        let client = TavilyClient::new(&config_for(&url, Some("tvly-test"))).unwrap();

        let body = client
            .submit(SearchRequest::new("hello").with_max_results(5))
            .await
            .unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            body,
            json!({
                "received": { "query": "hello", "max_results": 5, "api_key": "tvly-test" },
                "results": []
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_request_failure() {
        let (url, hits) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = TavilyClient::new(&config_for(&url, Some("tvly-test"))).unwrap();

        let err = client.submit(SearchRequest::new("hello")).await.unwrap_err();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(matches!(err, SearchError::Request(_)));
        assert!(err.to_string().starts_with("API request failed: "));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_failure() {
        let client =
            TavilyClient::new(&config_for("http://127.0.0.1:1/search", Some("tvly-test"))).unwrap();

        let err = client.submit(SearchRequest::new("hello")).await.unwrap_err();

        assert!(err.to_string().starts_with("API request failed: "));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = TavilyClient::new(&config_for("not a url", Some("tvly-test")));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
