use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Target of a local run. The env file is loaded for diagnostics but does not
/// override the request target.
pub const BASE_URL: &str = "http://localhost:3000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Status and parsed body of a completed API call. Bodies that are not valid
/// JSON come through as `Value::Null`.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Whether the body carries a top-level `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.body.get(field).is_some()
    }
}

/// Thin client for the rental API under test. All requests go below the `/api`
/// root of the configured base URL.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    api_base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ProbeError> {
        Url::parse(base_url).map_err(|source| ProbeError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
        })
    }

    /// Sends one request and prints a one-line trace for it. Transport failures
    /// (timeout, refused connection, ...) are normalized to `None` so callers
    /// can treat "no response" as a plain assertion failure instead of an
    /// error path.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Option<ApiResponse> {
        let url = format!("{}{}", self.api_base, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(json) = payload {
            request = request.json(json);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                println!("{method} {url} -> {status}");
                let body = response.json::<Value>().await.unwrap_or(Value::Null);
                Some(ApiResponse { status, body })
            }
            Err(e) if e.is_timeout() => {
                println!("{method} {url} -> timed out");
                tracing::warn!("request timed out: {method} {url}");
                None
            }
            Err(e) => {
                println!("{method} {url} -> request error: {e}");
                tracing::warn!("request failed: {method} {url}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let client = ApiClient::new("not a url");
        assert!(matches!(client, Err(ProbeError::BaseUrl { .. })));
    }

    #[tokio::test]
    async fn test_send_returns_status_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let response = client.send(Method::GET, "/items", None, &[]).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.has_field("items"));
    }

    #[tokio::test]
    async fn test_send_sets_json_content_type_and_merges_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/upload-document"))
            .and(header("content-type", "application/json"))
            .and(header("x-user-id", "u-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let response = client
            .send(
                Method::POST,
                "/auth/upload-document",
                Some(&json!({"documentType": "passport"})),
                &[("x-user-id", "u-42")],
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_send_passes_query_suffix_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/items"))
            .and(query_param("category", "stream_equipment"))
            .and(query_param("search", "camera"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let response = client
            .send(
                Method::GET,
                "/items?category=stream_equipment&search=camera",
                None,
                &[],
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_send_normalizes_transport_failure_to_none() {
        // Port 9 (discard) is not listening; the connection is refused.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let response = client.send(Method::GET, "/items", None, &[]).await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_send_tolerates_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/invalid-endpoint"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let response = client
            .send(Method::GET, "/invalid-endpoint", None, &[])
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, Value::Null);
    }
}
