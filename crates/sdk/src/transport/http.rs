//! HTTP transport layer for the Synchro SDK.

use crate::config::ClientConfig;
use crate::error::{SynchroError, SynchroResult};
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Query string as ordered key/value pairs. Keys may repeat.
pub type QueryPairs = Vec<(&'static str, String)>;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SynchroResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(concat!("synchro-sdk/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL from path segments relative to the base URL.
    ///
    /// Segments are percent-encoded, so identifiers containing `/` or spaces
    /// stay within their own segment.
    fn build_url(&self, segments: &[&str]) -> SynchroResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SynchroError::Config("base_url cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode a successful JSON body.
    async fn execute<T: DeserializeOwned>(&self, request_builder: RequestBuilder) -> SynchroResult<T> {
        let response = request_builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Upstream returned an error status");
            return Err(SynchroError::from_response(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> SynchroResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &QueryPairs,
    ) -> SynchroResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, params = query.len(), "GET request with query");

        self.execute(self.client.get(url).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use synchro_core::NetworkId;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        let mut config = ClientConfig::new(Url::parse(base_url).unwrap());
        config.network_id = NetworkId(3);
        config.timeout = Duration::from_secs(5);
        Arc::new(config)
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/networks/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let config = create_config(&format!("{}/v3", server.uri()));
        let transport = HttpTransport::new(config).unwrap();

        let result: TestResponse = transport.get(&["networks", "3"]).await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_with_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/proximity"))
            .and(query_param("lat", "45.5646"))
            .and(query_param("key", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "near".to_string(),
                value: 1,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let query: QueryPairs = vec![("lat", "45.5646".to_string()), ("key", "3".to_string())];
        let result: TestResponse = transport
            .get_with_query(&["networks", "3", "proximity"], &query)
            .await
            .unwrap();
        assert_eq!(result.message, "near");
    }

    #[tokio::test]
    async fn test_content_type_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "typed".to_string(),
                value: 0,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: TestResponse = transport.get(&["networks", "3"]).await.unwrap();
        assert_eq!(result.message, "typed");
    }

    #[tokio::test]
    async fn test_error_on_404_uses_upstream_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3/lines/ZZ"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Line not found"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: SynchroResult<TestResponse> = transport.get(&["networks", "3", "lines", "ZZ"]).await;
        match result {
            Err(SynchroError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Line not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_on_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/networks/3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: SynchroResult<TestResponse> = transport.get(&["networks", "3"]).await;
        assert!(matches!(result, Err(SynchroError::Json(_))));
    }

    #[tokio::test]
    async fn test_error_on_connection_refused() {
        let transport = HttpTransport::new(create_config("http://127.0.0.1:1")).unwrap();

        let result: SynchroResult<TestResponse> = transport.get(&["networks", "3"]).await;
        assert!(matches!(result, Err(SynchroError::Http(_))));
    }

    #[test]
    fn test_build_url() {
        let transport =
            HttpTransport::new(create_config("https://prod.instant-system.com/InstantCore/v3/")).unwrap();

        let url = transport.build_url(&["networks", "3", "lines"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://prod.instant-system.com/InstantCore/v3/networks/3/lines"
        );
    }

    #[test]
    fn test_build_url_encodes_segments() {
        let transport = HttpTransport::new(create_config("http://localhost:8080")).unwrap();

        let url = transport
            .build_url(&["networks", "3", "lines", "A/B C", "stopAreas"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/networks/3/lines/A%2FB%20C/stopAreas"
        );
    }
}
