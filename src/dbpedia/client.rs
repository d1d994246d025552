//! DBPedia SPARQL endpoint client
//!
//! [`GraphSource`] is the seam between the summary logic and the network: it
//! turns a resource URI into a parsed RDF/JSON document. [`DbpediaClient`] is
//! the reqwest implementation. It issues a single `DESCRIBE` query per call:
//! - no retry
//! - no caching
//! - request timeout from [`DbpediaConfig`]

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, USER_AGENT},
    Client, Response,
};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::DbpediaConfig;
use crate::utils::error::FetchError;

/// Response format requested from the endpoint
pub const RDF_JSON_FORMAT: &str = "application/rdf+json";

/// Source of RDF/JSON graphs for DBPedia resources
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Fetch every known triple about `resource_uri`
    ///
    /// `Value::Null` or an empty object means the resource is unknown.
    async fn fetch_graph(&self, resource_uri: &str) -> Result<Value, FetchError>;
}

/// SPARQL `DESCRIBE` query for a resource
pub fn describe_query(resource_uri: &str) -> String {
    format!("DESCRIBE <{resource_uri}>")
}

/// HTTP client for a DBPedia SPARQL endpoint
pub struct DbpediaClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// SPARQL endpoint URL
    endpoint: String,

    user_agent: HeaderValue,
}

impl DbpediaClient {
    /// Create a client for the public DBPedia endpoint
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new() -> Result<Self, FetchError> {
        Self::from_config(&DbpediaConfig::default())
    }

    /// Create a client from endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for an unparsable endpoint,
    /// `FetchError::InvalidHeader` for a user agent that is not a valid header
    /// value and `FetchError::Http` if the HTTP client cannot be created
    pub fn from_config(config: &DbpediaConfig) -> Result<Self, FetchError> {
        Url::parse(&config.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.endpoint)))?;

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| FetchError::InvalidHeader(format!("user agent: {e}")))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            user_agent,
        })
    }

    /// Create a client for a custom endpoint, e.g. a mock server in tests
    ///
    /// # Errors
    ///
    /// Same as [`DbpediaClient::from_config`]
    pub fn with_endpoint(endpoint: &str) -> Result<Self, FetchError> {
        Self::from_config(&DbpediaConfig {
            endpoint: endpoint.to_string(),
            ..Default::default()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse the response body as JSON
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Decode` if the body is not valid JSON
    async fn decode_response(response: Response) -> Result<Value, FetchError> {
        let bytes = response.bytes().await.map_err(Self::transport_error)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn transport_error(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }

    /// Build HTTP headers for SPARQL requests
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, self.user_agent.clone());

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/rdf+json,application/json;q=0.9"),
        );
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        headers
    }
}

#[async_trait]
impl GraphSource for DbpediaClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_graph(&self, resource_uri: &str) -> Result<Value, FetchError> {
        let query = describe_query(resource_uri);

        let response = self
            .client
            .get(&self.endpoint)
            .headers(self.build_headers())
            .query(&[("query", query.as_str()), ("format", RDF_JSON_FORMAT)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        debug!(status = %status, "SPARQL endpoint responded");

        if !status.is_success() {
            return Err(FetchError::ServerError(status.as_u16()));
        }

        Self::decode_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_query() {
        assert_eq!(
            describe_query("http://dbpedia.org/resource/Berlin"),
            "DESCRIBE <http://dbpedia.org/resource/Berlin>"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = DbpediaClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().endpoint(), "http://dbpedia.org/sparql/");
    }

    #[test]
    fn test_client_with_endpoint() {
        let client = DbpediaClient::with_endpoint("http://localhost:8890/sparql").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8890/sparql");
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = DbpediaClient::with_endpoint("not a url");
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let result = DbpediaClient::from_config(&DbpediaConfig {
            user_agent: "wikimeta\nX-Injected: 1".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(FetchError::InvalidHeader(_))));
    }

    #[test]
    fn test_headers() {
        let client = DbpediaClient::new().unwrap();
        let headers = client.build_headers();

        assert!(headers
            .get(ACCEPT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with(RDF_JSON_FORMAT));
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("wikimeta/"));
        assert!(headers.contains_key(ACCEPT_ENCODING));
    }
}
