/*
[INPUT]:  Base URL, network, credential, transport options
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation and shared send path
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Credential;
use crate::http::{Result, RocksideError};
use crate::types::{ApiErrorBody, Network};

/// HTTP transport configuration
///
/// No timeout is applied unless one is set here; callers that need
/// cancellation wrap calls with their own timer.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Main HTTP client for the Rockside API
#[derive(Debug, Clone)]
pub struct RocksideClient {
    http_client: Client,
    base_url: String,
    network: Network,
    credential: Credential,
    headers: HeaderMap,
}

impl RocksideClient {
    /// Create a new client with default transport configuration
    pub fn new(base_url: &str, network: Network, credential: Credential) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url, network, credential)
    }

    /// Create a new client with custom transport configuration
    pub fn with_config(
        config: ClientConfig,
        base_url: &str,
        network: Network,
        credential: Credential,
    ) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| RocksideError::Config(format!("invalid base url {base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(RocksideError::Config(format!(
                "base url {base_url:?} must be a plain origin or path without query or fragment"
            )));
        }
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_string();
        let headers = credential.headers()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url,
            network,
            credential,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Authentication headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Bearer token the client was configured with, for reuse by other integrations
    pub fn token(&self) -> Option<&str> {
        self.credential.token()
    }

    /// JSON-RPC endpoint for the configured network
    pub fn rpc_url(&self) -> String {
        format!("{}/ethereum/{}/jsonrpc", self.base_url, self.network.name())
    }
}

/// Validate a caller-supplied path parameter
pub(crate) fn path_param(value: &str) -> Result<&str> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(RocksideError::Config(format!("invalid path parameter {value:?}")));
    }
    Ok(value)
}

impl RocksideClient {
    /// Route under `/ethereum/{network}`
    pub(crate) fn network_route(&self, suffix: &str) -> String {
        format!("/ethereum/{}{}", self.network.name(), suffix)
    }

    /// Build request builder for a route, with authentication headers attached
    pub(crate) fn request(&self, method: Method, route: &str) -> Result<RequestBuilder> {
        let url = Url::parse(&format!("{}{}", self.base_url, route))?;
        Ok(self
            .http_client
            .request(method, url)
            .headers(self.headers.clone()))
    }

    /// Build request builder from path segments appended to the base URL
    ///
    /// Each segment is percent-encoded, so caller values cannot add
    /// segments, a query or a fragment.
    pub(crate) fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                RocksideError::Config(format!("base url {:?} has no path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(self
            .http_client
            .request(method, url)
            .headers(self.headers.clone()))
    }

    /// Send a request and decode its JSON body when the status is one of `expected`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected: &[StatusCode],
    ) -> Result<T> {
        let response = self.execute(builder, expected).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose success body carries nothing the caller needs
    pub(crate) async fn send_empty(
        &self,
        builder: RequestBuilder,
        expected: &[StatusCode],
    ) -> Result<()> {
        self.execute(builder, expected).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder, expected: &[StatusCode]) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "rockside response");

        if expected.contains(&status) {
            return Ok(response);
        }

        let body = response.bytes().await?;
        let error: ApiErrorBody = serde_json::from_slice(&body)?;
        warn!(
            %method,
            %url,
            status = status.as_u16(),
            message = %error.error,
            "rockside request failed"
        );
        Err(RocksideError::api_error(status, error.error))
    }
}
