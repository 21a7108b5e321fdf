// Upstream client implementation
// Thin wrapper over the UniRate REST API; injects the api_key on every call

use std::error::Error as _;

use axum::http::StatusCode;
use reqwest::{header, Client};
use serde_json::Value;
use thiserror::Error;
use tokio::time::Duration;
use url::Url;

use crate::models::ApiKey;
use crate::proxy::config::ProxyConfig;

const USER_AGENT: &str = concat!("unirate-proxy/", env!("CARGO_PKG_VERSION"));

/// Upstream API resources exposed through the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    Currencies,
    Convert,
    Rates,
}

impl UpstreamEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            UpstreamEndpoint::Currencies => "currencies",
            UpstreamEndpoint::Convert => "convert",
            UpstreamEndpoint::Rates => "rates",
        }
    }
}

/// Outcome of a failed upstream call
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("API key not configured")]
    MissingApiKey,

    /// Upstream answered with a non-success HTTP status
    #[error("API Error: {}", .0.as_u16())]
    Status(StatusCode),

    /// Timeout, DNS failure, refused connection and similar
    #[error("{0}")]
    Transport(String),

    #[error("Invalid upstream response: {0}")]
    Payload(String),

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

impl UpstreamError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Status(status) => *status,
            UpstreamError::MissingApiKey
            | UpstreamError::Transport(_)
            | UpstreamError::Payload(_)
            | UpstreamError::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build a transport error without leaking the request URL (it carries the api_key)
    fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return UpstreamError::Transport("Upstream request timed out".to_string());
        }

        let err = err.without_url();
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        UpstreamError::Transport(description)
    }
}

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
    api_key: Option<ApiKey>,
    request_timeout: Duration,
    health_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let http_client = crate::utils::http::create_client_with_proxy(
            config.request_timeout,
            Some(config.upstream_proxy.clone()),
        )?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_timeout: config.request_timeout,
            health_timeout: config.health_timeout,
        })
    }

    /// Configured key, or `MissingApiKey` before any outbound call is attempted
    pub fn api_key(&self) -> Result<&ApiKey, UpstreamError> {
        self.api_key.as_ref().ok_or(UpstreamError::MissingApiKey)
    }

    /// Build upstream URL
    ///
    /// Parameters are percent-encoded, so caller-supplied values cannot add or override
    /// query parameters (api_key in particular).
    fn build_url(
        base_url: &str,
        endpoint: UpstreamEndpoint,
        api_key: &ApiKey,
        params: &[(&str, &str)],
    ) -> Result<Url, UpstreamError> {
        let pairs = std::iter::once(("api_key", api_key.expose())).chain(params.iter().copied());
        let url = Url::parse_with_params(&format!("{}/{}", base_url, endpoint.path()), pairs)?;
        Ok(url)
    }

    async fn send(
        &self,
        endpoint: UpstreamEndpoint,
        api_key: &ApiKey,
        params: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<reqwest::Response, UpstreamError> {
        let url = Self::build_url(&self.base_url, endpoint, api_key, params)?;
        tracing::debug!("Calling upstream /{} with {:?}", endpoint.path(), params);

        self.http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(timeout)
            .send()
            .await
            .map_err(UpstreamError::transport)
    }

    /// Single GET against the upstream API, returning the JSON payload untouched
    pub async fn fetch_json(
        &self,
        endpoint: UpstreamEndpoint,
        api_key: &ApiKey,
        params: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        let response = self.send(endpoint, api_key, params, self.request_timeout).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_default()
                .replace(api_key.expose(), "***");
            tracing::warn!(
                "Upstream /{} returned HTTP {}: {}",
                endpoint.path(),
                status.as_u16(),
                body
            );
            return Err(UpstreamError::Status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Payload(e.without_url().to_string()))
    }

    /// GET the currencies resource with the shorter health timeout, returning its status
    pub async fn check_health(&self, api_key: &ApiKey) -> Result<StatusCode, UpstreamError> {
        let response = self
            .send(
                UpstreamEndpoint::Currencies,
                api_key,
                &[],
                self.health_timeout,
            )
            .await?;
        Ok(response.status())
    }
}
