use crate::proxy::config::UpstreamProxyConfig;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create an HTTP client with the given default timeout and optional outbound proxy
///
/// Only the configured proxy is used; system proxy variables are ignored.
/// An unusable proxy address or builder failure is an error, never a fallback client.
pub fn create_client_with_proxy(
    timeout: Duration,
    proxy_config: Option<UpstreamProxyConfig>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(timeout).no_proxy();

    if let Some(config) = proxy_config {
        if config.enabled && !config.url.is_empty() {
            let proxy = Proxy::all(&config.url).map_err(|e| {
                tracing::error!("Invalid proxy address: {}, error: {}", config.url, e);
                e
            })?;
            builder = builder.proxy(proxy);
            tracing::info!("HTTP client upstream proxy enabled: {}", config.url);
        }
    }

    builder.build()
}
