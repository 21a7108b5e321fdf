use crate::models::ApiKey;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.unirateapi.com/api";
pub const DEFAULT_PORT: u16 = 5000;

/// Proxy service configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Whether to allow LAN access
    /// - false: local only 127.0.0.1 (default)
    /// - true: bind 0.0.0.0
    pub allow_lan_access: bool,

    /// Listen port
    pub port: u16,

    /// UniRate API key, `None` when not configured
    pub api_key: Option<ApiKey>,

    /// Upstream API base, without trailing slash
    pub base_url: String,

    /// Timeout of data endpoint calls
    pub request_timeout: Duration,

    /// Timeout of the health check
    pub health_timeout: Duration,

    /// Outbound proxy for upstream calls
    pub upstream_proxy: UpstreamProxyConfig,
}

/// Outbound proxy configuration
#[derive(Debug, Clone, Default)]
pub struct UpstreamProxyConfig {
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: DEFAULT_PORT,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
            upstream_proxy: UpstreamProxyConfig::default(),
        }
    }
}

impl ProxyConfig {
    /// Get the actual listen address
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}
