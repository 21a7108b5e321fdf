use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{ApiKey, AppConfig, SecretKey};
use crate::proxy::config::{ProxyConfig, UpstreamProxyConfig};

pub const ENV_API_KEY: &str = "UNIRATE_API_KEY";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_PORT: &str = "PORT";
pub const ENV_ALLOW_LAN_ACCESS: &str = "ALLOW_LAN_ACCESS";
pub const ENV_BASE_URL: &str = "UNIRATE_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "UPSTREAM_TIMEOUT_SECS";
pub const ENV_HEALTH_TIMEOUT: &str = "HEALTH_TIMEOUT_SECS";
pub const ENV_UPSTREAM_PROXY: &str = "UPSTREAM_PROXY_URL";
pub const ENV_LOG_DIR: &str = "LOG_DIR";

/// Load application config from the process environment, reading `.env` first
pub fn load_app_config() -> AppResult<AppConfig> {
    // A missing .env is fine, real environment variables still apply
    let _ = dotenvy::dotenv();
    load_app_config_from(|name| std::env::var(name).ok())
}

/// Build the config from an arbitrary variable lookup
pub fn load_app_config_from<F>(lookup: F) -> AppResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ProxyConfig::default();

    let port = match lookup(ENV_PORT) {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("{} must be a port number: {}", ENV_PORT, e)))?,
        None => defaults.port,
    };

    let allow_lan_access = match lookup(ENV_ALLOW_LAN_ACCESS) {
        Some(raw) => parse_bool(ENV_ALLOW_LAN_ACCESS, &raw)?,
        None => defaults.allow_lan_access,
    };

    let base_url = match lookup(ENV_BASE_URL) {
        Some(raw) => validate_base_url(raw.trim())?,
        None => defaults.base_url,
    };

    let upstream_proxy = match lookup(ENV_UPSTREAM_PROXY) {
        Some(url) if !url.trim().is_empty() => UpstreamProxyConfig {
            enabled: true,
            url: url.trim().to_string(),
        },
        _ => UpstreamProxyConfig::default(),
    };

    let proxy = ProxyConfig {
        allow_lan_access,
        port,
        api_key: lookup(ENV_API_KEY).and_then(ApiKey::new),
        base_url,
        request_timeout: parse_timeout(&lookup, ENV_REQUEST_TIMEOUT, defaults.request_timeout)?,
        health_timeout: parse_timeout(&lookup, ENV_HEALTH_TIMEOUT, defaults.health_timeout)?,
        upstream_proxy,
    };

    Ok(AppConfig {
        proxy,
        secret_key: lookup(ENV_SECRET_KEY)
            .map(SecretKey::new)
            .unwrap_or_default(),
        log_dir: lookup(ENV_LOG_DIR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from),
    })
}

fn parse_bool(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}

fn parse_timeout<F>(lookup: &F, name: &str, default: Duration) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::Config(format!("{} must be greater than 0", name))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(AppError::Config(format!(
            "{} must be a number of seconds: {}",
            name, e
        ))),
    }
}

fn validate_base_url(raw: &str) -> AppResult<String> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", ENV_BASE_URL, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::Config(format!(
            "{} must use http or https",
            ENV_BASE_URL
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
