use crate::proxy::ProxyConfig;
use std::fmt;
use std::path::PathBuf;

/// Session secret used when SECRET_KEY is not set
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Upstream API key. Never serialized; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty value, which counts as "not configured"
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(<{} chars redacted>)", self.len())
    }
}

/// Session signing secret. Carried for completeness; no handler reads it.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_SECRET_KEY
    }
}

impl Default for SecretKey {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_KEY)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub proxy: ProxyConfig,
    pub secret_key: SecretKey,
    /// Directory for rolling log files; console only when unset
    pub log_dir: Option<PathBuf>,
}
