use serde::Serialize;
use url::form_urlencoded;

pub const DEFAULT_AMOUNT: &str = "1";
pub const DEFAULT_FROM: &str = "USD";
pub const DEFAULT_TO: &str = "EUR";

/// First occurrence of `name` in a raw query string; later repeats are ignored
fn first_value(raw: Option<&str>, name: &str) -> Option<String> {
    raw.and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    })
}

/// Query of `/api/convert`. Defaults only apply to absent parameters.
#[derive(Debug, Clone, Default)]
pub struct ConvertQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ConvertQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            amount: first_value(raw, "amount"),
            from: first_value(raw, "from"),
            to: first_value(raw, "to"),
        }
    }

    pub fn amount(&self) -> &str {
        self.amount.as_deref().unwrap_or(DEFAULT_AMOUNT)
    }

    pub fn from(&self) -> &str {
        self.from.as_deref().unwrap_or(DEFAULT_FROM)
    }

    pub fn to(&self) -> &str {
        self.to.as_deref().unwrap_or(DEFAULT_TO)
    }
}

/// Query of `/api/rates`
#[derive(Debug, Clone, Default)]
pub struct RatesQuery {
    pub from: Option<String>,
}

impl RatesQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            from: first_value(raw, "from"),
        }
    }

    pub fn from(&self) -> &str {
        self.from.as_deref().unwrap_or(DEFAULT_FROM)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Error,
}

/// Body of `/api/health` when the upstream answered
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub api_key_set: bool,
    pub api_key_length: usize,
    pub api_response: u16,
}

/// Body of `/api/health` when the check could not reach a verdict
#[derive(Debug, Clone, Serialize)]
pub struct HealthFailure {
    pub status: HealthStatus,
    pub message: String,
}

impl HealthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            message: message.into(),
        }
    }
}
