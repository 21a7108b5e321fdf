pub mod config;
pub mod currency;

pub use config::{ApiKey, AppConfig, SecretKey};
pub use currency::{ConvertQuery, HealthFailure, HealthReport, HealthStatus, RatesQuery};
