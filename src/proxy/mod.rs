// proxy module - UniRate API reverse proxy service

pub mod config;
pub mod server;

pub mod common; // Common tools
pub mod handlers; // API endpoint handlers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use config::ProxyConfig;
pub use server::AxumServer;
