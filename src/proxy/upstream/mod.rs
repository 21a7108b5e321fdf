// Upstream module - UniRate REST client

pub mod client;

pub use client::{UpstreamClient, UpstreamEndpoint, UpstreamError};
