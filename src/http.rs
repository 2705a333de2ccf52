mod body;
mod client;
#[cfg(test)]
pub(crate) mod fake;

pub use body::*;
pub use client::*;

use std::str::FromStr;

use async_trait::async_trait;
pub use reqwest::Url;
use thiserror::Error;

pub type UrlParseError = <Url as FromStr>::Err;

/// Status and raw text of an HTTP response, regardless of status class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,

    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("connection failed: {0}")]
    Connection(String),
}

/// Minimal HTTP capability shared by the sensor and bridge clients.
///
/// Non-2xx statuses are not errors at this layer; callers decide what a
/// status means for them.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    async fn put(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}
