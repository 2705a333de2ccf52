use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::http::{HttpClient, HttpResponse, TransportError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Builds a client whose requests each give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { inner })
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, len = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(url, "GET");

        let response = self.inner.get(url).send().await?;

        Self::read(response).await
    }

    async fn put(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        debug!(url, %body, "PUT");

        let response = self.inner.put(url).json(body).send().await?;

        Self::read(response).await
    }
}
