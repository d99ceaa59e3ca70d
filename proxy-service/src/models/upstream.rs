use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream responded with status {0}")]
    Status(StatusCode),
    #[error("Upstream body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Upstream {
    /// POSTs `body` once and returns the parsed JSON reply.
    async fn relay(&self, body: &Value) -> Result<Value, UpstreamError>;
    fn endpoint(&self) -> &str;
}

pub struct HttpUpstream {
    client: Client,
    url: String,
}

impl HttpUpstream {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn relay(&self, body: &Value) -> Result<Value, UpstreamError> {
        // No timeout and no auth headers: a hung upstream holds the inbound request.
        let response = self.client.post(&self.url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
