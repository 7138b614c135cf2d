use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::state::ScrapeConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Something that can turn a URL into plain page text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    text_width: usize,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            text_width: config.text_width,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(request_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let body = resp.bytes().await.map_err(request_err)?;
        debug!(url, size = body.len(), content_type, "page fetched");

        Ok(page_text(&body, &content_type, self.text_width))
    }
}

/// Render an HTML body to plain text. Anything that is not HTML is passed
/// through as (lossy) UTF-8.
pub fn page_text(body: &[u8], content_type: &str, width: usize) -> String {
    if content_type.contains("html") {
        html2text::from_read(body, width)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).to_string())
    } else {
        String::from_utf8_lossy(body).to_string()
    }
}
