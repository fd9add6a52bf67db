//! Watch page fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use truthcheck_protocols::{MetadataSource, VideoMeta};

use crate::error::MetadataError;
use crate::extract::extract_meta;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (truthcheck)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Scrapes deep-search metadata from video pages.
pub struct WebMetadataFetcher {
    client: Client,
}

impl WebMetadataFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| MetadataError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch the raw page body.
    pub async fn fetch_page(&self, video_url: &str) -> Result<String, MetadataError> {
        let url = url::Url::parse(video_url)
            .map_err(|e| MetadataError::InvalidUrl(format!("{video_url}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| MetadataError::Request(format!("Failed to read body: {e}")))
    }
}

#[async_trait]
impl MetadataSource for WebMetadataFetcher {
    async fn fetch(&self, video_url: &str) -> Option<VideoMeta> {
        match self.fetch_page(video_url).await {
            Ok(page) => {
                let meta = extract_meta(&page);
                debug!(video_url, found = meta.is_some(), "Scraped video page");
                meta
            }
            Err(err) => {
                warn!(video_url, error = %err, "Metadata fetch failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
