//! Video page metadata interface.

use async_trait::async_trait;

use crate::types::VideoMeta;

/// Best-effort scraper for deep search.
///
/// Returns `None` when the page cannot be fetched or carries none of the
/// signals. Failures are never surfaced to the caller.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, video_url: &str) -> Option<VideoMeta>;
}
