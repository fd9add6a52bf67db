//! Page-side view of the host messaging channel.

use async_trait::async_trait;

use crate::error::CheckError;
use crate::types::Verdict;

/// Asks the background side to classify a title.
#[async_trait]
pub trait TitleChecker: Send + Sync {
    async fn check_title(
        &self,
        title: &str,
        video_url: Option<&str>,
    ) -> Result<Verdict, CheckError>;
}
