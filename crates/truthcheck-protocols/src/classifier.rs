//! Classification service interface.

use async_trait::async_trait;

use crate::error::ClassifierError;
use crate::types::{Verdict, VideoMeta};

/// Sends one title to the remote classifier and parses its verdict.
///
/// Implementations issue a single request; there is no retry.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        title: &str,
        api_key: &str,
        meta: Option<&VideoMeta>,
    ) -> Result<Verdict, ClassifierError>;
}
