//! Background side of the host messaging boundary.
//!
//! The page never talks to the network itself. It sends a `checkTitle`
//! request through a [`BackgroundHandle`]; the [`BackgroundService`] reads the
//! current settings, optionally scrapes video metadata, calls the classifier
//! and replies with a success or error envelope.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use truthcheck_protocols::{
    CheckError, Classifier, ErrorKind, HostRequest, HostResponse, MetadataSource, Settings,
    TitleChecker, Verdict,
};

/// Error text when a request arrives before a key is configured.
pub const MISSING_KEY_MESSAGE: &str = "API key not configured";

const CHANNEL_CAPACITY: usize = 32;

type Envelope = (HostRequest, oneshot::Sender<HostResponse>);

pub struct BackgroundService {
    classifier: Arc<dyn Classifier>,
    metadata: Arc<dyn MetadataSource>,
    settings: watch::Receiver<Settings>,
}

impl BackgroundService {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        metadata: Arc<dyn MetadataSource>,
        settings: watch::Receiver<Settings>,
    ) -> Self {
        Self {
            classifier,
            metadata,
            settings,
        }
    }

    /// Answer one request.
    pub async fn handle(&self, request: HostRequest) -> HostResponse {
        match request {
            HostRequest::CheckTitle { title, video_url } => {
                match self.check_title(&title, video_url.as_deref()).await {
                    Ok(verdict) => HostResponse::success(verdict),
                    Err(err) => HostResponse::failure(err.kind, err.message),
                }
            }
        }
    }

    async fn check_title(
        &self,
        title: &str,
        video_url: Option<&str>,
    ) -> Result<Verdict, CheckError> {
        let settings = self.settings.borrow().clone();
        if settings.api_key.is_empty() {
            return Err(CheckError::new(ErrorKind::Config, MISSING_KEY_MESSAGE));
        }

        let meta = match (settings.enable_deep_search, video_url) {
            (true, Some(url)) => self.metadata.fetch(url).await,
            _ => None,
        };
        debug!(title, deep_search = meta.is_some(), "Classifying title");

        let mut verdict = self
            .classifier
            .classify(title, &settings.api_key, meta.as_ref())
            .await
            .map_err(|err| {
                warn!(title, error = %err, "Classification failed");
                CheckError::new(err.kind(), err.to_string())
            })?;
        verdict.deep_searched = meta.is_some();
        info!(title, verdict = %verdict.verdict, confidence = %verdict.confidence, "Classified");
        Ok(verdict)
    }

    /// Run the service on its own task and return the page-side handle.
    ///
    /// Requests are served concurrently. The task ends once every handle has
    /// been dropped.
    pub fn spawn(self) -> BackgroundHandle {
        let (tx, mut rx) = mpsc::channel::<Envelope>(CHANNEL_CAPACITY);
        let service = Arc::new(self);
        tokio::spawn(async move {
            while let Some((request, reply)) = rx.recv().await {
                let service = service.clone();
                tokio::spawn(async move {
                    let response = service.handle(request).await;
                    if reply.send(response).is_err() {
                        debug!("Requester went away before the reply");
                    }
                });
            }
            debug!("Background service stopped");
        });
        BackgroundHandle { tx }
    }
}

/// Page-side end of the messaging channel.
#[derive(Clone)]
pub struct BackgroundHandle {
    tx: mpsc::Sender<Envelope>,
}

impl BackgroundHandle {
    /// Send a request and wait for its envelope.
    pub async fn send(&self, request: HostRequest) -> Result<HostResponse, CheckError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send((request, reply_tx))
            .await
            .map_err(|_| CheckError::channel_closed())?;
        reply_rx.await.map_err(|_| CheckError::channel_closed())
    }
}

#[async_trait]
impl TitleChecker for BackgroundHandle {
    async fn check_title(
        &self,
        title: &str,
        video_url: Option<&str>,
    ) -> Result<Verdict, CheckError> {
        let request = HostRequest::check_title(title, video_url.map(str::to_string));
        self.send(request).await?.into_result()
    }
}

#[cfg(test)]
#[path = "background_tests.rs"]
mod tests;
