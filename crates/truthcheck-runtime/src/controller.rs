//! Hover session state machine.
//!
//! The controller receives raw pointer and scroll events, debounces them into
//! at most one commit per settled hover, consults the [`VerdictCache`], and
//! issues classification requests through a [`TitleChecker`]. Replies are
//! rendered only while the session that issued them is still current.
//!
//! ```text
//! Idle --hover--> Pending --debounce--> Loading --reply--> Resolved
//!   ^               |   \--cache hit------------------------^  |
//!   |               |                   \--error--> Failed     |
//!   +---leave/scroll+-----------------------------------------+
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use truthcheck_page::{Document, NodeId, PageScanner, Presenter, TitleInfo, render_badge};
use truthcheck_protocols::{CheckError, Settings, TitleChecker, Verdict};

use crate::cache::VerdictCache;

/// Message shown instead of the raw error when the key is rejected.
pub const INVALID_KEY_MESSAGE: &str = "Invalid API key";

/// The hosting page together with its tooltip.
#[derive(Debug, Default)]
pub struct PageView {
    pub document: Document,
    pub presenter: Presenter,
}

impl PageView {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            presenter: Presenter::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    /// Debounce timer running.
    Pending,
    /// Request in flight for the tracked title.
    Loading,
    Resolved,
    Failed,
}

#[derive(Debug)]
struct HoverSession {
    state: HoverState,
    tracked_title: Option<String>,
    /// Bumped whenever the tracked title is committed or cleared.
    epoch: u64,
    /// Bumped whenever the debounce timer is restarted or cancelled.
    ticket: u64,
    timer: Option<JoinHandle<()>>,
}

impl HoverSession {
    fn new() -> Self {
        Self {
            state: HoverState::Idle,
            tracked_title: None,
            epoch: 0,
            ticket: 0,
            timer: None,
        }
    }

    fn cancel_timer(&mut self) {
        self.ticket += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Record a reply outcome unless a newer hover is still debouncing.
    fn settle(&mut self, state: HoverState) {
        if self.timer.is_none() {
            self.state = state;
        }
    }

    fn is_current(&self, epoch: u64, title: &str) -> bool {
        self.epoch == epoch && self.tracked_title.as_deref() == Some(title)
    }
}

struct Inner {
    debounce: Duration,
    checker: Arc<dyn TitleChecker>,
    cache: VerdictCache,
    settings: watch::Receiver<Settings>,
    page: Arc<Mutex<PageView>>,
    scanner: PageScanner,
    session: Mutex<HoverSession>,
}

/// Drives one page's hover sessions.
///
/// Locks are always taken session first, page second, and never held across
/// an `.await`.
#[derive(Clone)]
pub struct HoverController {
    inner: Arc<Inner>,
}

impl HoverController {
    pub fn new(
        checker: Arc<dyn TitleChecker>,
        settings: watch::Receiver<Settings>,
        page: Arc<Mutex<PageView>>,
        debounce: Duration,
    ) -> Self {
        Self::with_cache(checker, settings, page, debounce, VerdictCache::new())
    }

    pub fn with_cache(
        checker: Arc<dyn TitleChecker>,
        settings: watch::Receiver<Settings>,
        page: Arc<Mutex<PageView>>,
        debounce: Duration,
        cache: VerdictCache,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                debounce,
                checker,
                cache,
                settings,
                page,
                scanner: PageScanner::new(),
                session: Mutex::new(HoverSession::new()),
            }),
        }
    }

    pub fn page(&self) -> &Arc<Mutex<PageView>> {
        &self.inner.page
    }

    pub fn cache(&self) -> &VerdictCache {
        &self.inner.cache
    }

    pub fn state(&self) -> HoverState {
        self.inner.session.lock().state
    }

    pub fn tracked_title(&self) -> Option<String> {
        self.inner.session.lock().tracked_title.clone()
    }

    fn gate_open(&self) -> bool {
        self.inner.settings.borrow().hover_active()
    }

    fn locate(&self, node: NodeId) -> Option<TitleInfo> {
        let page = self.inner.page.lock();
        self.inner.scanner.locate(&page.document, node)
    }

    /// Pointer entered `target`. Must be called from within a tokio runtime.
    pub fn pointer_over(&self, target: NodeId) {
        if !self.gate_open() {
            return;
        }
        let Some(info) = self.locate(target) else {
            return;
        };

        let mut session = self.inner.session.lock();
        if session.tracked_title.as_deref() == Some(info.text.as_str()) {
            return;
        }

        session.cancel_timer();
        let ticket = session.ticket;
        session.state = HoverState::Pending;

        let this = self.clone();
        let debounce = self.inner.debounce;
        session.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            this.commit(info, ticket);
        }));
    }

    /// Pointer left `target` for `related`, when known.
    pub fn pointer_out(&self, target: NodeId, related: Option<NodeId>) {
        let leaving = self.locate(target).is_some();
        let entering = related.and_then(|node| self.locate(node)).is_some();
        if leaving && !entering {
            self.reset("pointer left title");
        }
    }

    pub fn scroll(&self) {
        self.reset("scroll");
    }

    fn reset(&self, reason: &str) {
        let mut session = self.inner.session.lock();
        session.cancel_timer();
        session.tracked_title = None;
        session.epoch += 1;
        session.state = HoverState::Idle;

        let mut page = self.inner.page.lock();
        let PageView {
            document,
            presenter,
        } = &mut *page;
        presenter.hide(document);
        debug!(reason, "Hover session reset");
    }

    /// Debounce expired for `info`.
    fn commit(&self, info: TitleInfo, ticket: u64) {
        let mut session = self.inner.session.lock();
        if session.ticket != ticket {
            return;
        }
        session.timer = None;

        if !self.gate_open() {
            drop(session);
            self.reset("hover disabled");
            return;
        }

        session.tracked_title = Some(info.text.clone());
        session.epoch += 1;
        let epoch = session.epoch;
        debug!(title = %info.text, epoch, "Hover committed");

        if let Some(verdict) = self.inner.cache.get(&info.text) {
            self.show_verdict(&info, &verdict);
            session.state = HoverState::Resolved;
            return;
        }

        {
            let mut page = self.inner.page.lock();
            let PageView {
                document,
                presenter,
            } = &mut *page;
            presenter.render_loading(document, info.anchor);
        }
        session.state = HoverState::Loading;
        drop(session);

        let this = self.clone();
        tokio::spawn(async move { this.check(info, epoch).await });
    }

    async fn check(&self, info: TitleInfo, epoch: u64) {
        info!(title = %info.text, "Checking title");
        let result = self
            .inner
            .checker
            .check_title(&info.text, info.video_url.as_deref())
            .await;

        match result {
            Ok(verdict) => {
                self.inner.cache.insert(info.text.clone(), verdict.clone());
                let mut session = self.inner.session.lock();
                if !session.is_current(epoch, &info.text) {
                    debug!(title = %info.text, "Discarding stale verdict");
                    return;
                }
                info!(title = %info.text, verdict = %verdict.verdict, "Title resolved");
                self.show_verdict(&info, &verdict);
                session.settle(HoverState::Resolved);
            }
            Err(err) => {
                warn!(title = %info.text, error = %err, "Title check failed");
                let mut session = self.inner.session.lock();
                if !session.is_current(epoch, &info.text) {
                    return;
                }
                let mut page = self.inner.page.lock();
                let PageView {
                    document,
                    presenter,
                } = &mut *page;
                presenter.render_error(document, &error_message(&err));
                session.settle(HoverState::Failed);
            }
        }
    }

    fn show_verdict(&self, info: &TitleInfo, verdict: &Verdict) {
        let mut page = self.inner.page.lock();
        let PageView {
            document,
            presenter,
        } = &mut *page;
        presenter.render_result(document, verdict, info.anchor);
        if let Some(container) = info.container {
            render_badge(document, container, verdict.verdict);
        }
    }
}

fn error_message(err: &CheckError) -> String {
    if err.is_auth() {
        INVALID_KEY_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
