//! Video title recognition.
//!
//! The hosting page ships several layouts at once and renames its markup
//! often, so a title is found by trying an ordered list of structural rules
//! against the node under the pointer and keeping the first hit.

use tracing::trace;
use url::Url;

use crate::dom::{Document, NodeId, SelectorList};

/// Titles shorter than this (in characters, after trimming) are decorative
/// fragments or truncations, never real titles.
pub const MIN_TITLE_CHARS: usize = 10;

/// Base for resolving relative video links.
pub const PAGE_ORIGIN: &str = "https://www.youtube.com/";

const LOCKUP_TITLE: &str = "a.yt-lockup-metadata-view-model__title";
const LEGACY_TITLE: &str = "a#video-title";
const TITLE_LINK: &str = "#video-title-link";
const ATTRIBUTED_SPAN: &str = "span.yt-core-attributed-string";
const TITLE_ID: &str = "video-title";
const ITEM_CARDS: &str = "ytd-rich-item-renderer, ytd-video-renderer, ytd-compact-video-renderer, \
     ytd-grid-video-renderer, ytd-playlist-video-renderer, ytd-reel-item-renderer";

/// A recognised title under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    /// Trimmed title text.
    pub text: String,
    /// Element whose box anchors the tooltip.
    pub anchor: NodeId,
    /// Enclosing item card used for the thumbnail badge.
    pub container: Option<NodeId>,
    /// Absolute URL of the video page, when the anchor links to one.
    pub video_url: Option<String>,
}

/// One way of getting from an arbitrary node to its title link.
#[derive(Debug, Clone)]
enum TitleRule {
    /// Nearest ancestor-or-self matching the selector.
    Closest(SelectorList),
    /// Nearest attributed-text span, then the first link selector that has an
    /// ancestor-or-self match from that span.
    ViaSpan {
        span: SelectorList,
        links: Vec<SelectorList>,
    },
    /// The node itself carries this id.
    SelfId(&'static str),
}

impl TitleRule {
    fn apply(&self, doc: &Document, node: NodeId) -> Option<NodeId> {
        match self {
            TitleRule::Closest(selector) => doc.closest(node, selector),
            TitleRule::ViaSpan { span, links } => {
                let span = doc.closest(node, span)?;
                links.iter().find_map(|link| doc.closest(span, link))
            }
            TitleRule::SelfId(id) => doc
                .node(node)
                .filter(|n| n.attributes.id.as_deref() == Some(*id))
                .map(|_| node),
        }
    }
}

fn selector(spec: &str) -> SelectorList {
    SelectorList::parse(spec).expect("built-in selector is valid")
}

/// Finds video titles in the page.
#[derive(Debug, Clone)]
pub struct PageScanner {
    rules: Vec<TitleRule>,
    containers: SelectorList,
    origin: Url,
}

impl Default for PageScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScanner {
    pub fn new() -> Self {
        Self {
            rules: vec![
                TitleRule::Closest(selector(LOCKUP_TITLE)),
                TitleRule::Closest(selector(LEGACY_TITLE)),
                TitleRule::Closest(selector(TITLE_LINK)),
                TitleRule::ViaSpan {
                    span: selector(ATTRIBUTED_SPAN),
                    links: vec![selector(LOCKUP_TITLE), selector(LEGACY_TITLE)],
                },
                TitleRule::SelfId(TITLE_ID),
            ],
            containers: selector(ITEM_CARDS),
            origin: Url::parse(PAGE_ORIGIN).expect("built-in origin is valid"),
        }
    }

    /// Recognise the title `node` belongs to, if any.
    pub fn locate(&self, doc: &Document, node: NodeId) -> Option<TitleInfo> {
        let (rule, anchor) = self
            .rules
            .iter()
            .enumerate()
            .find_map(|(i, rule)| rule.apply(doc, node).map(|anchor| (i, anchor)))?;

        let text = doc.text_content(anchor).trim().to_string();
        if text.chars().count() < MIN_TITLE_CHARS {
            trace!(rule, len = text.chars().count(), "Title candidate too short");
            return None;
        }

        let container = doc.closest(anchor, &self.containers);
        let video_url = doc
            .node(anchor)
            .and_then(|n| n.attributes.href.as_deref())
            .and_then(|href| self.resolve_video_url(href));

        Some(TitleInfo {
            text,
            anchor,
            container,
            video_url,
        })
    }

    fn resolve_video_url(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let url = self.origin.join(href).ok()?;
        matches!(url.scheme(), "http" | "https").then(|| url.to_string())
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
