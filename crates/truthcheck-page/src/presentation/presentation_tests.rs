use truthcheck_protocols::{Confidence, Verdict, VerdictLabel};

use super::*;
use crate::dom::{BoundingBox, Document, NodeId, ViewportInfo};

fn verdict(label: VerdictLabel, summary: &str, flags: &[&str]) -> Verdict {
    Verdict {
        verdict: label,
        confidence: Confidence::High,
        summary: summary.to_string(),
        red_flags: flags.iter().map(|f| f.to_string()).collect(),
        deep_searched: false,
    }
}

fn page_with_anchor() -> (Document, NodeId) {
    let mut doc = Document::new();
    let link = doc.append_element(doc.body(), "a#video-title").unwrap();
    doc.node_mut(link).unwrap().bounding_box = BoundingBox::new(100.0, 200.0, 300.0, 40.0);
    (doc, link)
}

fn class_name(doc: &Document, id: NodeId) -> String {
    doc.node(id).unwrap().class_name()
}

#[test]
fn test_position_below_anchor() {
    let rect = BoundingBox::new(100.0, 200.0, 300.0, 40.0);
    let viewport = ViewportInfo {
        scroll_y: 50.0,
        ..Default::default()
    };
    assert_eq!(tooltip_position(&rect, &viewport), (298.0, 100.0));
}

#[test]
fn test_position_clamped_on_right() {
    let rect = BoundingBox::new(1100.0, 0.0, 100.0, 20.0);
    let viewport = ViewportInfo::default();
    let (_, left) = tooltip_position(&rect, &viewport);
    assert_eq!(left, 940.0);
}

#[test]
fn test_position_clamped_on_left() {
    let rect = BoundingBox::new(2.0, 0.0, 100.0, 20.0);
    let (_, left) = tooltip_position(&rect, &ViewportInfo::default());
    assert_eq!(left, 8.0);

    // A viewport narrower than the tooltip still keeps the left margin.
    let narrow = ViewportInfo {
        width: 300,
        ..Default::default()
    };
    let (_, left) = tooltip_position(&BoundingBox::new(50.0, 0.0, 10.0, 10.0), &narrow);
    assert_eq!(left, 8.0);
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_tooltip_created_once() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    assert!(presenter.tooltip().is_none());

    presenter.render_loading(&mut doc, anchor);
    let first = presenter.tooltip().unwrap();
    presenter.render_result(&mut doc, &verdict(VerdictLabel::True, "ok", &[]), anchor);
    presenter.render_error(&mut doc, "boom");

    assert_eq!(presenter.tooltip(), Some(first));
    assert_eq!(doc.parent(first), Some(doc.body()));
    assert_eq!(doc.node(doc.body()).unwrap().children().len(), 2);
}

#[test]
fn test_render_loading() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    presenter.render_loading(&mut doc, anchor);

    let id = presenter.tooltip().unwrap();
    let node = doc.node(id).unwrap();
    assert_eq!(class_name(&doc, id), "ytc-tooltip ytc-loading ytc-visible");
    let html = node.inner_html.as_deref().unwrap();
    assert!(html.contains("ytc-spinner"));
    assert!(html.contains(LOADING_TEXT));
    assert_eq!(node.style("top"), Some("248px"));
    assert_eq!(node.style("left"), Some("100px"));
    assert!(presenter.is_visible(&doc));
}

#[test]
fn test_render_result_markup() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    let v = verdict(
        VerdictLabel::Clickbait,
        "Sensational <framing>",
        &["ALL CAPS", "vague \"shocking\" claim"],
    );
    presenter.render_result(&mut doc, &v, anchor);

    let id = presenter.tooltip().unwrap();
    assert_eq!(
        class_name(&doc, id),
        "ytc-tooltip ytc-result ytc-verdict-CLICKBAIT ytc-visible"
    );
    let html = doc.node(id).unwrap().inner_html.clone().unwrap();
    assert!(html.contains("<span class=\"ytc-verdict-label\">\u{1F3A3} CLICKBAIT</span>"));
    assert!(html.contains("<span class=\"ytc-confidence\">high confidence</span>"));
    assert!(html.contains("<div class=\"ytc-summary\">Sensational &lt;framing&gt;</div>"));
    assert!(html.contains("<div class=\"ytc-red-flags\">"));
    assert!(html.contains("<span class=\"ytc-flag\">\u{2691} ALL CAPS</span>"));
    assert!(html.contains("vague &quot;shocking&quot; claim"));
}

#[test]
fn test_render_result_placeholder_and_no_flags() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    presenter.render_result(&mut doc, &verdict(VerdictLabel::Opinion, "", &[]), anchor);

    let html = doc
        .node(presenter.tooltip().unwrap())
        .unwrap()
        .inner_html
        .clone()
        .unwrap();
    assert!(html.contains(NO_SUMMARY));
    assert!(!html.contains("ytc-red-flags"));
}

#[test]
fn test_render_error_replaces_markup() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    presenter.render_loading(&mut doc, anchor);
    presenter.render_error(&mut doc, "Invalid API key");

    let id = presenter.tooltip().unwrap();
    let node = doc.node(id).unwrap();
    assert_eq!(class_name(&doc, id), "ytc-tooltip ytc-error ytc-visible");
    assert_eq!(node.text, "\u{26A0} Invalid API key");
    assert!(node.inner_html.is_none());
    assert_eq!(doc.text_content(id), "\u{26A0} Invalid API key");
}

#[test]
fn test_hide_keeps_node() {
    let (mut doc, anchor) = page_with_anchor();
    let mut presenter = Presenter::new();
    presenter.hide(&mut doc);
    assert!(!presenter.is_visible(&doc));

    presenter.render_loading(&mut doc, anchor);
    presenter.hide(&mut doc);
    let id = presenter.tooltip().unwrap();
    assert!(!presenter.is_visible(&doc));
    assert_eq!(class_name(&doc, id), "ytc-tooltip ytc-loading");
}

fn card_with_thumbnail(doc: &mut Document, thumb: &str) -> (NodeId, NodeId) {
    let card = doc.append_element(doc.body(), "ytd-rich-item-renderer").unwrap();
    let thumb = doc.append_element(card, thumb).unwrap();
    doc.append_element(thumb, "img").unwrap();
    (card, thumb)
}

#[test]
fn test_badge_appended_to_thumbnail() {
    let mut doc = Document::new();
    let (card, thumb) = card_with_thumbnail(&mut doc, "ytd-thumbnail");

    assert!(render_badge(&mut doc, card, VerdictLabel::Misleading));

    let node = doc.node(thumb).unwrap();
    assert_eq!(node.style("position"), Some("relative"));
    let badge = *node.children().last().unwrap();
    assert_eq!(
        class_name(&doc, badge),
        "ytc-inline-badge ytc-badge-MISLEADING"
    );
    assert_eq!(doc.text_content(badge), "MISLEADING");
}

#[test]
fn test_badge_only_once() {
    let mut doc = Document::new();
    let (card, thumb) = card_with_thumbnail(&mut doc, "a#thumbnail");

    assert!(render_badge(&mut doc, card, VerdictLabel::True));
    assert!(!render_badge(&mut doc, card, VerdictLabel::False));
    assert_eq!(doc.node(thumb).unwrap().children().len(), 2);
}

#[test]
fn test_badge_keeps_existing_position() {
    let mut doc = Document::new();
    let (card, thumb) = card_with_thumbnail(&mut doc, "div.ytd-thumbnail");
    doc.node_mut(thumb).unwrap().set_style("position", "absolute");

    assert!(render_badge(&mut doc, card, VerdictLabel::Unverifiable));
    assert_eq!(doc.node(thumb).unwrap().position(), "absolute");
}

#[test]
fn test_badge_without_thumbnail() {
    let mut doc = Document::new();
    let card = doc.append_element(doc.body(), "ytd-video-renderer").unwrap();
    assert!(!render_badge(&mut doc, card, VerdictLabel::True));
    assert!(doc.node(card).unwrap().children().is_empty());
}
