use truthcheck_protocols::Verdict;

use crate::dom::{BoundingBox, Document, NodeId, ViewportInfo};

/// Rendered tooltip width in pixels.
pub const TOOLTIP_WIDTH: f64 = 330.0;
/// Gap below the anchor and minimum distance from the left edge.
pub const TOOLTIP_MARGIN: f64 = 8.0;
/// Distance kept from the right edge when the tooltip would overflow.
const RIGHT_CLEARANCE: f64 = 340.0;

pub const LOADING_TEXT: &str = "Checking with Claude...";
pub const NO_SUMMARY: &str = "No summary available.";

const BASE_CLASS: &str = "ytc-tooltip";
const VISIBLE_CLASS: &str = "ytc-visible";

/// Escape text for interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page coordinates `(top, left)` for a tooltip under `anchor`.
///
/// The tooltip sits 8px below the anchor, left-aligned with it, pulled back
/// inside the viewport when it would overflow on the right and never closer
/// than 8px to the left edge.
pub fn tooltip_position(anchor: &BoundingBox, viewport: &ViewportInfo) -> (f64, f64) {
    let width = f64::from(viewport.width);
    let top = anchor.bottom() + viewport.scroll_y + TOOLTIP_MARGIN;
    let mut left = anchor.left() + viewport.scroll_x;
    if left + TOOLTIP_WIDTH > width {
        left = width - RIGHT_CLEARANCE;
    }
    if left < TOOLTIP_MARGIN {
        left = TOOLTIP_MARGIN;
    }
    (top, left)
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Owner of the single tooltip node.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    tooltip: Option<NodeId>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tooltip node, once it has been created.
    pub fn tooltip(&self) -> Option<NodeId> {
        self.tooltip
    }

    /// Get the tooltip node, creating it under `<body>` on first use.
    pub fn ensure_tooltip(&mut self, doc: &mut Document) -> NodeId {
        if let Some(id) = self.tooltip.filter(|id| doc.node(*id).is_some()) {
            return id;
        }
        let id = doc.create_element("div");
        if let Some(node) = doc.node_mut(id) {
            node.set_class_name(BASE_CLASS);
        }
        doc.append_child(doc.body(), id);
        self.tooltip = Some(id);
        id
    }

    pub fn render_loading(&mut self, doc: &mut Document, anchor: NodeId) {
        let markup = format!(
            "<div class=\"ytc-spinner\"></div><span>{}</span>",
            escape_html(LOADING_TEXT)
        );
        let id = self.fill(doc, "ytc-tooltip ytc-loading", markup);
        self.place(doc, id, anchor);
        self.show(doc, id);
    }

    pub fn render_result(&mut self, doc: &mut Document, verdict: &Verdict, anchor: NodeId) {
        let label = verdict.verdict;
        let summary = if verdict.summary.is_empty() {
            NO_SUMMARY
        } else {
            verdict.summary.as_str()
        };

        let mut markup = format!(
            "<div class=\"ytc-verdict-bar\">\
             <span class=\"ytc-verdict-label\">{} {}</span>\
             <span class=\"ytc-confidence\">{} confidence</span>\
             </div>\
             <div class=\"ytc-summary\">{}</div>",
            label.icon(),
            escape_html(label.as_str()),
            escape_html(verdict.confidence.as_str()),
            escape_html(summary),
        );
        if !verdict.red_flags.is_empty() {
            markup.push_str("<div class=\"ytc-red-flags\">");
            for flag in &verdict.red_flags {
                markup.push_str("<span class=\"ytc-flag\">\u{2691} ");
                markup.push_str(&escape_html(flag));
                markup.push_str("</span>");
            }
            markup.push_str("</div>");
        }

        let class_name = format!("ytc-tooltip ytc-result ytc-verdict-{label}");
        let id = self.fill(doc, &class_name, markup);
        self.place(doc, id, anchor);
        self.show(doc, id);
    }

    /// Show `message` as plain text. Keeps the tooltip where it already is.
    pub fn render_error(&mut self, doc: &mut Document, message: &str) {
        let id = self.ensure_tooltip(doc);
        if let Some(node) = doc.node_mut(id) {
            node.set_class_name("ytc-tooltip ytc-error ytc-visible");
            node.inner_html = None;
            node.text = format!("\u{26A0} {message}");
        }
    }

    /// Hide the tooltip without discarding it.
    pub fn hide(&self, doc: &mut Document) {
        if let Some(node) = self.tooltip.and_then(|id| doc.node_mut(id)) {
            node.remove_class(VISIBLE_CLASS);
        }
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        self.tooltip
            .and_then(|id| doc.node(id))
            .is_some_and(|node| node.has_class(VISIBLE_CLASS))
    }

    fn fill(&mut self, doc: &mut Document, class_name: &str, markup: String) -> NodeId {
        let id = self.ensure_tooltip(doc);
        if let Some(node) = doc.node_mut(id) {
            node.set_class_name(class_name);
            node.text.clear();
            node.inner_html = Some(markup);
        }
        id
    }

    fn place(&self, doc: &mut Document, id: NodeId, anchor: NodeId) {
        let Some(rect) = doc.node(anchor).map(|n| n.bounding_box) else {
            return;
        };
        let (top, left) = tooltip_position(&rect, &doc.viewport);
        if let Some(node) = doc.node_mut(id) {
            node.set_style("top", px(top));
            node.set_style("left", px(left));
        }
    }

    fn show(&self, doc: &mut Document, id: NodeId) {
        if let Some(node) = doc.node_mut(id) {
            node.add_class(VISIBLE_CLASS);
        }
    }
}
