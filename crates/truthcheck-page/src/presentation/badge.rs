use std::sync::LazyLock;

use tracing::trace;
use truthcheck_protocols::VerdictLabel;

use crate::dom::{Document, NodeId, SelectorList};

/// Where the badge goes inside an item card.
pub const THUMBNAIL_SELECTOR: &str = "ytd-thumbnail, a#thumbnail, .ytd-thumbnail";

const BADGE_CLASS: &str = "ytc-inline-badge";

static THUMBNAIL: LazyLock<SelectorList> =
    LazyLock::new(|| SelectorList::parse(THUMBNAIL_SELECTOR).expect("valid thumbnail selector"));

static BADGE: LazyLock<SelectorList> =
    LazyLock::new(|| SelectorList::parse(".ytc-inline-badge").expect("valid badge selector"));

/// Stamp `label` onto the thumbnail inside `container`.
///
/// Returns `false` when the card has no thumbnail or already carries a badge.
pub fn render_badge(doc: &mut Document, container: NodeId, label: VerdictLabel) -> bool {
    let Some(thumb) = doc.query_selector(container, &THUMBNAIL) else {
        trace!(container = container.index(), "No thumbnail for badge");
        return false;
    };
    if doc.query_selector(thumb, &BADGE).is_some() {
        return false;
    }

    if let Some(node) = doc.node_mut(thumb) {
        if node.position() == "static" {
            node.set_style("position", "relative");
        }
    }

    let badge = doc.create_element("div");
    if let Some(node) = doc.node_mut(badge) {
        node.set_class_name(&format!("{BADGE_CLASS} ytc-badge-{label}"));
        node.text = label.as_str().to_string();
    }
    doc.append_child(thumb, badge);
    true
}
