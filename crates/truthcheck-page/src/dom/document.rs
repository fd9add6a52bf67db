//! Arena-backed element tree.

use serde::{Deserialize, Serialize};

use super::dom_node::DomNode;
use super::dom_types::ViewportInfo;
use super::selector::{CompoundSelector, SelectorError, SelectorList};

/// Handle to a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The hosting page.
///
/// Nodes are never removed, so a [`NodeId`] stays valid for the lifetime of
/// the document it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    nodes: Vec<DomNode>,
    body: NodeId,
    #[serde(default)]
    pub viewport: ViewportInfo,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `<body>`.
    pub fn new() -> Self {
        Self {
            nodes: vec![DomNode::new("body")],
            body: NodeId(0),
            viewport: ViewportInfo::default(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut DomNode> {
        self.nodes.get_mut(id.0)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.nodes.push(DomNode::new(tag_name));
        NodeId(self.nodes.len() - 1)
    }

    /// Attach `child` as the last child of `parent`, detaching it first if needed.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        if self.ancestors_or_self(parent).any(|a| a == child) {
            return;
        }
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Create an element from a compound selector (`a#video-title.cls`) and append it.
    pub fn append_element(&mut self, parent: NodeId, spec: &str) -> Result<NodeId, SelectorError> {
        let selector = CompoundSelector::parse(spec)?;
        let id = self.create_element(selector.tag.as_deref().unwrap_or("div"));
        let node = &mut self.nodes[id.0];
        node.attributes.id = selector.id;
        node.attributes.class_list = selector.classes;
        self.append_child(parent, id);
        Ok(id)
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.into();
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// `id` followed by each ancestor up to the root.
    pub fn ancestors_or_self(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.node(id).map(|_| id);
        std::iter::successors(start, move |current| self.parent(*current))
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn matches(&self, id: NodeId, selector: &SelectorList) -> bool {
        self.node(id).is_some_and(|n| selector.matches(n))
    }

    /// Nearest ancestor-or-self matching `selector`, like `Element.closest`.
    pub fn closest(&self, id: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.ancestors_or_self(id).find(|a| self.matches(*a, selector))
    }

    /// First descendant matching `selector`, like `Element.querySelector`.
    pub fn query_selector(&self, id: NodeId, selector: &SelectorList) -> Option<NodeId> {
        self.descendants(id).into_iter().find(|d| self.matches(*d, selector))
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = match self.node(id) {
            Some(node) => node.text.clone(),
            None => return String::new(),
        };
        for descendant in self.descendants(id) {
            if let Some(node) = self.node(descendant) {
                text.push_str(&node.text);
            }
        }
        text
    }

    /// Deepest attached node whose bounding box contains the point.
    pub fn element_at(&self, x: f64, y: f64) -> Option<NodeId> {
        let mut hit = None;
        let mut current = self.body;
        loop {
            let next = self.node(current).and_then(|node| {
                node.children.iter().rev().copied().find(|child| {
                    self.node(*child)
                        .is_some_and(|c| c.bounding_box.contains(x, y))
                })
            });
            match next {
                Some(child) => {
                    hit = Some(child);
                    current = child;
                }
                None => return hit,
            }
        }
    }
}
