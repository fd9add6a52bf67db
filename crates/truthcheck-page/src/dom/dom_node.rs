//! Element node stored in a [`Document`](super::Document).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::document::NodeId;
use super::dom_types::BoundingBox;

/// Node attributes relevant to title scanning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Element ID attribute.
    pub id: Option<String>,
    /// Element class names, in document order.
    #[serde(default)]
    pub class_list: Vec<String>,
    /// Href for links.
    pub href: Option<String>,
}

/// An element in the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    /// Tag name (lowercase).
    pub tag_name: String,

    pub attributes: NodeAttributes,

    /// Direct text of this element, not including children.
    #[serde(default)]
    pub text: String,

    /// Markup assigned wholesale, as `innerHTML` would be.
    #[serde(default)]
    pub inner_html: Option<String>,

    /// Bounding box in viewport coordinates.
    #[serde(default)]
    pub bounding_box: BoundingBox,

    /// Inline styles.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,

    pub(crate) parent: Option<NodeId>,

    #[serde(default)]
    pub(crate) children: Vec<NodeId>,
}

impl DomNode {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: NodeAttributes::default(),
            text: String::new(),
            inner_html: None,
            bounding_box: BoundingBox::default(),
            styles: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attributes.class_list.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.attributes.class_list.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.attributes.class_list.retain(|c| c != class);
    }

    /// Space-separated class attribute.
    pub fn class_name(&self) -> String {
        self.attributes.class_list.join(" ")
    }

    /// Replace the whole class attribute.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.attributes.class_list = class_name.split_whitespace().map(String::from).collect();
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, name: &str, value: impl Into<String>) {
        self.styles.insert(name.to_string(), value.into());
    }

    /// CSS `position`, `static` when unset.
    pub fn position(&self) -> &str {
        self.style("position").unwrap_or("static")
    }
}
