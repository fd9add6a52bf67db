//! Page document model.
//!
//! A small arena-backed element tree carrying just what title scanning and
//! tooltip placement need: tag, id, classes, href, text, bounding box and
//! inline styles.

mod document;
mod dom_node;
mod dom_types;
mod selector;

pub use document::{Document, NodeId};
pub use dom_node::{DomNode, NodeAttributes};
pub use dom_types::{BoundingBox, ViewportInfo};
pub use selector::{CompoundSelector, SelectorError, SelectorList};

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
