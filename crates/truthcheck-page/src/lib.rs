//! # truthcheck page
//!
//! In-memory model of the hosting page plus the two components that work
//! directly on it: the [`PageScanner`] that recognises video titles under the
//! pointer and the [`Presenter`] that draws the tooltip and thumbnail badges.

pub mod dom;
pub mod presentation;
pub mod scanner;

pub use dom::{BoundingBox, Document, DomNode, NodeId, SelectorError, SelectorList, ViewportInfo};
pub use presentation::{Presenter, render_badge};
pub use scanner::{MIN_TITLE_CHARS, PageScanner, TitleInfo};
