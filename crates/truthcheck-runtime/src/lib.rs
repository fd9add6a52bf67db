//! # truthcheck runtime
//!
//! Stateful parts of the checker: the [`HoverController`] that turns pointer
//! events into classification requests, the session-wide [`VerdictCache`],
//! and the [`BackgroundService`] that answers `checkTitle` requests on the
//! other side of the host messaging boundary.

pub mod background;
pub mod cache;
pub mod controller;

pub use background::{BackgroundHandle, BackgroundService};
pub use cache::VerdictCache;
pub use controller::{HoverController, HoverState, PageView};
