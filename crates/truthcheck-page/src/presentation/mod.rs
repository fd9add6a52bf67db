//! Tooltip and thumbnail badge rendering.
//!
//! Everything here is a pure function of a [`Verdict`] (or an error message)
//! applied to the page [`Document`]. The tooltip is one lazily created node
//! that is reused for every hover; badges are appended once per card and
//! never removed.

mod badge;
mod tooltip;

pub use badge::{THUMBNAIL_SELECTOR, render_badge};
pub use tooltip::{
    LOADING_TEXT, NO_SUMMARY, Presenter, TOOLTIP_MARGIN, TOOLTIP_WIDTH, escape_html,
    tooltip_position,
};

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod tests;
