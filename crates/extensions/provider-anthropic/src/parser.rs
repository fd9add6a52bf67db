//! Reply parsing.

use std::sync::LazyLock;

use regex::Regex;
use truthcheck_protocols::{ClassifierError, Verdict};

use crate::api::ContentBlock;

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*").expect("valid fence pattern"));

/// Concatenate the text blocks of a reply, in order.
pub(crate) fn collect_text(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
        .collect()
}

/// Remove Markdown code fences and surrounding whitespace.
pub fn strip_fences(text: &str) -> String {
    FENCE_OPEN.replace_all(text, "").replace("```", "").trim().to_string()
}

/// Parse a reply into a [`Verdict`].
///
/// `verdict` and `confidence` must be present and known; `deep_searched` is
/// always reset since only the caller knows whether metadata was used.
pub fn parse_verdict(text: &str) -> Result<Verdict, ClassifierError> {
    let cleaned = strip_fences(text);
    let mut verdict: Verdict =
        serde_json::from_str(&cleaned).map_err(|e| ClassifierError::Parse(e.to_string()))?;
    verdict.deep_searched = false;
    Ok(verdict)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
