//! Anthropic Messages API classifier for truthcheck.

mod api;
mod classifier;
mod parser;
mod prompt;

pub use classifier::{
    API_URL, API_VERSION, AnthropicClassifier, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TIMEOUT,
};
pub use parser::{parse_verdict, strip_fences};
pub use prompt::{DESCRIPTION_LIMIT, SYSTEM_PROMPT, build_user_message};
