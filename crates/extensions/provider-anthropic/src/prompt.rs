//! Prompt construction.

use truthcheck_protocols::VideoMeta;

/// Maximum number of description characters sent with a request.
pub const DESCRIPTION_LIMIT: usize = 500;

pub const SYSTEM_PROMPT: &str = r#"You are a headline truth-checker. Given a YouTube video title, assess whether the claim in the headline is likely TRUE, FALSE, MISLEADING, CLICKBAIT, or OPINION.

Respond in this exact JSON format and nothing else:
{
  "verdict": "TRUE" | "FALSE" | "MISLEADING" | "CLICKBAIT" | "OPINION" | "UNVERIFIABLE",
  "confidence": "high" | "medium" | "low",
  "summary": "1-2 sentence explanation of your assessment",
  "red_flags": ["list", "of", "red", "flags", "if any"]
}

Guidelines:
- CLICKBAIT: headline uses exaggerated language ("DESTROYS", "EXPLOSIVE", "ALL-OUT WAR") to dramatize mundane events
- MISLEADING: contains a kernel of truth but frames it deceptively
- FALSE: the core claim is factually wrong
- TRUE: the core claim is factually accurate
- OPINION: the headline is expressing a subjective view, not a factual claim
- UNVERIFIABLE: cannot determine truth from the headline alone

Focus on the literal claim. Flag emotional manipulation language. Be concise."#;

/// User turn for `title`, with one line per non-empty metadata field.
pub fn build_user_message(title: &str, meta: Option<&VideoMeta>) -> String {
    let mut message = format!("Analyze this YouTube video title:\n\n\"{title}\"");
    let Some(meta) = meta else {
        return message;
    };

    let mut context = Vec::new();
    if !meta.upload_date.is_empty() {
        context.push(format!("Upload date: {}", meta.upload_date));
    }
    if !meta.view_count.is_empty() {
        context.push(format!("View count: {}", meta.view_count));
    }
    if !meta.description.is_empty() {
        let description: String = meta.description.chars().take(DESCRIPTION_LIMIT).collect();
        context.push(format!("Description: {description}"));
    }
    if !context.is_empty() {
        message.push_str("\n\nVideo page context:\n");
        message.push_str(&context.join("\n"));
    }
    message
}
