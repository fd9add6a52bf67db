//! Core data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict category returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictLabel {
    True,
    False,
    Misleading,
    Clickbait,
    Opinion,
    Unverifiable,
}

impl VerdictLabel {
    pub const ALL: [VerdictLabel; 6] = [
        VerdictLabel::True,
        VerdictLabel::False,
        VerdictLabel::Misleading,
        VerdictLabel::Clickbait,
        VerdictLabel::Opinion,
        VerdictLabel::Unverifiable,
    ];

    /// Upper-case label as used on the wire and in CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::True => "TRUE",
            VerdictLabel::False => "FALSE",
            VerdictLabel::Misleading => "MISLEADING",
            VerdictLabel::Clickbait => "CLICKBAIT",
            VerdictLabel::Opinion => "OPINION",
            VerdictLabel::Unverifiable => "UNVERIFIABLE",
        }
    }

    /// Glyph shown next to the label in the tooltip.
    pub fn icon(&self) -> &'static str {
        match self {
            VerdictLabel::True => "\u{2713}",
            VerdictLabel::False => "\u{2717}",
            VerdictLabel::Misleading => "\u{26A0}",
            VerdictLabel::Clickbait => "\u{1F3A3}",
            VerdictLabel::Opinion => "\u{1F4AC}",
            VerdictLabel::Unverifiable => "?",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How sure the classifier is about its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome for one title.
///
/// `verdict` and `confidence` are required; a reply missing either (or using
/// an unknown value) fails to deserialize. `summary` and `red_flags` fall back
/// to empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: VerdictLabel,
    pub confidence: Confidence,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    /// Set by the background service; the classifier always reports `false`.
    #[serde(rename = "deepSearched", default)]
    pub deep_searched: bool,
}

/// Metadata scraped from a video page for deep search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub view_count: String,
}

impl VideoMeta {
    /// True when none of the three signals was found.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.upload_date.is_empty() && self.view_count.is_empty()
    }
}

/// User settings mirrored from the settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_true")]
    pub enable_hover: bool,
    #[serde(default)]
    pub enable_deep_search: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            enable_hover: true,
            enable_deep_search: false,
        }
    }
}

impl Settings {
    /// Hover detection runs only with hover enabled and a key present.
    pub fn hover_active(&self) -> bool {
        self.enable_hover && !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_label_wire_names() {
        for label in VerdictLabel::ALL {
            let json = serde_json::to_value(label).unwrap();
            assert_eq!(json, label.as_str());
        }
    }

    #[test]
    fn test_verdict_deserialize_defaults() {
        let verdict: Verdict = serde_json::from_str(
            r#"{"verdict":"OPINION","confidence":"low"}"#,
        )
        .unwrap();
        assert_eq!(verdict.verdict, VerdictLabel::Opinion);
        assert_eq!(verdict.confidence, Confidence::Low);
        assert!(verdict.summary.is_empty());
        assert!(verdict.red_flags.is_empty());
        assert!(!verdict.deep_searched);
    }

    #[test]
    fn test_verdict_reads_deep_searched() {
        let verdict: Verdict = serde_json::from_str(
            r#"{"verdict":"TRUE","confidence":"high","deepSearched":true}"#,
        )
        .unwrap();
        assert!(verdict.deep_searched);
    }

    #[test]
    fn test_verdict_rejects_unknown_label() {
        let result = serde_json::from_str::<Verdict>(
            r#"{"verdict":"MAYBE","confidence":"high"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_verdict_requires_confidence() {
        let result = serde_json::from_str::<Verdict>(r#"{"verdict":"TRUE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_verdict_serializes_deep_searched_camel_case() {
        let verdict = Verdict {
            verdict: VerdictLabel::Clickbait,
            confidence: Confidence::Medium,
            summary: "s".to_string(),
            red_flags: vec![],
            deep_searched: true,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["deepSearched"], true);
        assert_eq!(json["verdict"], "CLICKBAIT");
        assert_eq!(json["confidence"], "medium");
    }

    #[test]
    fn test_video_meta_is_empty() {
        assert!(VideoMeta::default().is_empty());
        let meta = VideoMeta {
            view_count: "12".to_string(),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }

    #[test]
    fn test_settings_hover_gate() {
        let mut settings = Settings::default();
        assert!(!settings.hover_active());

        settings.api_key = "sk-ant-test".to_string();
        assert!(settings.hover_active());

        settings.enable_hover = false;
        assert!(!settings.hover_active());
    }

    #[test]
    fn test_settings_camel_case_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"apiKey":"k"}"#).unwrap();
        assert_eq!(settings.api_key, "k");
        assert!(settings.enable_hover);
        assert!(!settings.enable_deep_search);
    }
}
