use super::*;
use truthcheck_protocols::{Confidence, VerdictLabel};

#[test]
fn test_strip_json_fence() {
    let text = "```json\n{\"a\": 1}\n```";
    assert_eq!(strip_fences(text), "{\"a\": 1}");
}

#[test]
fn test_strip_bare_fence_and_whitespace() {
    assert_eq!(strip_fences("  ```\n{}\n```  \n"), "{}");
    assert_eq!(strip_fences("{\"plain\": true}"), "{\"plain\": true}");
}

#[test]
fn test_strip_repeated_fences() {
    assert_eq!(strip_fences("```json {} ``` ```json\t[]```"), "{}  []");
}

#[test]
fn test_collect_text_skips_other_blocks() {
    let blocks = vec![
        ContentBlock::Text {
            text: "```json\n{\"verdict\":".to_string(),
        },
        ContentBlock::Other,
        ContentBlock::Text {
            text: "\"TRUE\"}```".to_string(),
        },
    ];
    assert_eq!(collect_text(&blocks), "```json\n{\"verdict\":\"TRUE\"}```");
}

#[test]
fn test_parse_fenced_verdict() {
    let text = "```json\n{\"verdict\":\"CLICKBAIT\",\"confidence\":\"high\",\"summary\":\"x\",\"red_flags\":[\"y\"]}\n```";
    let verdict = parse_verdict(text).unwrap();
    assert_eq!(verdict.verdict, VerdictLabel::Clickbait);
    assert_eq!(verdict.confidence, Confidence::High);
    assert_eq!(verdict.summary, "x");
    assert_eq!(verdict.red_flags, vec!["y"]);
    assert!(!verdict.deep_searched);
}

#[test]
fn test_parse_fills_optional_fields() {
    let verdict = parse_verdict(r#"{"verdict":"OPINION","confidence":"low"}"#).unwrap();
    assert!(verdict.summary.is_empty());
    assert!(verdict.red_flags.is_empty());
}

#[test]
fn test_parse_ignores_model_deep_searched() {
    let text = r#"{"verdict":"TRUE","confidence":"medium","deepSearched":true}"#;
    assert!(!parse_verdict(text).unwrap().deep_searched);
}

#[test]
fn test_parse_rejects_invalid_json() {
    let err = parse_verdict("I think this is clickbait.").unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}

#[test]
fn test_parse_rejects_unknown_verdict() {
    let err = parse_verdict(r#"{"verdict":"MAYBE","confidence":"high"}"#).unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));

    let err = parse_verdict(r#"{"verdict":"TRUE"}"#).unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}
