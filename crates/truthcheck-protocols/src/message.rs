//! Envelopes exchanged over the host messaging channel.

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::types::Verdict;

/// Request sent from the page side to the background service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostRequest {
    #[serde(rename_all = "camelCase")]
    CheckTitle {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video_url: Option<String>,
    },
}

impl HostRequest {
    pub fn check_title(title: impl Into<String>, video_url: Option<String>) -> Self {
        HostRequest::CheckTitle {
            title: title.into(),
            video_url,
        }
    }
}

/// Failure category carried next to the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Auth,
    Transport,
    Parse,
    Network,
    Config,
    Channel,
    Unknown,
}

/// Reply to a [`HostRequest`]: `{success:true, result}` or `{success:false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl HostResponse {
    pub fn success(result: Verdict) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(kind: ErrorKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            error_kind: Some(kind),
        }
    }

    /// Unwrap the envelope the way the page side consumes it.
    pub fn into_result(self) -> Result<Verdict, CheckError> {
        match (self.success, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(CheckError::new(
                self.error_kind.unwrap_or(ErrorKind::Unknown),
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, VerdictLabel};

    fn sample_verdict() -> Verdict {
        Verdict {
            verdict: VerdictLabel::Misleading,
            confidence: Confidence::Medium,
            summary: "Framed deceptively".to_string(),
            red_flags: vec!["SHOCKING".to_string()],
            deep_searched: false,
        }
    }

    #[test]
    fn test_request_wire_format() {
        let request = HostRequest::check_title(
            "Scientists DESTROY flat earth",
            Some("https://www.youtube.com/watch?v=abc".to_string()),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "checkTitle");
        assert_eq!(json["title"], "Scientists DESTROY flat earth");
        assert_eq!(json["videoUrl"], "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_request_without_video_url() {
        let request: HostRequest =
            serde_json::from_str(r#"{"action":"checkTitle","title":"Some long title"}"#).unwrap();
        let HostRequest::CheckTitle { title, video_url } = request;
        assert_eq!(title, "Some long title");
        assert!(video_url.is_none());

        let json = serde_json::to_value(HostRequest::check_title("t", None)).unwrap();
        assert!(json.get("videoUrl").is_none());
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result = serde_json::from_str::<HostRequest>(r#"{"action":"deleteAll"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(HostResponse::success(sample_verdict())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["verdict"], "MISLEADING");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let json =
            serde_json::to_value(HostResponse::failure(ErrorKind::Auth, "API 401: nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "API 401: nope");
        assert_eq!(json["errorKind"], "auth");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_into_result() {
        let ok = HostResponse::success(sample_verdict()).into_result().unwrap();
        assert_eq!(ok.verdict, VerdictLabel::Misleading);

        let err = HostResponse::failure(ErrorKind::Parse, "bad json")
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(err.message, "bad json");
    }

    #[test]
    fn test_into_result_legacy_failure_without_kind() {
        let response: HostResponse =
            serde_json::from_str(r#"{"success":false,"error":"API 401: invalid"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert!(err.is_auth());
    }

    #[test]
    fn test_into_result_missing_everything() {
        let response: HostResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.message, "Unknown error");
    }
}
