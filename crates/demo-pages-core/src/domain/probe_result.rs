//! Probe Result
//!
//! Outcome of one GET request, shaped like the JSON the page renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body, decoded JSON or raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Text shown in the result panel: raw text as-is, JSON pretty printed
    pub fn display(&self) -> String {
        match self {
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Json(Value::String(s)) => s.clone(),
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ResponseBody::Json(_))
    }
}

/// Recorded outcome of a probe
///
/// Either `success` with `status` and `data`, or a failure with `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// RFC 3339, UTC
    pub timestamp: String,
}

impl ProbeResult {
    pub fn succeeded(status: u16, data: ResponseBody) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: Some(status),
            headers: None,
            timestamp: now_rfc3339(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status: None,
            headers: None,
            timestamp: now_rfc3339(),
        }
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Body text on success, error text on failure
    pub fn display(&self) -> String {
        if self.success {
            self.data.as_ref().map(ResponseBody::display).unwrap_or_default()
        } else {
            self.error.clone().unwrap_or_default()
        }
    }

    /// Local wall-clock time of the result, `HH:MM:SS`
    pub fn local_time(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Lifecycle of one probe slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl ProbeStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ProbeStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = ProbeResult::succeeded(200, ResponseBody::Json(json!({"fact": "x"})));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["status"], json!(200));
        assert_eq!(value["data"], json!({"fact": "x"}));
        assert!(value.get("error").is_none());
        assert!(value.get("headers").is_none());
    }

    #[test]
    fn test_failure_has_no_status() {
        let result = ProbeResult::failed("error sending request");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("error sending request"));
        assert!(value.get("status").is_none());
        assert!(value.get("data").is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[test]
    fn test_display_pretty_prints_json() {
        let body = ResponseBody::Json(json!({"a": 1}));
        assert_eq!(body.display(), "{\n  \"a\": 1\n}");
        assert_eq!(ResponseBody::Text("plain".into()).display(), "plain");

        let failed = ProbeResult::failed("boom");
        assert_eq!(failed.display(), "boom");
    }
}
