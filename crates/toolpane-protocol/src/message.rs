//! JSON-RPC 2.0 message envelope exchanged between widget and host.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Protocol version tag every envelope must carry.
pub const JSONRPC_VERSION: &str = "2.0";

/// Default error text when the host omits a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Identifier for an outbound request.
///
/// Allocated monotonically starting at 1, unique for the lifetime of one
/// widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Create a RequestId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One protocol message: request, response, or notification.
///
/// Inbound JSON is classified the way the host channel is actually probed:
/// a message carrying an `id` together with a present `result` member
/// (explicit `null` counts) or a non-null `error` member is a response;
/// otherwise a `method` member makes it a request (with `id`) or a
/// notification (without). Anything else, including any message whose
/// `jsonrpc` tag is missing or not `"2.0"`, fails to deserialize and is
/// dropped by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Request(Request),
    Response(Response),
    Notification(Notification),
}

impl Message {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Response(_) => "response",
            Self::Notification(_) => "notification",
        }
    }

    /// Method name, for requests and notifications.
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::Request(r) => Some(&r.method),
            Self::Notification(n) => Some(&n.method),
            Self::Response(_) => None,
        }
    }
}

/// A correlated request expecting a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    /// Build an outbound request with the standard protocol tag.
    pub fn new(id: RequestId, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params: Some(params),
        }
    }
}

/// A response to one of the widget's requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl Response {
    /// Build a successful response.
    pub fn result(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    pub fn error(id: RequestId, error: ResponseError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Error object carried by a failed response.
///
/// Hosts are not trusted to populate every member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseError {
    /// Build an error object carrying only a message.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(text.into()),
            data: None,
        }
    }

    /// Host-supplied message text, or the generic default when omitted.
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// A fire-and-forget message with no correlation id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Notification {
    /// Build an outbound notification with the standard protocol tag.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params: Some(params),
        }
    }
}

/// Flat view of an arbitrary inbound message before classification.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default)]
    id: Option<RequestId>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ResponseError>,
}

/// Keeps an explicit `null` distinguishable from an absent member.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::deserialize(deserializer)?;

        if raw.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
            return Err(serde::de::Error::custom(
                "missing or unsupported jsonrpc tag",
            ));
        }
        let jsonrpc = JSONRPC_VERSION.to_string();

        // Response check comes first: an id with a result or error member
        // wins even if a method member is also present.
        if let Some(id) = raw.id {
            if raw.result.is_some() || raw.error.is_some() {
                return Ok(Message::Response(Response {
                    jsonrpc,
                    id,
                    result: raw.result,
                    error: raw.error,
                }));
            }
        }

        match (raw.method, raw.id) {
            (Some(method), Some(id)) => Ok(Message::Request(Request {
                jsonrpc,
                id,
                method,
                params: raw.params,
            })),
            (Some(method), None) => Ok(Message::Notification(Notification {
                jsonrpc,
                method,
                params: raw.params,
            })),
            (None, _) => Err(serde::de::Error::custom(
                "message is neither a response nor carries a method",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_parsing() {
        let json = r#"{"jsonrpc":"2.0","method":"ui/notifications/tool-result","params":{"structuredContent":{"branch":"main"}}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        if let Message::Notification(n) = msg {
            assert_eq!(n.method, "ui/notifications/tool-result");
            assert_eq!(n.params.unwrap()["structuredContent"]["branch"], "main");
        } else {
            panic!("Expected notification");
        }
    }

    #[test]
    fn test_response_result_parsing() {
        let json = r#"{"jsonrpc":"2.0","id":1,"result":{"hostContext":{"theme":"dark"}}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        if let Message::Response(r) = msg {
            assert_eq!(r.id, RequestId::new(1));
            assert_eq!(r.result.unwrap()["hostContext"]["theme"], "dark");
            assert!(r.error.is_none());
        } else {
            panic!("Expected response");
        }
    }

    #[test]
    fn test_response_error_parsing() {
        let json = r#"{"jsonrpc":"2.0","id":7,"error":{"message":"boom"}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        if let Message::Response(r) = msg {
            assert_eq!(r.error.unwrap().message_or_default(), "boom");
        } else {
            panic!("Expected response");
        }
    }

    #[test]
    fn test_empty_error_defaults_message() {
        let err: ResponseError = serde_json::from_str("{}").unwrap();
        assert_eq!(err.message_or_default(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_null_result_is_still_a_response() {
        let json = r#"{"jsonrpc":"2.0","id":2,"result":null}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        if let Message::Response(r) = msg {
            assert_eq!(r.result, Some(Value::Null));
        } else {
            panic!("Expected response");
        }
    }

    #[test]
    fn test_null_error_alone_is_not_a_response() {
        // A null error member is treated as absent, so the method wins.
        let json = r#"{"jsonrpc":"2.0","id":3,"error":null,"method":"ui/ping"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, Message::Request(_)));
    }

    #[test]
    fn test_response_wins_over_method() {
        let json = r#"{"jsonrpc":"2.0","id":4,"method":"ui/ping","result":{}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, Message::Response(_)));
    }

    #[test]
    fn test_inbound_request_parsing() {
        let json = r#"{"jsonrpc":"2.0","id":9,"method":"ui/notifications/tool-result","params":{}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();

        if let Message::Request(r) = msg {
            assert_eq!(r.id, RequestId::new(9));
            assert_eq!(r.method, "ui/notifications/tool-result");
        } else {
            panic!("Expected request");
        }
    }

    #[test]
    fn test_missing_jsonrpc_tag_rejected() {
        let json = r#"{"id":1,"result":{}}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_wrong_jsonrpc_version_rejected() {
        let json = r#"{"jsonrpc":"1.0","id":1,"result":{}}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_bare_id_rejected() {
        let json = r#"{"jsonrpc":"2.0","id":5}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_unrelated_traffic_rejected() {
        assert!(serde_json::from_str::<Message>(r#"{"type":"resize","width":400}"#).is_err());
        assert!(serde_json::from_str::<Message>(r#""just a string""#).is_err());
    }

    #[test]
    fn test_request_serialization() {
        let request = Request::new(RequestId::new(1), "ui/initialize", json!({"capabilities":{}}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 1);
        assert_eq!(value["method"], "ui/initialize");
        assert_eq!(value["params"]["capabilities"], json!({}));
    }

    #[test]
    fn test_notification_serialization_roundtrip() {
        let sent = Message::Notification(Notification::new("ui/notifications/initialized", json!({})));
        let wire = serde_json::to_value(&sent).unwrap();
        let parsed: Message = serde_json::from_value(wire).unwrap();
        assert_eq!(parsed, sent);
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(id.value(), 42);
    }
}
