//! Types for the one-shot initialize handshake.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::HostContext;

/// Protocol revision reported in the handshake.
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// Widget client version reported in `clientInfo`.
pub const CLIENT_VERSION: &str = "1.0.0";

/// Params for the `ui/initialize` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub capabilities: Value,
    pub client_info: ClientInfo,
}

impl InitializeParams {
    /// Standard params for a widget with the given name: current protocol
    /// revision, an empty capability set, and identifying info.
    pub fn for_widget(name: impl Into<String>) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: Value::Object(Default::default()),
            client_info: ClientInfo {
                name: name.into(),
                version: CLIENT_VERSION.to_string(),
            },
        }
    }
}

/// Identifying information for one widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// Result of the `ui/initialize` request.
///
/// Hosts may omit any of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_context: Option<HostContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_capabilities: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_info: Option<Value>,
}
