//! Method names used by the widget-host protocol.

/// Handshake request, sent once per widget instance.
pub const INITIALIZE: &str = "ui/initialize";

/// Acknowledgement sent after the handshake result has been applied.
pub const INITIALIZED: &str = "ui/notifications/initialized";

/// Tool invocation arguments (reserved).
pub const TOOL_INPUT: &str = "ui/notifications/tool-input";

/// Streaming partial tool input (reserved).
pub const TOOL_INPUT_PARTIAL: &str = "ui/notifications/tool-input-partial";

/// Final tool result carrying structured content.
pub const TOOL_RESULT: &str = "ui/notifications/tool-result";

/// Presentation context update from the host.
pub const HOST_CONTEXT_CHANGED: &str = "ui/notifications/host-context-changed";

/// Host is about to tear the widget down.
pub const RESOURCE_TEARDOWN: &str = "ui/resource-teardown";
