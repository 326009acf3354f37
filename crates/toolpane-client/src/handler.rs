//! Handler trait connecting the protocol layer to widget rendering.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

/// Callbacks invoked by the client's read loop.
///
/// `on_data` is the one entry point rendering logic needs: it receives
/// the structured content of every tool result, verbatim. The remaining
/// hooks default to no-ops; implement them to observe streaming input
/// or host-driven teardown.
#[async_trait]
pub trait WidgetHandler: Send + Sync {
    /// Called exactly once per tool result carrying structured content.
    async fn on_data(&self, payload: Value);

    /// Called with the complete tool input when the host forwards it.
    async fn on_tool_input(&self, _params: Value) {}

    /// Called with a streaming partial of the tool input.
    async fn on_tool_input_partial(&self, _params: Value) {}

    /// Called when the host announces the widget's resource is going away.
    ///
    /// Cleanup itself is driven by dropping the client, not by this hook.
    async fn on_teardown(&self) {}
}

/// A handler that forwards structured content onto a channel.
///
/// This is useful for callers that prefer pulling payloads from a stream
/// over implementing the trait.
///
/// # Example
///
/// ```rust,no_run
/// use toolpane_client::ChannelHandler;
///
/// let (handler, mut rx) = ChannelHandler::new();
///
/// tokio::spawn(async move {
///     while let Some(payload) = rx.recv().await {
///         println!("Received: {:?}", payload);
///     }
/// });
///
/// // Use Arc::new(handler) with WidgetClient::builder
/// ```
pub struct ChannelHandler {
    data_tx: mpsc::UnboundedSender<Value>,
}

impl ChannelHandler {
    /// Create a new channel handler with a payload receiver.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Value>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { data_tx: tx }, rx)
    }
}

#[async_trait]
impl WidgetHandler for ChannelHandler {
    async fn on_data(&self, payload: Value) {
        // Receiver may already be gone; delivery is best-effort
        self.data_tx.send(payload).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_channel_handler_forwards_payloads() {
        let (handler, mut rx) = ChannelHandler::new();

        handler.on_data(json!({"branch": "main"})).await;

        let received = rx.try_recv().unwrap();
        assert_eq!(received, json!({"branch": "main"}));
    }

    #[tokio::test]
    async fn test_default_hooks_are_noops() {
        let (handler, _rx) = ChannelHandler::new();

        handler.on_tool_input(json!({"q": "status"})).await;
        handler.on_tool_input_partial(json!({"q": "sta"})).await;
        handler.on_teardown().await;
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let (handler, rx) = ChannelHandler::new();
        drop(rx);

        handler.on_data(json!({"ignored": true})).await;
    }
}
