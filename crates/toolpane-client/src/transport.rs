//! Outbound transport seam between the widget client and its host.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::trace;

use toolpane_protocol::Message;

use crate::error::ClientError;

/// Outbound half of the host connection.
///
/// The substrate delivers whole, already-deserialized messages in both
/// directions; this trait covers only the send side. The inbound side is
/// an `mpsc::UnboundedReceiver<serde_json::Value>` handed to
/// [`WidgetClientBuilder::connect`](crate::WidgetClientBuilder::connect)
/// and consumed by the client's read loop.
#[async_trait]
pub trait HostTransport: Send + Sync {
    /// Deliver one envelope to the host.
    async fn send(&self, message: Message) -> Result<(), ClientError>;
}

/// Channel-backed transport for tests and in-process embeddings.
///
/// Returns the transport and a receiver carrying everything the client
/// sends, so the embedding (or a test) can play the host.
pub struct ChannelTransport {
    outbound_tx: mpsc::UnboundedSender<Message>,
}

impl ChannelTransport {
    /// Create a new channel transport with an outbound message receiver.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { outbound_tx: tx }, rx)
    }
}

#[async_trait]
impl HostTransport for ChannelTransport {
    async fn send(&self, message: Message) -> Result<(), ClientError> {
        trace!(kind = message.kind(), "Sending envelope to host");
        self.outbound_tx
            .send(message)
            .map_err(|_| ClientError::ChannelClosed)
    }
}
