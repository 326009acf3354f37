//! Request/response correlation for one widget instance.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::trace;

use toolpane_protocol::{RequestId, Response};

use crate::error::ClientError;

/// Tracks in-flight requests and resolves them as responses arrive.
///
/// Ids are assigned monotonically from 1 and are unique for the lifetime
/// of the owning client. Each correlator belongs to exactly one widget
/// instance; nothing here is shared across clients.
#[derive(Debug)]
pub(crate) struct RequestCorrelator {
    next_id: u64,
    pending: HashMap<RequestId, oneshot::Sender<Result<Value, ClientError>>>,
}

impl RequestCorrelator {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            pending: HashMap::new(),
        }
    }

    /// Allocate the next request id and register its continuation.
    ///
    /// The returned receiver resolves with the host's answer, or fails
    /// with [`ClientError::ChannelClosed`] if the correlator is dropped
    /// while the request is still pending.
    pub(crate) fn register(
        &mut self,
    ) -> (RequestId, oneshot::Receiver<Result<Value, ClientError>>) {
        let id = RequestId::new(self.next_id);
        self.next_id += 1;

        let (tx, rx) = oneshot::channel();
        self.pending.insert(id, tx);
        (id, rx)
    }

    /// Resolve the pending request matching `response`, if any.
    ///
    /// Responses with no matching pending id are dropped. The entry is
    /// removed at the first match, so a duplicate response for the same
    /// id is also a no-op.
    pub(crate) fn deliver(&mut self, response: Response) {
        let Some(tx) = self.pending.remove(&response.id) else {
            trace!(id = %response.id, "Dropping response with no pending request");
            return;
        };

        let outcome = match response.error {
            Some(error) => Err(ClientError::Host(error.message_or_default())),
            None => Ok(response.result.unwrap_or(Value::Null)),
        };

        // The caller may have stopped waiting; that is not an error here.
        tx.send(outcome).ok();
    }

    /// Drop a pending entry without resolving it.
    ///
    /// Used when the request never made it to the host, so no response
    /// can ever arrive for this id.
    pub(crate) fn discard(&mut self, id: RequestId) {
        self.pending.remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
