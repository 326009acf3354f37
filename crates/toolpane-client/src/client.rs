//! The widget client: handshake driver, read loop, and request plumbing.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use toolpane_protocol::{
    methods, HostContext, InitializeParams, InitializeResult, Message, Notification, Request,
};
use toolpane_theme::{detect_preference, ContextStore, MemorySurface, StyleSurface};

use crate::correlator::RequestCorrelator;
use crate::error::ClientError;
use crate::handler::WidgetHandler;
use crate::lifecycle::{LifecycleState, LifecycleStatus};
use crate::router::NotificationRouter;
use crate::transport::HostTransport;

/// Default bound on the initialize round trip.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for a [`WidgetClient`].
///
/// Created via [`WidgetClient::builder`]. The defaults suit headless use:
/// a ten second handshake bound and a [`MemorySurface`] for style writes.
pub struct WidgetClientBuilder {
    name: String,
    handshake_timeout: Duration,
    surface: Option<Box<dyn StyleSurface>>,
    handler: Arc<dyn WidgetHandler>,
}

impl WidgetClientBuilder {
    /// Bound the initialize round trip. Expiry sends the client to
    /// `Standalone` rather than erroring.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Use a custom style surface instead of the in-memory default.
    pub fn with_surface(mut self, surface: Box<dyn StyleSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Attach to the host substrate and spawn the read loop.
    ///
    /// `incoming` carries every message the substrate delivers, already
    /// deserialized; the read loop consumes it until the client shuts
    /// down or the channel closes. Fallback theme tokens are applied
    /// before the loop starts, so the surface never lacks a token set.
    pub fn connect(
        self,
        transport: Arc<dyn HostTransport>,
        incoming: mpsc::UnboundedReceiver<Value>,
    ) -> WidgetClient {
        let Self {
            name,
            handshake_timeout,
            surface,
            handler,
        } = self;

        let surface = surface.unwrap_or_else(|| Box::new(MemorySurface::new()));
        let mut store = ContextStore::new(surface);

        let preference = detect_preference();
        store.apply_tokens(preference);

        let instance = Uuid::new_v4();
        let correlator = Arc::new(Mutex::new(RequestCorrelator::new()));
        let store = Arc::new(Mutex::new(store));
        let router = NotificationRouter::new(handler, store.clone());
        let cancel = CancellationToken::new();

        info!(
            widget = %name,
            instance = %instance,
            fallback = %preference,
            "Widget client connected"
        );

        let read_task = tokio::spawn(WidgetClient::read_loop(
            incoming,
            correlator.clone(),
            router,
            cancel.clone(),
            name.clone(),
        ));

        WidgetClient {
            name,
            instance,
            handshake_timeout,
            transport,
            correlator,
            status: Arc::new(Mutex::new(LifecycleStatus::new())),
            store,
            cancel,
            read_task,
        }
    }
}

/// Client side of the widget-host protocol for one embedded widget.
///
/// Owns its request correlator and lifecycle state outright; nothing is
/// shared between widget instances. Inbound messages are processed
/// strictly in arrival order by a single spawned read loop, which
/// resolves responses and routes everything else to the handler hooks
/// and the context store. Dropping the client cancels the loop.
pub struct WidgetClient {
    name: String,
    instance: Uuid,
    handshake_timeout: Duration,
    transport: Arc<dyn HostTransport>,
    correlator: Arc<Mutex<RequestCorrelator>>,
    status: Arc<Mutex<LifecycleStatus>>,
    store: Arc<Mutex<ContextStore>>,
    cancel: CancellationToken,
    read_task: JoinHandle<()>,
}

impl WidgetClient {
    /// Start building a client for the named widget.
    ///
    /// The name is what the host sees in the handshake's `clientInfo`.
    pub fn builder(name: impl Into<String>, handler: Arc<dyn WidgetHandler>) -> WidgetClientBuilder {
        WidgetClientBuilder {
            name: name.into(),
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            surface: None,
            handler,
        }
    }

    /// Run the one-shot initialize handshake.
    ///
    /// On success the host's context is merged and applied before the
    /// `initialized` acknowledgement goes out, and the client lands in
    /// `Initialized`. On host error, transport failure, or timeout the
    /// client lands in `Standalone` and keeps processing whatever
    /// notifications still arrive; no error surfaces to the caller.
    /// Exactly one handshake is attempted per instance; later calls are
    /// logged no-ops.
    pub async fn start(&self) {
        {
            let mut status = self.status.lock().await;
            if status.state != LifecycleState::Uninitialized {
                debug!(
                    widget = %self.name,
                    state = %status.state,
                    "Ignoring repeated start"
                );
                return;
            }
            status.transition(LifecycleState::Initializing);
        }

        let params = InitializeParams::for_widget(&self.name);
        let outcome = match tokio::time::timeout(
            self.handshake_timeout,
            self.request(methods::INITIALIZE, &params),
        )
        .await
        {
            Ok(inner) => inner,
            Err(_) => Err(ClientError::HandshakeTimeout),
        };

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                self.enter_standalone(&e).await;
                return;
            }
        };

        let init: InitializeResult = match serde_json::from_value(result) {
            Ok(init) => init,
            Err(e) => {
                debug!(
                    widget = %self.name,
                    error = %e,
                    "Initialize result not parseable, continuing without host context"
                );
                InitializeResult::default()
            }
        };

        // Host context must be visible before the host learns we are ready
        if let Some(context) = init.host_context {
            self.store.lock().await.merge_and_apply(context);
        }

        match self.notify(methods::INITIALIZED, &json!({})).await {
            Ok(()) => {
                self.status
                    .lock()
                    .await
                    .transition(LifecycleState::Initialized);
                info!(widget = %self.name, instance = %self.instance, "Handshake complete");
            }
            Err(e) => self.enter_standalone(&e).await,
        }
    }

    /// Send a correlated request and await the host's answer.
    pub async fn request<T: Serialize>(
        &self,
        method: &str,
        params: &T,
    ) -> Result<Value, ClientError> {
        let params = serde_json::to_value(params)?;
        let (id, rx) = self.correlator.lock().await.register();

        trace!(widget = %self.name, id = %id, method = method, "Sending request");
        let envelope = Message::Request(Request::new(id, method, params));
        if let Err(e) = self.transport.send(envelope).await {
            self.correlator.lock().await.discard(id);
            return Err(e);
        }

        rx.await.map_err(|_| ClientError::ChannelClosed)?
    }

    /// Send a fire-and-forget notification.
    pub async fn notify<T: Serialize>(&self, method: &str, params: &T) -> Result<(), ClientError> {
        let params = serde_json::to_value(params)?;
        trace!(widget = %self.name, method = method, "Sending notification");
        self.transport
            .send(Message::Notification(Notification::new(method, params)))
            .await
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> LifecycleState {
        self.status.lock().await.state
    }

    /// Lifecycle state with its transition timestamp.
    pub async fn status(&self) -> LifecycleStatus {
        *self.status.lock().await
    }

    /// Snapshot of the merged host context.
    pub async fn host_context(&self) -> HostContext {
        self.store.lock().await.context().clone()
    }

    /// The widget name reported to the host.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-instance id used in diagnostics.
    pub fn instance(&self) -> Uuid {
        self.instance
    }

    /// Stop the read loop. Dropping the client has the same effect.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    async fn enter_standalone(&self, reason: &ClientError) {
        self.status
            .lock()
            .await
            .transition(LifecycleState::Standalone);
        warn!(
            widget = %self.name,
            instance = %self.instance,
            reason = %reason,
            "Handshake failed, running standalone"
        );
    }

    async fn read_loop(
        mut incoming: mpsc::UnboundedReceiver<Value>,
        correlator: Arc<Mutex<RequestCorrelator>>,
        router: NotificationRouter,
        cancel: CancellationToken,
        widget: String,
    ) {
        let mut message_count = 0u64;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(widget = %widget, total_messages = message_count, "Read loop cancelled");
                    break;
                }
                maybe = incoming.recv() => {
                    let Some(value) = maybe else {
                        debug!(widget = %widget, total_messages = message_count, "Host channel closed");
                        break;
                    };
                    message_count += 1;
                    Self::handle_message(value, &correlator, &router).await;
                }
            }
        }
    }

    async fn handle_message(
        value: Value,
        correlator: &Arc<Mutex<RequestCorrelator>>,
        router: &NotificationRouter,
    ) {
        let message = match Message::deserialize(&value) {
            Ok(message) => message,
            Err(e) => {
                // The substrate may carry unrelated traffic
                let raw = value.to_string();
                let preview: String = raw.chars().take(200).collect();
                debug!(error = %e, preview = %preview, "Dropping non-envelope message");
                return;
            }
        };

        match message {
            Message::Response(response) => {
                correlator.lock().await.deliver(response);
            }
            Message::Request(request) => {
                // Host requests are routed like notifications, id ignored
                router.dispatch(&request.method, request.params).await;
            }
            Message::Notification(notification) => {
                router.dispatch(&notification.method, notification.params).await;
            }
        }
    }
}

impl Drop for WidgetClient {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.read_task.abort();
    }
}
