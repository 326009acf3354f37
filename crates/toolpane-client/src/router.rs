//! Method dispatch for inbound non-response traffic.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use toolpane_protocol::{methods, HostContext};
use toolpane_theme::ContextStore;

use crate::handler::WidgetHandler;

/// Routes notifications to the handler hooks and the context store.
///
/// Host-to-widget requests are routed here too, their ids ignored; the
/// widget never answers them.
pub(crate) struct NotificationRouter {
    handler: Arc<dyn WidgetHandler>,
    store: Arc<Mutex<ContextStore>>,
}

impl NotificationRouter {
    pub(crate) fn new(handler: Arc<dyn WidgetHandler>, store: Arc<Mutex<ContextStore>>) -> Self {
        Self { handler, store }
    }

    /// Dispatch one inbound message by method name.
    ///
    /// Unknown methods are dropped without error; the channel may carry
    /// unrelated traffic.
    pub(crate) async fn dispatch(&self, method: &str, params: Option<Value>) {
        match method {
            methods::TOOL_RESULT => {
                let Some(content) =
                    params.and_then(|mut p| p.get_mut("structuredContent").map(Value::take))
                else {
                    trace!("Tool result without structured content");
                    return;
                };
                self.handler.on_data(content).await;
            }
            methods::TOOL_INPUT => {
                self.handler
                    .on_tool_input(params.unwrap_or(Value::Null))
                    .await;
            }
            methods::TOOL_INPUT_PARTIAL => {
                self.handler
                    .on_tool_input_partial(params.unwrap_or(Value::Null))
                    .await;
            }
            methods::HOST_CONTEXT_CHANGED => {
                let update = match params.map(serde_json::from_value::<HostContext>) {
                    Some(Ok(update)) => update,
                    Some(Err(e)) => {
                        debug!(error = %e, "Ignoring malformed host context update");
                        return;
                    }
                    None => return,
                };
                self.store.lock().await.merge_and_apply(update);
            }
            methods::RESOURCE_TEARDOWN => {
                self.handler.on_teardown().await;
            }
            other => {
                trace!(method = other, "Ignoring unrecognized method");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::mpsc;

    use toolpane_protocol::ThemeVariant;
    use toolpane_theme::{vars, MemorySurface};

    struct RecordingHandler {
        data_tx: mpsc::UnboundedSender<Value>,
        teardowns: AtomicUsize,
    }

    #[async_trait]
    impl WidgetHandler for RecordingHandler {
        async fn on_data(&self, payload: Value) {
            self.data_tx.send(payload).ok();
        }

        async fn on_teardown(&self) {
            self.teardowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fixture() -> (
        NotificationRouter,
        mpsc::UnboundedReceiver<Value>,
        Arc<RecordingHandler>,
        MemorySurface,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handler = Arc::new(RecordingHandler {
            data_tx: tx,
            teardowns: AtomicUsize::new(0),
        });
        let surface = MemorySurface::new();
        let store = Arc::new(Mutex::new(ContextStore::new(Box::new(surface.clone()))));
        let router = NotificationRouter::new(handler.clone(), store);
        (router, rx, handler, surface)
    }

    #[tokio::test]
    async fn test_tool_result_delivers_structured_content_once() {
        let (router, mut rx, _handler, _surface) = fixture();

        router
            .dispatch(
                methods::TOOL_RESULT,
                Some(json!({"structuredContent": {"branch": "main"}})),
            )
            .await;

        assert_eq!(rx.try_recv().unwrap(), json!({"branch": "main"}));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_tool_result_without_content_is_noop() {
        let (router, mut rx, _handler, _surface) = fixture();

        router
            .dispatch(methods::TOOL_RESULT, Some(json!({"content": []})))
            .await;
        router.dispatch(methods::TOOL_RESULT, None).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_context_changed_merges_and_applies() {
        let (router, _rx, _handler, surface) = fixture();

        router
            .dispatch(
                methods::HOST_CONTEXT_CHANGED,
                Some(json!({
                    "theme": "light",
                    "styles": {"variables": {"--tp-accent": "#000000"}}
                })),
            )
            .await;

        assert_eq!(surface.color_scheme(), Some(ThemeVariant::Light));
        assert_eq!(surface.variable(vars::ACCENT), Some("#000000".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_context_is_ignored() {
        let (router, _rx, _handler, surface) = fixture();

        router
            .dispatch(methods::HOST_CONTEXT_CHANGED, Some(json!({"theme": 42})))
            .await;
        router.dispatch(methods::HOST_CONTEXT_CHANGED, None).await;

        assert_eq!(surface.color_scheme(), None);
        assert!(surface.variables().is_empty());
    }

    #[tokio::test]
    async fn test_teardown_invokes_hook() {
        let (router, _rx, handler, _surface) = fixture();

        router.dispatch(methods::RESOURCE_TEARDOWN, None).await;

        assert_eq!(handler.teardowns.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unrecognized_method_is_ignored() {
        let (router, mut rx, handler, surface) = fixture();

        router
            .dispatch("ui/notifications/something-else", Some(json!({"x": 1})))
            .await;

        assert!(rx.try_recv().is_err());
        assert_eq!(handler.teardowns.load(Ordering::SeqCst), 0);
        assert!(surface.variables().is_empty());
    }
}
