//! Host protocol client for toolpane widgets
//!
//! This crate implements the widget side of the host embedding protocol:
//! the one-shot initialize handshake, request/response correlation over
//! an injected transport, and routing of inbound notifications to
//! rendering hooks and the theme context store. A widget whose host
//! never answers keeps working in standalone mode on whatever data still
//! reaches it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use toolpane_client::{ChannelHandler, ChannelTransport, WidgetClient};
//!
//! async fn run_widget() {
//!     let (transport, _to_host) = ChannelTransport::new();
//!     let (handler, mut data_rx) = ChannelHandler::new();
//!     let (_host_tx, host_rx) = tokio::sync::mpsc::unbounded_channel();
//!
//!     let client = WidgetClient::builder("commit-hygiene", Arc::new(handler))
//!         .connect(Arc::new(transport), host_rx);
//!     client.start().await;
//!
//!     while let Some(payload) = data_rx.recv().await {
//!         println!("Received: {:?}", payload);
//!     }
//! }
//! ```

mod client;
mod correlator;
mod error;
mod handler;
mod lifecycle;
mod router;
mod transport;

// Re-export main types
pub use client::{WidgetClient, WidgetClientBuilder, DEFAULT_HANDSHAKE_TIMEOUT};
pub use error::ClientError;
pub use handler::{ChannelHandler, WidgetHandler};
pub use lifecycle::{LifecycleState, LifecycleStatus};
pub use transport::{ChannelTransport, HostTransport};
