//! Wire types for the toolpane widget-host protocol.
//!
//! Embedded tool widgets talk to their embedding host over a JSON-RPC 2.0
//! shaped channel: one `ui/initialize` handshake, then asynchronous
//! notifications carrying tool results and presentation context. This crate
//! defines the envelope, the method names, and the handshake and context
//! payloads; it performs no I/O.
//!
//! Inbound classification is deliberately tolerant: the channel may carry
//! unrelated traffic, so anything that does not parse as a protocol
//! envelope simply fails to deserialize and is dropped by the caller.

mod context;
mod handshake;
mod message;
pub mod methods;

pub use context::{CssBundle, HostContext, StyleBundle, ThemeVariant};
pub use handshake::{
    ClientInfo, InitializeParams, InitializeResult, CLIENT_VERSION, PROTOCOL_VERSION,
};
pub use message::{
    Message, Notification, Request, RequestId, Response, ResponseError, JSONRPC_VERSION,
    UNKNOWN_ERROR,
};
