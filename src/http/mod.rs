//! HTTP transport adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout + trace layers)
//!     → dispatcher (method, path, request head as seed)
//!     → server.rs (status + body → HTTP response)
//!     → Send to client
//! ```
//!
//! The dispatcher never sees sockets, headers on the wire, or bodies; this
//! module is the only place that does.

pub mod server;

pub use server::{HttpDispatcher, HttpServer};
