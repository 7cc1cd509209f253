//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / dispatch / http:
//!     → tracing events (structured fields: method, path, status)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```

pub mod logging;
