//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Transport (method, path, seed)
//!     → dispatcher.rs (resolve via RouteTrie)
//!         → no handlers: Response 404 "Not Found"
//!     → context.rs (fresh RequestContext seeded with path variables)
//!     → globals, then route handlers, one at a time
//!         → stop after the first handler that responds
//!     → response.rs (status + body back to the transport)
//! ```
//!
//! # Design Decisions
//! - Handlers are plain closures over `&mut RequestContext`
//! - Contexts are never shared between requests
//! - Route table is immutable while serving

pub mod context;
pub mod dispatcher;
pub mod responder;
pub mod response;

pub use context::RequestContext;
pub use dispatcher::{Dispatcher, Handler};
pub use responder::TemplateResponder;
pub use response::Response;
