//! Method + path request router with short-circuiting handler chains.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use dispatch::{Dispatcher, RequestContext, Response};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteError, RouteTrie};
