//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Register the built-in global handlers and routes
//! - Register the routes declared in the configuration
//!
//! # Design Decisions
//! - Fail fast: a route conflict is a start-up error, never a request error
//! - Built-in routes are registered before configured ones

use std::path::Path;

use axum::http::request::Parts;
use handlebars::TemplateError;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{load_config, ConfigError, ServerConfig};
use crate::dispatch::{RequestContext, TemplateResponder};
use crate::http::server::HttpDispatcher;
use crate::routing::RouteError;

/// Header carrying a caller-supplied request id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Context variable holding the request id.
pub const REQUEST_ID_VAR: &str = "request_id";

/// Path of the built-in greeting route.
pub const GREETING_PATH: &str = "/hello/:name:";

/// Errors that abort start-up.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot register {method} {path}: {source}")]
    Route {
        method: String,
        path: String,
        #[source]
        source: RouteError,
    },

    #[error("invalid body template for {method} {path}: {source}")]
    Template {
        method: String,
        path: String,
        #[source]
        source: TemplateError,
    },
}

/// Load the configuration file, or fall back to defaults.
pub fn load(path: Option<&Path>) -> Result<ServerConfig, BuildError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(ServerConfig::default()),
    }
}

/// Build the routing table for the HTTP server.
pub fn build_dispatcher(config: &ServerConfig) -> Result<HttpDispatcher, BuildError> {
    let mut dispatcher = HttpDispatcher::new();

    dispatcher.register_global("*", assign_request_id);
    register(&mut dispatcher, "GET", GREETING_PATH, greet)?;

    for route in &config.routes {
        let responder = TemplateResponder::new(route.status, route.body.clone()).map_err(|source| {
            BuildError::Template {
                method: route.method.clone(),
                path: route.path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            method = %route.method,
            path = %route.path,
            status = responder.status(),
            "Configured route"
        );
        register(&mut dispatcher, &route.method, &route.path, move |ctx| {
            responder.respond(ctx)
        })?;
    }

    tracing::info!(
        routes = config.routes.len() + 1,
        globals = dispatcher.global_count(),
        "Routing table built"
    );
    Ok(dispatcher)
}

fn register<F>(dispatcher: &mut HttpDispatcher, method: &str, path: &str, handler: F) -> Result<(), BuildError>
where
    F: Fn(&mut RequestContext<'_, Parts>) + Send + Sync + 'static,
{
    dispatcher
        .register_route(method, path, handler)
        .map_err(|source| BuildError::Route {
            method: method.to_string(),
            path: path.to_string(),
            source,
        })?;
    Ok(())
}

/// Reuse the caller's `x-request-id` or mint a new one.
fn assign_request_id(ctx: &mut RequestContext<'_, Parts>) {
    let id = ctx
        .request()
        .headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    ctx.set_var(REQUEST_ID_VAR, id);
}

fn greet(ctx: &mut RequestContext<'_, Parts>) {
    let body = format!("Hello, {}.", ctx.get_str("name").unwrap_or_default());
    ctx.respond(200, body);
}
