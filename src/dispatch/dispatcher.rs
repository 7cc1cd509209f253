//! Handler chain composition and execution.
//!
//! # Responsibilities
//! - Hold the route trie and the global handler list
//! - Resolve a request, build its context and run the chain
//! - Stop the chain as soon as a handler responds
//!
//! # Design Decisions
//! - Registration needs `&mut self`, dispatch needs `&self`: build the
//!   dispatcher first, then share it (e.g. in an `Arc`) for serving
//! - Unmatched requests never run global handlers
//! - A chain that finishes without a response yields status 0, not 200

use std::collections::HashMap;

use serde_json::Value;

use crate::dispatch::context::RequestContext;
use crate::dispatch::response::Response;
use crate::routing::{MatchResult, RouteError, RouteTrie};

/// A registered handler.
pub type Handler<S> = Box<dyn Fn(&mut RequestContext<'_, S>) + Send + Sync>;

/// Routes requests to handler chains.
///
/// `S` is whatever the transport passes as the per-request seed; handlers
/// can reach it through [`RequestContext::request`].
pub struct Dispatcher<S> {
    trie: RouteTrie<Handler<S>>,
    globals: Vec<Handler<S>>,
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("globals", &self.globals.len())
            .finish_non_exhaustive()
    }
}

impl<S> Dispatcher<S> {
    pub fn new() -> Self {
        Self {
            trie: RouteTrie::new(),
            globals: Vec::new(),
        }
    }

    /// Append a handler that runs before the route handlers of every matched
    /// request.
    ///
    /// `method` is recorded in the log only: global handlers run for every
    /// method.
    pub fn register_global<F>(&mut self, method: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut RequestContext<'_, S>) + Send + Sync + 'static,
    {
        self.globals.push(Box::new(handler));
        tracing::debug!(method = %method, position = self.globals.len(), "Registered global handler");
        self
    }

    /// Register a route handler.
    ///
    /// Fails when `path` puts a variable and a literal segment (or two
    /// different variables) at the same position as an existing route.
    pub fn register_route<F>(&mut self, method: &str, path: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&mut RequestContext<'_, S>) + Send + Sync + 'static,
    {
        if let Err(e) = self.trie.add_route(method, path, Box::new(handler)) {
            tracing::warn!(method = %method, path = %path, error = %e, "Rejected route");
            return Err(e);
        }
        tracing::debug!(method = %method, path = %path, "Registered route handler");
        Ok(self)
    }

    /// Number of registered global handlers.
    pub fn global_count(&self) -> usize {
        self.globals.len()
    }

    /// Dispatch one request.
    pub fn handle(&self, method: &str, path: &str, seed: &S) -> Response {
        let MatchResult { handlers, vars } = self.trie.resolve(method, path);

        if handlers.is_empty() {
            tracing::debug!(method = %method, path = %path, "No route matched");
            return Response::not_found();
        }

        let vars: HashMap<String, Value> = vars
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        let mut ctx = RequestContext::new(seed, vars);

        let chain_len = self.globals.len() + handlers.len();
        let chain = self.globals.iter().chain(handlers);
        let mut invoked = 0;

        for handler in chain {
            handler(&mut ctx);
            invoked += 1;
            if ctx.is_closed() {
                break;
            }
        }

        tracing::debug!(
            method = %method,
            path = %path,
            invoked,
            chain_len,
            status = ctx.status(),
            "Dispatched request"
        );

        ctx.into_response()
    }
}
