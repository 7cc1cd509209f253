//! Per-request context handed to every handler in a chain.

use std::collections::HashMap;

use serde_json::Value;

use crate::dispatch::response::Response;

/// Mutable state shared by the handlers of a single request.
///
/// Holds the variable store (seeded with path variables), the response
/// state, and a borrow of the transport's request value. A context is
/// created by the dispatcher for one request and dropped when that
/// request's chain finishes.
#[derive(Debug)]
pub struct RequestContext<'r, S> {
    request: &'r S,
    vars: HashMap<String, Value>,
    closed: bool,
    status: u16,
    body: String,
}

impl<'r, S> RequestContext<'r, S> {
    pub fn new(request: &'r S, vars: HashMap<String, Value>) -> Self {
        Self {
            request,
            vars,
            closed: false,
            status: 0,
            body: String::new(),
        }
    }

    /// The value the transport passed to `Dispatcher::handle`.
    pub fn request(&self) -> &'r S {
        self.request
    }

    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Shortcut for string variables, which includes every path variable.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(Value::as_str)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn vars(&self) -> &HashMap<String, Value> {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.vars
    }

    /// Set the response and close the context.
    ///
    /// The dispatcher stops the chain after the handler that closed the
    /// context returns. Calling this again before then overwrites status and
    /// body.
    pub fn respond(&mut self, status: u16, body: impl Into<String>) {
        self.closed = true;
        self.status = status;
        self.body = body.into();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_response(self) -> Response {
        Response {
            status: self.status,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_context_is_open_and_empty() {
        let ctx = RequestContext::new(&(), HashMap::new());
        assert!(!ctx.is_closed());
        assert_eq!(ctx.status(), 0);
        assert_eq!(ctx.body(), "");
        assert!(ctx.vars().is_empty());
    }

    #[test]
    fn test_vars_round_trip() {
        let mut ctx = RequestContext::new(&(), HashMap::new());
        ctx.set_var("user", "john");
        ctx.set_var("count", 3);
        ctx.vars_mut().insert("flag".into(), json!(true));

        assert_eq!(ctx.get_str("user"), Some("john"));
        assert_eq!(ctx.get_var("count"), Some(&json!(3)));
        assert_eq!(ctx.get_str("count"), None);
        assert_eq!(ctx.get_var("flag"), Some(&json!(true)));
        assert_eq!(ctx.get_var("missing"), None);
    }

    #[test]
    fn test_respond_closes_and_overwrites() {
        let mut ctx = RequestContext::new(&(), HashMap::new());
        ctx.respond(301, "Temporarily Redirect");
        assert!(ctx.is_closed());

        ctx.respond(500, "second");
        let response = ctx.into_response();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, "second");
    }

    #[test]
    fn test_request_is_borrowed_seed() {
        let seed = String::from("raw request");
        let ctx = RequestContext::new(&seed, HashMap::new());
        assert_eq!(ctx.request(), "raw request");
    }
}
