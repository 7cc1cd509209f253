//! Fixed-status responders with handlebars body templates.
//!
//! Used for routes declared in the configuration file, where a handler has
//! to be built from data rather than code. The context variables are the
//! template data, so `{{name}}` renders the path variable `name`.

use std::collections::HashMap;

use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::Value;

use crate::dispatch::context::RequestContext;

const BODY_TEMPLATE: &str = "body";

/// Responds with a fixed status and a body rendered from context variables.
#[derive(Clone)]
pub struct TemplateResponder {
    status: u16,
    source: String,
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for TemplateResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateResponder")
            .field("status", &self.status)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl TemplateResponder {
    /// Compile `template`. Syntax errors surface here, not per request.
    pub fn new(status: u16, template: impl Into<String>) -> Result<Self, TemplateError> {
        let source = template.into();
        let mut registry = Handlebars::new();
        // Bodies are plain text, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string(BODY_TEMPLATE, &source)?;
        Ok(Self {
            status,
            source,
            registry,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Render the body with `vars` as template data.
    ///
    /// Strings are inserted as-is, numbers and booleans in their usual text
    /// form. Unknown names render as empty text.
    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, RenderError> {
        self.registry.render(BODY_TEMPLATE, vars)
    }

    /// Render the body and close the context; a render failure answers 500.
    pub fn respond<S>(&self, ctx: &mut RequestContext<'_, S>) {
        match self.render(ctx.vars()) {
            Ok(body) => ctx.respond(self.status, body),
            Err(e) => {
                tracing::error!(error = %e, template = %self.source, "Failed to render response body");
                ctx.respond(500, "Internal Server Error");
            }
        }
    }
}
