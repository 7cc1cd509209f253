//! Segment trie storing per-method handler lists.
//!
//! # Responsibilities
//! - Insert routes segment by segment, rejecting ambiguous layouts
//! - Resolve a method + path to the matching handlers and path variables
//!
//! # Design Decisions
//! - Generic over the stored handler type; the trie never calls handlers
//! - Children of a node are either all literal or a single variable
//! - Append-only: there is no removal
//! - Lookups borrow handlers from the trie instead of cloning them

use std::collections::HashMap;

use crate::routing::error::RouteError;
use crate::routing::segment::{is_variable, split_path, variable_name, ROOT};

/// Result of a single lookup.
#[derive(Debug)]
pub struct MatchResult<'t, H> {
    /// Matched route handlers in registration and discovery order.
    pub handlers: Vec<&'t H>,
    /// Path variables bound during the descent.
    pub vars: HashMap<String, String>,
}

impl<H> Default for MatchResult<'_, H> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            vars: HashMap::new(),
        }
    }
}

impl<H> MatchResult<'_, H> {
    /// True when no handler matched.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[derive(Debug)]
struct Node<H> {
    segment: String,
    children: HashMap<String, Node<H>>,
    handlers: HashMap<String, Vec<H>>,
}

impl<H> Node<H> {
    fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            children: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// Check that `incoming` may be added as a new child of this node.
    fn check_child(&self, incoming: &str) -> Result<(), RouteError> {
        let incoming_is_variable = is_variable(incoming);
        for existing in self.children.keys() {
            if is_variable(existing) || (incoming_is_variable && existing != incoming) {
                return Err(RouteError::Conflict {
                    parent: self.segment.clone(),
                    existing: existing.clone(),
                    incoming: incoming.to_string(),
                });
            }
        }
        Ok(())
    }

    /// `segments[0]` is the value consumed to reach this node.
    fn collect<'t>(&'t self, method: &str, segments: &[&str], out: &mut MatchResult<'t, H>) {
        let Some((current, rest)) = segments.split_first() else {
            return;
        };

        if let Some(name) = variable_name(&self.segment) {
            out.vars.insert(name.to_string(), (*current).to_string());
        }

        let Some(next) = rest.first() else {
            if let Some(handlers) = self.handlers.get(method) {
                out.handlers.extend(handlers.iter());
            }
            return;
        };

        let literal = self.children.get(*next);
        let variables = self
            .children
            .iter()
            .filter(|(segment, _)| is_variable(segment))
            .map(|(_, child)| child);

        for child in literal.into_iter().chain(variables) {
            child.collect(method, rest, out);
        }
    }
}

/// Routing table keyed by path segment.
///
/// Build the table with [`RouteTrie::add_route`] before sharing it; lookups
/// take `&self` and may run concurrently once no more routes are added.
#[derive(Debug)]
pub struct RouteTrie<H> {
    root: Node<H>,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT),
        }
    }

    /// Register `handler` for `method` on `path`.
    ///
    /// Leading, trailing and repeated slashes are ignored. Handlers registered
    /// more than once for the same route are all kept, in order.
    pub fn add_route(&mut self, method: &str, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        let segments = split_path(path);
        let mut node = &mut self.root;

        for segment in segments.iter().skip(1) {
            if !node.children.contains_key(*segment) {
                node.check_child(segment)?;
            }
            node = node
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| Node::new(*segment));
        }

        node.handlers.entry(method.to_string()).or_default().push(handler);
        Ok(self)
    }

    /// Look up the handlers registered for `method` on `path`.
    ///
    /// Misses are not errors: the result simply holds no handlers, plus any
    /// variables bound before the descent failed.
    pub fn resolve(&self, method: &str, path: &str) -> MatchResult<'_, H> {
        let segments = split_path(path);
        let mut result = MatchResult::default();
        self.root.collect(method, &segments, &mut result);
        result
    }
}
