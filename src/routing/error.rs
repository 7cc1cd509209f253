//! Route registration errors.

use thiserror::Error;

/// Errors raised while building the routing table.
///
/// These are configuration errors: they surface at registration time and the
/// caller is expected to refuse to serve rather than continue with an
/// ambiguous table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A variable and a literal segment, or two differently named variables,
    /// were registered at the same position below `parent`.
    #[error("conflicting path segments below '{parent}': '{existing}' and '{incoming}'")]
    Conflict {
        parent: String,
        existing: String,
        incoming: String,
    },
}
