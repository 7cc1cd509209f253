//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (start-up, single-threaded):
//!     (method, path, handler)
//!     → segment.rs (split path, classify literal / :variable:)
//!     → trie.rs (walk/create nodes, reject literal/variable clashes)
//!     → error.rs (RouteError::Conflict surfaced to caller)
//!
//! Lookup (per request, shared read-only):
//!     (method, path)
//!     → segment.rs (same splitting as registration)
//!     → trie.rs (recursive descent, bind variables)
//!     → Return: MatchResult { handlers, vars }
//! ```
//!
//! # Design Decisions
//! - Literal children are tried before the variable child
//! - A miss is an empty result, not an error
//! - Only registration can fail

pub mod error;
pub mod segment;
pub mod trie;

pub use error::RouteError;
pub use trie::{MatchResult, RouteTrie};
