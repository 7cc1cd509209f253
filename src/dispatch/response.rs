//! Final status and body handed back to the transport.

/// Status returned when no route matches.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Body returned when no route matches.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Outcome of one dispatched request.
///
/// `status` is `0` when the chain ran to completion without any handler
/// responding; transports decide how to write that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn not_found() -> Self {
        Self {
            status: NOT_FOUND_STATUS,
            body: NOT_FOUND_BODY.to_string(),
        }
    }

    /// True for the zero status an unanswered chain produces.
    pub fn is_unanswered(&self) -> bool {
        self.status == 0
    }
}
