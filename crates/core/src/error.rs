use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every failure the domain layer can produce is one of these variants.
/// The API crate maps them onto HTTP status codes; nothing in this crate
/// knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A well-formed identifier that matches no record.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: bad identifier string, missing or mistyped body
    /// field, or a reference to a record that does not exist. The message
    /// is safe for direct client display.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness invariant was violated by an otherwise valid request.
    /// Expected and recoverable, not a server fault.
    #[error("{0}")]
    Conflict(String),

    /// An unanticipated internal failure. The message is for logs only
    /// and must never reach clients verbatim.
    #[error("{0}")]
    Internal(String),
}
