//! Error types shared across the engine

use thiserror::Error;

/// Errors that can cross the turn boundary.
///
/// Everything here is a recoverable, typed result value. The pipeline never
/// panics on user input; callers map these onto their own transport
/// representation (HTTP status codes, CLI exit messages, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The utterance was empty/whitespace or the request was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced session was never created or has been reset.
    /// Distinct from `InvalidInput` so callers can prompt for a new session
    /// instead of retrying the same turn.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// A language value outside the supported set.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A guide identifier outside the configured set.
    #[error("unknown guide: {0}")]
    UnknownGuide(String),

    /// The session store is at capacity.
    #[error("session limit reached ({0} active sessions)")]
    SessionLimitReached(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SessionNotFound("abc".into());
        assert_eq!(err.to_string(), "session not found: abc");

        let err = Error::InvalidInput("empty message".into());
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn test_not_found_is_distinct_from_invalid_input() {
        assert_ne!(
            Error::SessionNotFound("x".into()),
            Error::InvalidInput("x".into())
        );
    }
}
