//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    /// The exclusive token was closed. Using a counter after teardown is a
    /// programming error; callers must not retry.
    #[error("exclusive token closed")]
    TokenClosed,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::TokenClosed => ClientCode::Internal,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_closed_is_internal() {
        assert_eq!(TallyError::TokenClosed.client_code(), ClientCode::Internal);
        assert_eq!(TallyError::TokenClosed.client_code().as_str(), "INTERNAL");
    }
}
