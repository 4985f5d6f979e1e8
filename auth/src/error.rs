use thiserror::Error;

/// Why a bearer credential was turned away.
///
/// Every variant is a terminal, request-scoped outcome. The HTTP layer
/// collapses them all to 401; the variant is kept for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("missing token")]
    MissingToken,
    #[error("malformed token")]
    Malformed,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("expired token")]
    Expired,
}

impl Rejection {
    /// Stable snake_case name for structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::MissingToken => "missing_token",
            Rejection::Malformed => "malformed",
            Rejection::InvalidSignature => "invalid_signature",
            Rejection::Expired => "expired",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for Rejection {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Rejection::InvalidSignature,
            ErrorKind::ExpiredSignature => Rejection::Expired,
            _ => Rejection::Malformed,
        }
    }
}

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("failed to sign token: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
}
