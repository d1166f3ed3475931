use thiserror::Error;

/// Token verification failures. The categories are mutually exclusive and
/// distinguishable for diagnostics, even though the HTTP layer maps every
/// one of them to a uniform 401.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Empty input, wrong segment count, or undecodable header/payload
    #[error("malformed token")]
    Malformed,

    /// HMAC-SHA256 signature does not match (also covers unsigned tokens
    /// and unexpected algorithms)
    #[error("invalid token signature")]
    InvalidSignature,

    /// `iss` claim does not match the configured issuer
    #[error("invalid token issuer")]
    InvalidIssuer,

    /// `aud` claim does not match the configured audience
    #[error("invalid token audience")]
    InvalidAudience,

    /// `exp` plus the clock-skew tolerance is in the past
    #[error("token expired")]
    Expired,
}
