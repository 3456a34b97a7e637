//! JWT error types.

/// JWT operation result type.
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors produced by JWT encoding and decoding.
///
/// Every failure mode is an ordinary value. Decode normalizes all internal
/// failures (codec errors, unparseable keys, crypto errors) into
/// [`JwtError::InvalidToken`], [`JwtError::InvalidSignature`], or
/// [`JwtError::Expired`]; nothing escapes as a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtError {
    /// The requested algorithm identifier is outside the supported set.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Structural malformation: wrong segment count, undecodable base64,
    /// undecodable JSON, or a segment that is not a JSON object.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// The signature does not verify against the resolved key.
    #[error("invalid signature")]
    InvalidSignature,
    /// The `exp` claim is at or before the current time.
    #[error("token expired")]
    Expired,
    /// Key material is incompatible with the requested algorithm family,
    /// or PEM key material could not be parsed on the signing path.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Claims or header could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create an invalid token error.
    #[inline]
    #[must_use]
    pub fn invalid_token(msg: &str) -> Self {
        JwtError::InvalidToken(msg.to_string())
    }

    /// Create an invalid key error.
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create an unsupported algorithm error.
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a serialization error.
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}
