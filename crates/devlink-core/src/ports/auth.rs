//! Authentication ports.

use uuid::Uuid;

/// Claims carried by a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Token service - issues and verifies signed bearer tokens.
///
/// Stateless by design: validity is purely a function of the token and the
/// process-wide secret, with no revocation list to consult.
pub trait TokenService: Send + Sync {
    /// Issue a signed, time-limited token for a user.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash. Uses the hash scheme's own
    /// comparison primitive, never string equality.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("No token, authorization denied")]
    MissingToken,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
