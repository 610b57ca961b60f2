use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gatekeeper_core::IdentityId;

use crate::{Identity, Role};

/// Claims carried by an issued token.
///
/// `iat` and `exp` are seconds since the Unix epoch, matching the registered
/// JWT claim names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: IdentityId,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// True when the identifying fields equal those of `identity`.
    pub fn matches(&self, identity: &Identity) -> bool {
        self.id == identity.id
            && self.email == identity.email
            && self.username == identity.username
            && self.role == identity.role
    }
}

/// Why a token was not accepted.
///
/// The variants stay distinct so callers can respond differently; the
/// authentication layer deliberately collapses them into one outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Check the time window of already-verified claims.
///
/// A token is expired from the second `exp` is reached, so a zero lifetime is
/// expired immediately.
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), TokenError> {
    if now.timestamp() >= claims.exp {
        return Err(TokenError::Expired);
    }
    Ok(())
}
