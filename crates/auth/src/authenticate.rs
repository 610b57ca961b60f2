//! Bearer-credential extraction and identity resolution.
//!
//! Transport-agnostic: callers pass the raw `Authorization` header value and
//! decide how to surface the outcome (see `gatekeeper-api`).

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::store::IdentityStore;
use crate::token::TokenService;
use crate::Identity;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the required-authentication path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Access token required")]
    MissingCredential,

    #[error("Invalid or expired token")]
    InvalidCredential,
}

/// Pull the token out of an `Authorization` header value.
///
/// `None` for an absent header, a header without the literal `"Bearer "`
/// prefix, or a blank remainder.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

/// Resolves bearer tokens to live identities.
#[derive(Clone)]
pub struct Authenticator {
    tokens: TokenService,
    store: Arc<dyn IdentityStore>,
    lookup_timeout: Duration,
}

impl Authenticator {
    pub fn new(tokens: TokenService, store: Arc<dyn IdentityStore>) -> Self {
        Self {
            tokens,
            store,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Verify `token` and load the identity it names.
    ///
    /// Any verification failure, missing or inactive record, store error or
    /// lookup timeout yields `None`. The specific failure is logged, not
    /// returned.
    pub async fn resolve_identity(&self, token: &str) -> Option<Identity> {
        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(reason = %e, "bearer token rejected");
                return None;
            }
        };

        let lookup = self.store.find_by_id(&claims.id);
        let record = match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(Some(record))) => record,
            Ok(Ok(None)) => {
                tracing::debug!(identity_id = %claims.id, "token names an unknown identity");
                return None;
            }
            Ok(Err(e)) => {
                tracing::warn!(identity_id = %claims.id, error = %e, "identity lookup failed");
                return None;
            }
            Err(_) => {
                tracing::warn!(
                    identity_id = %claims.id,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "identity lookup timed out"
                );
                return None;
            }
        };

        if !record.active {
            tracing::debug!(identity_id = %claims.id, "identity is inactive");
            return None;
        }

        Some(record.into_identity())
    }

    /// Required authentication: no credential is rejected before any lookup.
    pub async fn require(&self, header: Option<&str>) -> Result<Identity, AuthenticationError> {
        let token = extract_bearer(header).ok_or(AuthenticationError::MissingCredential)?;
        self.resolve_identity(token)
            .await
            .ok_or(AuthenticationError::InvalidCredential)
    }

    /// Optional authentication: anything short of a live identity is anonymous.
    pub async fn optional(&self, header: Option<&str>) -> Option<Identity> {
        let token = extract_bearer(header)?;
        self.resolve_identity(token).await
    }
}

impl core::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Authenticator")
            .field("tokens", &self.tokens)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}
