//! Token issuance and verification (HS256 JWT).

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use gatekeeper_core::Clock;

use crate::claims::{TokenClaims, TokenError, validate_claims};
use crate::Identity;

/// Signing configuration, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    lifetime: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<Vec<u8>>, lifetime: Duration) -> Self {
        Self {
            secret: secret.into(),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl core::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Issues and verifies signed, time-bounded identity assertions.
///
/// Holds only immutable state; share it behind an `Arc` or clone it freely.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(&config.secret),
            decoding: DecodingKey::from_secret(&config.secret),
            lifetime: config.lifetime,
            clock,
        }
    }

    /// Sign a token for `identity`, valid from now for the configured lifetime.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        let iat = self.clock.now().timestamp();
        let claims = TokenClaims {
            id: identity.id.clone(),
            email: identity.email.clone(),
            username: identity.username.clone(),
            role: identity.role,
            iat,
            exp: iat.saturating_add(self.lifetime.num_seconds()),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify the signature, then the expiry, and hand back the claims
    /// exactly as they were signed.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        // Expiry is checked against the injected clock below, without leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map_err(|e| token_error(e.kind()))?;

        validate_claims(&data.claims, self.clock.now())?;
        Ok(data.claims)
    }
}

impl core::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenService")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

fn token_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
