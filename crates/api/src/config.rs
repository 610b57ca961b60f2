//! Process configuration, read once at startup.
//!
//! Nothing below the binary reads the environment: the values parsed here are
//! turned into immutable `TokenConfig` / `ValidationConfig` values and injected.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use gatekeeper_auth::TokenConfig;
use gatekeeper_validation::ValidationConfig;

pub const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_lifetime: chrono::Duration,
    pub lookup_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub validation: ValidationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                DEV_JWT_SECRET.to_string()
            }
        };

        let token_lifetime = match lookup("JWT_EXPIRES_IN") {
            Some(raw) => parse_lifetime(&raw)?,
            None => chrono::Duration::days(7),
        };

        let lookup_timeout = match lookup("AUTH_LOOKUP_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .map_err(|e| ConfigError::invalid("AUTH_LOOKUP_TIMEOUT_MS", format!("{e}")))?,
            ),
            None => gatekeeper_auth::authenticate::DEFAULT_LOOKUP_TIMEOUT,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", format!("{e}")))?;

        let mut validation = ValidationConfig::default();
        if let Some(raw) = lookup("MAX_UPLOAD_BYTES") {
            validation.file.max_size = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("MAX_UPLOAD_BYTES", format!("{e}")))?;
        }

        Ok(Self {
            jwt_secret,
            token_lifetime,
            lookup_timeout,
            bind_addr,
            validation,
        })
    }

    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.jwt_secret.as_bytes().to_vec(), self.token_lifetime)
    }
}

impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_lifetime", &self.token_lifetime)
            .field("lookup_timeout", &self.lookup_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("validation", &self.validation)
            .finish()
    }
}

/// Parse a token lifetime: bare seconds (`"3600"`) or `<n><unit>` with unit
/// one of `s`, `m`, `h`, `d` (`"7d"`, `"12h"`).
pub fn parse_lifetime(raw: &str) -> Result<chrono::Duration, ConfigError> {
    let raw = raw.trim();
    let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);

    let n: i64 = digits
        .parse()
        .map_err(|_| ConfigError::invalid("JWT_EXPIRES_IN", format!("expected a number in {raw:?}")))?;

    let duration = match unit {
        "" | "s" => chrono::Duration::try_seconds(n),
        "m" => chrono::Duration::try_minutes(n),
        "h" => chrono::Duration::try_hours(n),
        "d" => chrono::Duration::try_days(n),
        other => {
            return Err(ConfigError::invalid(
                "JWT_EXPIRES_IN",
                format!("unknown unit {other:?}"),
            ));
        }
    };
    duration.ok_or_else(|| ConfigError::invalid("JWT_EXPIRES_IN", "out of range"))
}
