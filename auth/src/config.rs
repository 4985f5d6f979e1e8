use std::{env, fmt};

use chrono::Duration;

/// HS256 wants at least as many key bytes as the hash output.
pub const MIN_SECRET_LEN: usize = 32;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process-wide, immutable authentication settings.
///
/// Built once at startup and handed to `Authenticator::new`.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    token_ttl: Duration,
    leeway_seconds: u64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthConfig")
            .field("token_ttl", &self.token_ttl)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid("AUTH_SECRET"));
        }

        Ok(Self {
            secret,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            leeway_seconds: 0,
        })
    }

    /// Rejects a lifetime that is not positive or exceeds `MAX_TOKEN_TTL_HOURS`.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Result<Self, ConfigError> {
        if ttl <= Duration::zero() || ttl > Duration::hours(MAX_TOKEN_TTL_HOURS) {
            return Err(ConfigError::Invalid("AUTH_TOKEN_TTL_HOURS"));
        }
        self.token_ttl = ttl;
        Ok(self)
    }

    pub fn with_leeway_seconds(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    /// Reads `AUTH_SECRET`, `AUTH_TOKEN_TTL_HOURS` and `AUTH_LEEWAY_SECONDS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let secret = env::var("AUTH_SECRET").map_err(|_| ConfigError::Missing("AUTH_SECRET"))?;

        let token_ttl_hours = match env::var("AUTH_TOKEN_TTL_HOURS") {
            Ok(v) => v
                .parse::<i64>()
                .ok()
                .filter(|h| (1..=MAX_TOKEN_TTL_HOURS).contains(h))
                .ok_or(ConfigError::Invalid("AUTH_TOKEN_TTL_HOURS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        let leeway_seconds = env::var("AUTH_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        Ok(Self::new(secret)?
            .with_token_ttl(Duration::hours(token_ttl_hours))?
            .with_leeway_seconds(leeway_seconds))
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }
}
