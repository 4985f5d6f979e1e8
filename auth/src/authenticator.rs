use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::claims::{Claims, SubjectId};
use crate::config::AuthConfig;
use crate::error::{IssueError, Rejection};

const SCHEME: &str = "Bearer";

/// Outcome of checking an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Authenticated(SubjectId),
    Rejected(Rejection),
}

impl AuthResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated(_))
    }

    pub fn into_result(self) -> Result<SubjectId, Rejection> {
        match self {
            AuthResult::Authenticated(subject) => Ok(subject),
            AuthResult::Rejected(rejection) => Err(rejection),
        }
    }
}

impl From<Result<SubjectId, Rejection>> for AuthResult {
    fn from(r: Result<SubjectId, Rejection>) -> Self {
        match r {
            Ok(subject) => AuthResult::Authenticated(subject),
            Err(rejection) => AuthResult::Rejected(rejection),
        }
    }
}

/// A freshly signed token, as handed to a client at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// `Authorization` header value for this credential.
    pub fn bearer_header(&self) -> String {
        format!("{} {}", SCHEME, self.token)
    }
}

/// HS256 bearer-token verifier and issuer sharing one secret.
#[derive(Clone)]
pub struct Authenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: AuthConfig,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("Authenticator")
            .field("config", &self.config)
            .finish()
    }
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret());
        let decoding_key = DecodingKey::from_secret(config.secret());

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional and may be fractional or negative; it is checked
        // against the decoded claims in `verify_token` instead.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = config.leeway_seconds();

        Self {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Check a raw `Authorization` header value.
    pub fn authenticate(&self, header_value: Option<&str>) -> AuthResult {
        self.verify_header(header_value).into()
    }

    fn verify_header(&self, header_value: Option<&str>) -> Result<SubjectId, Rejection> {
        let header_value = header_value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(Rejection::MissingToken)?;

        let mut parts = header_value.split_whitespace();
        let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) => (scheme, token),
            _ => return Err(Rejection::Malformed),
        };
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(Rejection::Malformed);
        }

        self.verify_token(token)
    }

    /// Check a bare compact JWT (no scheme prefix).
    pub fn verify_token(&self, token: &str) -> Result<SubjectId, Rejection> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let rejection = Rejection::from(e);
                debug!(reason = rejection.reason(), "bearer token rejected");
                rejection
            })?;

        // Signature first, then expiry: a forged expired token is InvalidSignature.
        if data
            .claims
            .is_expired_at(Utc::now(), self.config.leeway_seconds())
        {
            debug!(reason = Rejection::Expired.reason(), "bearer token rejected");
            return Err(Rejection::Expired);
        }

        Ok(data.claims.user_id)
    }

    /// Sign `{user_id, exp = now + ttl}`.
    pub fn issue(&self, subject: impl Into<SubjectId>) -> Result<Credential, IssueError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.config.token_ttl())
            .ok_or(IssueError::ExpiryOutOfRange)?;
        self.issue_with_expiry(subject, expires_at)
    }

    /// Sign `{user_id, exp}` with an explicit expiry.
    pub fn issue_with_expiry(
        &self,
        subject: impl Into<SubjectId>,
        expires_at: DateTime<Utc>,
    ) -> Result<Credential, IssueError> {
        let claims = Claims::new(subject.into(), expires_at);

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        let token = jsonwebtoken::encode(&header, &claims, &self.encoding_key)?;

        Ok(Credential { token, expires_at })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
