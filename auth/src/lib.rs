//! Bearer-token authentication shared by every protected route.
//!
//! `Authenticator::authenticate` turns a raw `Authorization` header into an
//! [`AuthResult`]; `Authenticator::issue` mints the matching HS256 token at
//! login. Both use the one secret carried by [`AuthConfig`].

pub mod authenticator;
pub mod claims;
pub mod config;
pub mod error;

pub use authenticator::{AuthResult, Authenticator, Credential};
pub use claims::{Claims, SubjectId};
pub use config::{AuthConfig, ConfigError, MAX_TOKEN_TTL_HOURS};
pub use error::{IssueError, Rejection};
