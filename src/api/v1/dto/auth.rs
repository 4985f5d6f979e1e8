/*
 * Responsibility
 * - /auth/register, /auth/login request/response DTO
 * - Fields are Option so a missing key and an empty string fail the same way
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Trimmed, validated registration input.
#[derive(Debug, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<Registration, &'static str> {
        let (Some(full_name), Some(email), Some(password), Some(confirm_password)) = (
            non_blank(self.full_name),
            non_blank(self.email),
            self.password.filter(|p| !p.is_empty()),
            self.confirm_password.filter(|p| !p.is_empty()),
        ) else {
            return Err("all fields are required");
        };

        if password != confirm_password {
            return Err("passwords do not match");
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err("password must be at least 8 characters");
        }
        if !email.contains('@') {
            return Err("invalid email address");
        }

        Ok(Registration {
            full_name,
            email,
            password,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)`.
    pub fn validate(self) -> Result<(String, String), &'static str> {
        match (non_blank(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err("email and password are required"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Always "Bearer"
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(full_name: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            confirm_password: Some(confirm.to_string()),
        }
    }

    #[test]
    fn register_trims_name_and_email() {
        let out = register("  Ada Lovelace ", " ada@example.com", "correct-horse", "correct-horse")
            .validate()
            .unwrap();

        assert_eq!(out.full_name, "Ada Lovelace");
        assert_eq!(out.email, "ada@example.com");
        assert_eq!(out.password, "correct-horse");
    }

    #[test]
    fn register_requires_every_field() {
        let req = RegisterRequest {
            full_name: Some("Ada".into()),
            email: None,
            password: Some("correct-horse".into()),
            confirm_password: Some("correct-horse".into()),
        };
        assert_eq!(req.validate(), Err("all fields are required"));

        let blank_name = register("   ", "ada@example.com", "correct-horse", "correct-horse");
        assert_eq!(blank_name.validate(), Err("all fields are required"));
    }

    #[test]
    fn register_rejects_mismatch_before_length() {
        let req = register("Ada", "ada@example.com", "short", "shorter");
        assert_eq!(req.validate(), Err("passwords do not match"));
    }

    #[test]
    fn register_rejects_short_password_and_bad_email() {
        assert_eq!(
            register("Ada", "ada@example.com", "1234567", "1234567").validate(),
            Err("password must be at least 8 characters")
        );
        assert_eq!(
            register("Ada", "ada.example.com", "12345678", "12345678").validate(),
            Err("invalid email address")
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let ok = LoginRequest {
            email: Some("ada@example.com".into()),
            password: Some("pw".into()),
        };
        assert_eq!(
            ok.validate(),
            Ok(("ada@example.com".to_string(), "pw".to_string()))
        );

        let missing = LoginRequest {
            email: Some("ada@example.com".into()),
            password: Some(String::new()),
        };
        assert!(missing.validate().is_err());
    }
}
