use campus_auth::{AuthConfig, AuthResult, Authenticator, MAX_TOKEN_TTL_HOURS, Rejection, SubjectId};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

const SECRET: &str = "8Zn9Ql0gTvRqW3EzDX4uKX0nPjVqRnGp";
const OTHER_SECRET: &str = "a-completely-different-secret-of-32b";

fn authenticator(secret: &str) -> Authenticator {
    Authenticator::new(AuthConfig::new(secret).expect("valid test secret"))
}

fn sign_raw(payload: serde_json::Value, alg: Algorithm, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(alg),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign raw payload")
}

#[test]
fn issued_token_authenticates_as_its_subject() {
    let auth = authenticator(SECRET);

    for subject in [SubjectId::Int(1), SubjectId::Int(987_654), SubjectId::from("user-abc")] {
        let credential = auth.issue(subject.clone()).expect("issue");
        let header = credential.bearer_header();

        assert_eq!(
            auth.authenticate(Some(&header)),
            AuthResult::Authenticated(subject)
        );
    }
}

#[test]
fn repeated_checks_in_validity_window_agree() {
    let auth = authenticator(SECRET);
    let header = auth.issue(42_i64).expect("issue").bearer_header();

    let first = auth.authenticate(Some(&header));
    let second = auth.authenticate(Some(&header));
    let third = auth.authenticate(Some(&header));

    assert_eq!(first, AuthResult::Authenticated(SubjectId::Int(42)));
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn issued_token_expires_a_day_out_by_default() {
    let auth = authenticator(SECRET);
    let before = Utc::now();
    let credential = auth.issue(3_i64).expect("issue");
    let after = Utc::now();

    assert!(credential.expires_at >= before + Duration::hours(24));
    assert!(credential.expires_at <= after + Duration::hours(24));
}

#[test]
fn longest_allowed_ttl_still_issues() {
    let config = AuthConfig::new(SECRET)
        .expect("valid test secret")
        .with_token_ttl(Duration::hours(MAX_TOKEN_TTL_HOURS))
        .expect("ttl within bounds");
    let auth = Authenticator::new(config);

    let credential = auth.issue(3_i64).expect("issue");
    assert_eq!(
        auth.authenticate(Some(&credential.bearer_header())),
        AuthResult::Authenticated(SubjectId::Int(3))
    );
}

#[test]
fn token_with_past_expiry_is_expired() {
    let auth = authenticator(SECRET);
    let credential = auth
        .issue_with_expiry(7_i64, Utc::now() - Duration::hours(1))
        .expect("issue");

    assert_eq!(
        auth.authenticate(Some(&credential.bearer_header())),
        AuthResult::Rejected(Rejection::Expired)
    );
}

#[test]
fn leeway_tolerates_small_clock_skew() {
    let config = AuthConfig::new(SECRET).unwrap().with_leeway_seconds(120);
    let auth = Authenticator::new(config);
    let credential = auth
        .issue_with_expiry(7_i64, Utc::now() - Duration::seconds(30))
        .expect("issue");

    assert!(auth.authenticate(Some(&credential.bearer_header())).is_authenticated());
}

#[test]
fn token_from_another_secret_has_invalid_signature() {
    let issuer = authenticator(OTHER_SECRET);
    let verifier = authenticator(SECRET);
    let header = issuer.issue(7_i64).expect("issue").bearer_header();

    assert_eq!(
        verifier.authenticate(Some(&header)),
        AuthResult::Rejected(Rejection::InvalidSignature)
    );
}

#[test]
fn bad_signature_wins_over_expiry() {
    let issuer = authenticator(OTHER_SECRET);
    let verifier = authenticator(SECRET);
    let credential = issuer
        .issue_with_expiry(7_i64, Utc::now() - Duration::hours(1))
        .expect("issue");

    assert_eq!(
        verifier.authenticate(Some(&credential.bearer_header())),
        AuthResult::Rejected(Rejection::InvalidSignature)
    );
}

#[test]
fn other_algorithm_is_invalid_signature() {
    let auth = authenticator(SECRET);
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    let token = sign_raw(json!({"user_id": 7, "exp": exp}), Algorithm::HS384, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Rejected(Rejection::InvalidSignature)
    );
}

#[test]
fn absent_or_blank_header_is_missing_token() {
    let auth = authenticator(SECRET);

    assert_eq!(
        auth.authenticate(None),
        AuthResult::Rejected(Rejection::MissingToken)
    );
    assert_eq!(
        auth.authenticate(Some("")),
        AuthResult::Rejected(Rejection::MissingToken)
    );
    assert_eq!(
        auth.authenticate(Some("   ")),
        AuthResult::Rejected(Rejection::MissingToken)
    );
}

#[test]
fn raw_token_without_scheme_is_malformed() {
    let auth = authenticator(SECRET);
    let credential = auth.issue(7_i64).expect("issue");

    assert_eq!(
        auth.authenticate(Some(&credential.token)),
        AuthResult::Rejected(Rejection::Malformed)
    );
}

#[test]
fn header_shape_must_be_scheme_then_token() {
    let auth = authenticator(SECRET);
    let token = auth.issue(7_i64).expect("issue").token;

    for header in [
        format!("Basic {}", token),
        format!("Bearer {} extra", token),
        "Bearer".to_string(),
    ] {
        assert_eq!(
            auth.authenticate(Some(&header)),
            AuthResult::Rejected(Rejection::Malformed),
            "header: {header}"
        );
    }

    // Scheme is case-insensitive and surrounding whitespace is ignored.
    assert!(auth.authenticate(Some(&format!("bearer {}", token))).is_authenticated());
    assert!(auth.authenticate(Some(&format!("  Bearer   {}  ", token))).is_authenticated());
}

#[test]
fn garbage_token_is_malformed() {
    let auth = authenticator(SECRET);

    assert_eq!(
        auth.authenticate(Some("Bearer not-a-jwt")),
        AuthResult::Rejected(Rejection::Malformed)
    );
    assert_eq!(
        auth.authenticate(Some("Bearer a.b.c")),
        AuthResult::Rejected(Rejection::Malformed)
    );
}

#[test]
fn payload_without_user_id_is_malformed() {
    let auth = authenticator(SECRET);
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    let token = sign_raw(json!({"sub": "7", "exp": exp}), Algorithm::HS256, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Rejected(Rejection::Malformed)
    );
}

#[test]
fn payload_without_exp_is_accepted() {
    let auth = authenticator(SECRET);
    let token = sign_raw(json!({"user_id": 11}), Algorithm::HS256, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Authenticated(SubjectId::Int(11))
    );
}

#[test]
fn negative_exp_is_expired() {
    let auth = authenticator(SECRET);
    let token = sign_raw(json!({"user_id": 11, "exp": -1}), Algorithm::HS256, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Rejected(Rejection::Expired)
    );
}

#[test]
fn fractional_exp_in_the_past_is_expired() {
    let auth = authenticator(SECRET);
    let token = sign_raw(json!({"user_id": 11, "exp": 1000.5}), Algorithm::HS256, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Rejected(Rejection::Expired)
    );
}

#[test]
fn fractional_exp_in_the_future_is_accepted() {
    let auth = authenticator(SECRET);
    let token = sign_raw(
        json!({"user_id": 11, "exp": 4_000_000_000.5}),
        Algorithm::HS256,
        SECRET,
    );

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Authenticated(SubjectId::Int(11))
    );
}

#[test]
fn non_numeric_exp_is_malformed() {
    let auth = authenticator(SECRET);
    let token = sign_raw(json!({"user_id": 11, "exp": "tomorrow"}), Algorithm::HS256, SECRET);

    assert_eq!(
        auth.authenticate(Some(&format!("Bearer {}", token))),
        AuthResult::Rejected(Rejection::Malformed)
    );
}

#[test]
fn rejection_converts_to_err() {
    let auth = authenticator(SECRET);

    assert_eq!(
        auth.authenticate(None).into_result(),
        Err(Rejection::MissingToken)
    );
    assert_eq!(Rejection::InvalidSignature.reason(), "invalid_signature");
}
