// =====================================================
// JWT issue/verify integration tests
// =====================================================
// These exercise the token core through the public library API. Expiry is
// tested with an injected clock, so no sleeping and no live services.

use chrono::Utc;

use auth_api::domains::auth::models::{Role, User};
use auth_api::domains::auth::services::JwtService;
use auth_api::shared::config::JwtConfig;
use auth_api::shared::errors::TokenError;

const TEST_SECRET: &str = "test-secret-key-0123456789";

fn config(issuer: &str, audience: &str, expiry_hours: f64) -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: issuer.to_string(),
        audience: audience.to_string(),
        expiry_hours,
    }
}

fn service() -> JwtService {
    JwtService::new(config("AuthApi", "AuthApiUsers", 1.0)).expect("valid config")
}

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password_hash: String::new(),
        role: Role::User,
        is_active: true,
        created_at: Utc::now(),
        last_login_at: None,
    }
}

#[test]
fn issued_token_round_trips() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");

    let claims = service.verify(&token).expect("verify");
    assert_eq!(claims.user_id, 1);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@x.com");
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.iss, "AuthApi");
    assert_eq!(claims.aud, "AuthApiUsers");
    assert!(!claims.jti.is_empty());
    assert_eq!(claims.exp, claims.iat + 3600);
    assert_eq!(claims.nbf, claims.iat);
}

#[test]
fn tampered_signature_fails_with_invalid_signature() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");

    // Flip the last character of the signature segment
    let mut chars: Vec<char> = token.chars().collect();
    let last = *chars.last().unwrap();
    *chars.last_mut().unwrap() = if last == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    assert_eq!(
        service.verify(&tampered),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn tampered_payload_fails_verification() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");

    let parts: Vec<&str> = token.split('.').collect();
    // Swap in a different (validly encoded) payload; the signature no
    // longer covers it
    let other = service.issue(&User { id: 2, ..alice() }).expect("issue");
    let other_payload = other.split('.').nth(1).unwrap();
    let spliced = format!("{}.{}.{}", parts[0], other_payload, parts[2]);

    assert_eq!(service.verify(&spliced), Err(TokenError::InvalidSignature));
}

#[test]
fn malformed_inputs_fail_cleanly() {
    let service = service();

    assert_eq!(service.verify(""), Err(TokenError::Malformed));
    assert_eq!(service.verify("   "), Err(TokenError::Malformed));
    assert_eq!(service.verify("not-a-token"), Err(TokenError::Malformed));
    assert_eq!(service.verify("a.b"), Err(TokenError::Malformed));
    assert_eq!(service.verify("a.b.c.d"), Err(TokenError::Malformed));
}

#[test]
fn unsigned_token_is_rejected_before_crypto() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");

    let parts: Vec<&str> = token.split('.').collect();
    let unsigned = format!("{}.{}.", parts[0], parts[1]);

    assert_eq!(service.verify(&unsigned), Err(TokenError::Malformed));
}

#[test]
fn garbage_signature_segment_is_not_a_signature_match() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");

    let parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], parts[1], "forged-signature");

    // Either way it must be a clean failure, and it must not verify
    assert!(service.verify(&forged).is_err());
}

#[test]
fn expiry_respects_clock_skew_boundary() {
    let service = service();
    let token = service.issue(&alice()).expect("issue");
    let claims = service.verify(&token).expect("verify");

    let boundary = claims.exp + 300; // 5-minute skew tolerance

    // Exactly at the boundary and one second before: still valid
    assert!(service.verify_at(&token, boundary - 1).is_ok());
    assert!(service.verify_at(&token, boundary).is_ok());

    // One second past the boundary: expired
    assert_eq!(
        service.verify_at(&token, boundary + 1),
        Err(TokenError::Expired)
    );
}

#[test]
fn one_hour_token_expires_two_hours_later() {
    // Concrete scenario: 1-hour expiry, checked with the clock advanced
    // by two hours
    let service = service();
    let now = Utc::now().timestamp();
    let token = service.issue_at(&alice(), now).expect("issue");

    assert!(service.verify_at(&token, now).is_ok());
    assert_eq!(
        service.verify_at(&token, now + 2 * 3600),
        Err(TokenError::Expired)
    );
}

#[test]
fn issuer_mismatch_fails_with_invalid_issuer() {
    let issuer_x = JwtService::new(config("X", "AuthApiUsers", 1.0)).unwrap();
    let issuer_y = JwtService::new(config("Y", "AuthApiUsers", 1.0)).unwrap();

    let token = issuer_x.issue(&alice()).expect("issue");
    assert_eq!(issuer_y.verify(&token), Err(TokenError::InvalidIssuer));
}

#[test]
fn audience_mismatch_fails_with_invalid_audience() {
    let aud_a = JwtService::new(config("AuthApi", "AudienceA", 1.0)).unwrap();
    let aud_b = JwtService::new(config("AuthApi", "AudienceB", 1.0)).unwrap();

    let token = aud_a.issue(&alice()).expect("issue");
    assert_eq!(aud_b.verify(&token), Err(TokenError::InvalidAudience));
}

#[test]
fn admin_identity_round_trips_with_admin_role() {
    let service = service();
    let admin = User {
        id: 7,
        username: "root".to_string(),
        email: "root@x.com".to_string(),
        role: Role::Admin,
        ..alice()
    };

    let claims = service.verify(&service.issue(&admin).unwrap()).unwrap();
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.role_claim, Role::Admin);
}

#[test]
fn fractional_expiry_hours_are_honored() {
    let service = JwtService::new(config("AuthApi", "AuthApiUsers", 0.5)).unwrap();
    let now = Utc::now().timestamp();
    let token = service.issue_at(&alice(), now).expect("issue");
    let claims = service.verify(&token).expect("verify");

    assert_eq!(claims.exp, now + 1800);
}
