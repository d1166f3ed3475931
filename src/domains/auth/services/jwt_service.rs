use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::domains::auth::models::{Claims, User};
use crate::shared::config::{ConfigError, JwtConfig};
use crate::shared::errors::{AuthError, TokenError};

/// Allowed margin when comparing `exp` against server time (5 minutes)
const CLOCK_SKEW_SECS: i64 = 300;

/// JWT issuer and verifier. Both operations are pure computations over the
/// immutable signing configuration captured at construction, so the service
/// is cheap to clone and safe to share across requests.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Fails fast if the signing key is absent: a service that cannot sign
    /// tokens must not start.
    pub fn new(config: JwtConfig) -> Result<Self, ConfigError> {
        if config.secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        // Signature and algorithm checks only; issuer, audience and expiry
        // are compared manually afterwards so the failure ordering is
        // deterministic and the clock is injectable. `exp` stays in the
        // required claims: a token without an expiry is rejected outright.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// How long issued tokens live
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds((self.config.expiry_hours * 3600.0).round() as i64)
    }

    /// Issue a signed token for an authenticated user. No side effects:
    /// nothing is persisted, validity is purely time- and signature-based.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        self.issue_at(user, Utc::now().timestamp())
    }

    pub fn issue_at(&self, user: &User, now: i64) -> Result<String, AuthError> {
        let exp = now + self.token_ttl().num_seconds();

        let claims = Claims {
            sub: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            nbf: now,
            exp,
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            name_identifier: user.id.to_string(),
            name: user.username.clone(),
            email_address: user.email.clone(),
            role_claim: user.role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate token: {e}")))
    }

    /// Verify a presented token and return its claim set.
    ///
    /// Checks run in a fixed order, short-circuiting on the first failure:
    /// malformed input, signature, issuer, audience, expiry. Every failure
    /// path is normalized into a [`TokenError`]; no library error escapes.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Malformed);
        }

        // Three non-empty dot-separated segments, checked before any
        // cryptographic work. An empty third segment is an unsigned token.
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(TokenError::Malformed);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)?;

        if claims.iss != self.config.issuer {
            return Err(TokenError::InvalidIssuer);
        }

        if claims.aud != self.config.audience {
            return Err(TokenError::InvalidAudience);
        }

        if now > claims.exp + CLOCK_SKEW_SECS {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        // Wrong or missing algorithm in the header: treat like a bad
        // signature, the token was not signed the way we require
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::InvalidSignature
        }
        // Undecodable segments, bad JSON, or a payload missing required
        // claims (exp above all)
        _ => TokenError::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::Role;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-0123456789".to_string(),
            issuer: "AuthApi".to_string(),
            audience: "AuthApiUsers".to_string(),
            expiry_hours: 1.0,
        }
    }

    fn test_user() -> User {
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
    fn refuses_to_construct_without_secret() {
        let mut config = test_config();
        config.secret = "   ".to_string();
        assert!(JwtService::new(config).is_err());
    }

    #[test]
    fn wrong_secret_fails_with_invalid_signature() {
        let service = JwtService::new(test_config()).unwrap();
        let token = service.issue(&test_user()).unwrap();

        let mut other = test_config();
        other.secret = "a-completely-different-secret".to_string();
        let verifier = JwtService::new(other).unwrap();

        assert_eq!(verifier.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn token_carries_both_claim_conventions() {
        let service = JwtService::new(test_config()).unwrap();
        let token = service.issue(&test_user()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, claims.user_id.to_string());
        assert_eq!(claims.name_identifier, claims.sub);
        assert_eq!(claims.name, claims.username);
        assert_eq!(claims.email_address, claims.email);
        assert_eq!(claims.role_claim, claims.role);
    }

    #[test]
    fn issued_tokens_get_unique_jti() {
        let service = JwtService::new(test_config()).unwrap();
        let user = test_user();
        let a = service.verify(&service.issue(&user).unwrap()).unwrap();
        let b = service.verify(&service.issue(&user).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }
}
