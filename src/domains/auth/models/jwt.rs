use serde::{Deserialize, Serialize};

use crate::domains::auth::models::Role;

/// The token payload. Every field is set once at issuance; the claim set
/// only exists embedded in a token or as the verifier's output.
///
/// Identity claims are carried under both conventions: the registered
/// claims plus `user_id`/`username`/`email`/`role` passthroughs, and their
/// schema-URI equivalents, so downstream consumers can read either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    // Registered claims
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,

    // Convenience passthrough claims
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,

    // Registered-claim equivalents
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier")]
    pub name_identifier: String,
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name")]
    pub name: String,
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress")]
    pub email_address: String,
    #[serde(rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role_claim: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLAIM_NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    const CLAIM_NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    const CLAIM_EMAIL_ADDRESS: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    const CLAIM_ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

    #[test]
    fn claim_uris_match_serde_renames() {
        let claims = Claims {
            sub: "1".into(),
            jti: "test".into(),
            iat: 0,
            nbf: 0,
            exp: 3600,
            iss: "AuthApi".into(),
            aud: "AuthApiUsers".into(),
            user_id: 1,
            username: "alice".into(),
            email: "alice@x.com".into(),
            role: Role::User,
            name_identifier: "1".into(),
            name: "alice".into(),
            email_address: "alice@x.com".into(),
            role_claim: Role::User,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value[CLAIM_NAME_IDENTIFIER], "1");
        assert_eq!(value[CLAIM_NAME], "alice");
        assert_eq!(value[CLAIM_EMAIL_ADDRESS], "alice@x.com");
        assert_eq!(value[CLAIM_ROLE], "user");
    }
}
