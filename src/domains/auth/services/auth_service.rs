use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::domains::auth::models::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, Role, User, UserStatistics,
};
use crate::domains::auth::services::JwtService;
use crate::shared::database::{Database, UserRepository};
use crate::shared::errors::AuthError;

const MIN_PASSWORD_LEN: usize = 6;

// AuthService: registration, login and account management business logic
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    /// Register a new user and issue a token for it.
    /// Returns the created user together with its bearer token.
    pub async fn register(&self, mut request: RegisterRequest) -> Result<(User, String), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        // Username is optional: default to the local part of the email
        let username = match request.username.take() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => request
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        validate_email(&request.email)?;
        validate_username(&username)?;
        validate_password(&request.password, &request.confirm_password)?;

        // Role defaults to "user"; unknown values are rejected here, at the
        // boundary, not at every downstream check
        let role = match request.role.as_deref() {
            None | Some("") => Role::User,
            Some(raw) => Role::parse(raw).ok_or_else(|| AuthError::InvalidRole {
                role: raw.to_string(),
            })?,
        };

        let existing = user_repo
            .find_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email: {e}")))?;
        if existing.is_some() {
            return Err(AuthError::EmailAlreadyExists {
                email: request.email,
            });
        }

        let existing = user_repo
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check username: {e}")))?;
        if existing.is_some() {
            return Err(AuthError::UsernameAlreadyTaken { username });
        }

        let password_hash = Self::hash_password(&request.password)?;

        let user = user_repo
            .create_user(&username, &request.email, &password_hash, role)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create user: {e}")))?;

        tracing::info!(user_id = user.id, username = %user.username, "new user registered");

        let token = self.jwt_service.issue(&user)?;
        Ok((user, token))
    }

    /// Authenticate by email and password and issue a token.
    /// Credential failures are indistinguishable on purpose.
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        let user = user_repo
            .find_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {e}")))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled);
        }

        Self::verify_password(&request.password, &user.password_hash)?;

        user_repo
            .update_last_login(user.id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to update last login: {e}")))?;

        tracing::info!(user_id = user.id, username = %user.username, "user logged in");

        let token = self.jwt_service.issue(&user)?;
        Ok((user, token))
    }

    pub async fn get_profile(&self, user_id: i64) -> Result<User, AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        let user = user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {e}")))?
            .ok_or(AuthError::UserNotFound { id: user_id })?;

        if !user.is_active {
            return Err(AuthError::UserNotFound { id: user_id });
        }

        Ok(user)
    }

    pub async fn change_password(
        &self,
        user_id: i64,
        request: ChangePasswordRequest,
    ) -> Result<(), AuthError> {
        validate_password(&request.new_password, &request.confirm_password)?;

        let user = self.get_profile(user_id).await?;

        Self::verify_password(&request.current_password, &user.password_hash)
            .map_err(|_| AuthError::Validation("Current password is incorrect".to_string()))?;

        let new_hash = Self::hash_password(&request.new_password)?;

        let user_repo = UserRepository::new(self.db.pool().clone());
        user_repo
            .update_password(user_id, &new_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to update password: {e}")))?;

        tracing::info!(user_id, "user changed password");
        Ok(())
    }

    /// User statistics and recent registrations for the admin panel
    pub async fn admin_panel(&self) -> Result<(UserStatistics, Vec<User>), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        let counts = user_repo
            .count_users()
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to count users: {e}")))?;

        let recent = user_repo
            .recent_users(5)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch recent users: {e}")))?;

        Ok((
            UserStatistics {
                total_users: counts.total,
                active_users: counts.active,
                admin_users: counts.admins,
                user_users: counts.total - counts.admins,
            },
            recent,
        ))
    }

    fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {e}")))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {e}")))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    if email.is_empty() || email.len() > 100 || !email.contains('@') {
        return Err(AuthError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.len() < 3 || username.len() > 50 {
        return Err(AuthError::Validation(
            "Username must be between 3 and 50 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirmation {
        return Err(AuthError::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_passwords() {
        assert!(validate_password("abc", "abc").is_err());
        assert!(validate_password("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert!(validate_password("abcdef", "abcdeg").is_err());
    }

    #[test]
    fn rejects_bad_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("user@example.com").is_ok());
    }

    #[test]
    fn rejects_out_of_range_usernames() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"x".repeat(51)).is_err());
        assert!(validate_username("alice").is_ok());
    }
}
