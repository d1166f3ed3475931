use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;

use crate::domains::auth::models::{Role, User};

pub struct UserRepository {
    pool: PgPool,
}

/// Aggregate counts for the admin panel
pub struct UserCounts {
    pub total: i64,
    pub active: i64,
    pub admins: i64,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, is_active, created_at, last_login_at";

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, role, is_active, created_at)
            VALUES ($1, $2, $3, $4, TRUE, $5)
            RETURNING id, username, email, password_hash, role, is_active, created_at, last_login_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        map_user(&row)
    }

    // Case-insensitive lookup, matching the unique index
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(username) = LOWER($1)"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by username")?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user by id")?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login_at = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update last login time")?;

        Ok(())
    }

    pub async fn update_password(&self, id: i64, password_hash: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update password")?;

        Ok(())
    }

    pub async fn count_users(&self) -> Result<UserCounts> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE is_active) AS active,
                   COUNT(*) FILTER (WHERE role = 'admin') AS admins
            FROM users
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to count users")?;

        Ok(UserCounts {
            total: row.get("total"),
            active: row.get("active"),
            admins: row.get("admins"),
        })
    }

    pub async fn recent_users(&self, limit: i64) -> Result<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch recent users")?;

        rows.iter().map(map_user).collect()
    }
}

fn map_user(row: &PgRow) -> Result<User> {
    let role_str: String = row.get("role");
    let role = Role::parse(&role_str).ok_or_else(|| anyhow!("unknown role in users table: {role_str}"))?;

    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role,
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        last_login_at: row.get("last_login_at"),
    })
}
