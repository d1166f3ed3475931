use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;

use crate::domains::bmi::models::{AdminBmiEntry, BmiRecord};

pub struct BmiRepository {
    pool: PgPool,
}

impl BmiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the user's BMI record, or overwrite it if one already exists.
    /// One record per user is enforced by the unique index on user_id.
    pub async fn upsert(
        &self,
        user_id: i64,
        height: f64,
        weight: f64,
        gender: &str,
        bmi_value: f64,
        bmi_category: &str,
    ) -> Result<BmiRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO bmi_records (user_id, height, weight, gender, bmi_value, bmi_category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET height = EXCLUDED.height,
                weight = EXCLUDED.weight,
                gender = EXCLUDED.gender,
                bmi_value = EXCLUDED.bmi_value,
                bmi_category = EXCLUDED.bmi_category,
                updated_at = EXCLUDED.created_at
            RETURNING id, user_id, height, weight, gender, bmi_value, bmi_category, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(height)
        .bind(weight)
        .bind(gender)
        .bind(bmi_value)
        .bind(bmi_category)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to upsert BMI record")?;

        Ok(map_record(&row))
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Option<BmiRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, height, weight, gender, bmi_value, bmi_category, created_at, updated_at
            FROM bmi_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch BMI record")?;

        Ok(row.as_ref().map(map_record))
    }

    /// All records joined with their owners, newest first (admin listing)
    pub async fn list_with_users(&self) -> Result<Vec<AdminBmiEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.user_id, u.username, u.email,
                   b.height, b.weight, b.gender, b.bmi_value, b.bmi_category,
                   b.created_at, b.updated_at
            FROM bmi_records b
            JOIN users u ON u.id = b.user_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list BMI records")?;

        Ok(rows
            .iter()
            .map(|row| AdminBmiEntry {
                id: row.get("id"),
                user_id: row.get("user_id"),
                username: row.get("username"),
                email: row.get("email"),
                height: row.get("height"),
                weight: row.get("weight"),
                gender: row.get("gender"),
                bmi_value: row.get("bmi_value"),
                bmi_category: row.get("bmi_category"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect())
    }

    pub async fn all_records(&self) -> Result<Vec<BmiRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, height, weight, gender, bmi_value, bmi_category, created_at, updated_at
            FROM bmi_records
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch BMI records")?;

        Ok(rows.iter().map(map_record).collect())
    }
}

fn map_record(row: &PgRow) -> BmiRecord {
    BmiRecord {
        id: row.get("id"),
        user_id: row.get("user_id"),
        height: row.get("height"),
        weight: row.get("weight"),
        gender: row.get("gender"),
        bmi_value: row.get("bmi_value"),
        bmi_category: row.get("bmi_category"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
