use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// BMI record as stored in the database (one per user)
#[derive(Debug, Clone)]
pub struct BmiRecord {
    pub id: i64,
    pub user_id: i64,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub bmi_value: f64,
    pub bmi_category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// BMI calculation request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = BmiRequest)]
pub struct BmiRequest {
    /// Height in meters (0.5 - 3.0)
    #[schema(example = 1.80)]
    pub height: f64,

    /// Weight in kilograms (10 - 500)
    #[schema(example = 80.0)]
    pub weight: f64,

    /// Gender, "Erkek" or "Kadın"
    #[schema(example = "Erkek")]
    pub gender: String,
}

// BMI result returned to the owning user
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = BmiResult)]
pub struct BmiResult {
    pub id: i64,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub bmi_value: f64,
    pub bmi_category: String,
    pub advice: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = BmiResponse)]
pub struct BmiResponse {
    pub message: String,
    pub data: BmiResult,
}

/// BMI record joined with its owner, for the admin listing
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AdminBmiEntry)]
pub struct AdminBmiEntry {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub bmi_value: f64,
    pub bmi_category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AdminBmiListResponse)]
pub struct AdminBmiListResponse {
    pub message: String,
    pub data: Vec<AdminBmiEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = GenderDistribution)]
pub struct GenderDistribution {
    pub male: i64,
    pub female: i64,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = CategoryCount)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = BmiStatistics)]
pub struct BmiStatistics {
    pub total_records: i64,
    pub gender_distribution: GenderDistribution,
    /// Per-category counts, most frequent first
    pub category_distribution: Vec<CategoryCount>,
    pub average_bmi: f64,
}
