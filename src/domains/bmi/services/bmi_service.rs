use std::collections::HashMap;

use crate::domains::bmi::models::{
    AdminBmiEntry, BmiRecord, BmiRequest, BmiStatistics, CategoryCount, GenderDistribution,
};
use crate::domains::bmi::services::calculator;
use crate::shared::database::{BmiRepository, Database, UserRepository};
use crate::shared::errors::BmiError;

const VALID_GENDERS: [&str; 2] = ["Erkek", "Kadın"];

// BmiService: per-user BMI tracking and admin reporting
#[derive(Clone)]
pub struct BmiService {
    db: Database,
}

impl BmiService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Compute the caller's BMI and store it, overwriting any earlier record
    pub async fn calculate_and_store(
        &self,
        user_id: i64,
        request: BmiRequest,
    ) -> Result<BmiRecord, BmiError> {
        validate_request(&request)?;

        // The token may outlive the account; check the row still exists
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| BmiError::DatabaseError(format!("Failed to fetch user: {e}")))?
            .filter(|u| u.is_active)
            .ok_or(BmiError::UserNotFound)?;

        let bmi_value = calculator::calculate_bmi(request.height, request.weight);
        let bmi_category = calculator::bmi_category(bmi_value);

        let bmi_repo = BmiRepository::new(self.db.pool().clone());
        let record = bmi_repo
            .upsert(
                user_id,
                request.height,
                request.weight,
                &request.gender,
                bmi_value,
                bmi_category,
            )
            .await
            .map_err(|e| BmiError::DatabaseError(format!("Failed to store BMI record: {e}")))?;

        tracing::info!(user_id, username = %user.username, bmi = bmi_value, "BMI calculated");
        Ok(record)
    }

    pub async fn get_my_bmi(&self, user_id: i64) -> Result<BmiRecord, BmiError> {
        let bmi_repo = BmiRepository::new(self.db.pool().clone());

        bmi_repo
            .find_by_user(user_id)
            .await
            .map_err(|e| BmiError::DatabaseError(format!("Failed to fetch BMI record: {e}")))?
            .ok_or(BmiError::RecordNotFound)
    }

    /// All users' records, newest first (admin)
    pub async fn list_all(&self) -> Result<Vec<AdminBmiEntry>, BmiError> {
        let bmi_repo = BmiRepository::new(self.db.pool().clone());

        bmi_repo
            .list_with_users()
            .await
            .map_err(|e| BmiError::DatabaseError(format!("Failed to list BMI records: {e}")))
    }

    /// Aggregate statistics over all records (admin)
    pub async fn statistics(&self) -> Result<BmiStatistics, BmiError> {
        let bmi_repo = BmiRepository::new(self.db.pool().clone());

        let records = bmi_repo
            .all_records()
            .await
            .map_err(|e| BmiError::DatabaseError(format!("Failed to fetch BMI records: {e}")))?;

        Ok(compute_statistics(&records))
    }
}

fn validate_request(request: &BmiRequest) -> Result<(), BmiError> {
    if !(0.5..=3.0).contains(&request.height) {
        return Err(BmiError::Validation(
            "Height must be between 0.5 and 3.0 meters".to_string(),
        ));
    }
    if !(10.0..=500.0).contains(&request.weight) {
        return Err(BmiError::Validation(
            "Weight must be between 10 and 500 kilograms".to_string(),
        ));
    }
    if !VALID_GENDERS.contains(&request.gender.as_str()) {
        return Err(BmiError::Validation(
            "Gender must be \"Erkek\" or \"Kadın\"".to_string(),
        ));
    }
    Ok(())
}

fn compute_statistics(records: &[BmiRecord]) -> BmiStatistics {
    let total = records.len() as i64;
    if total == 0 {
        return BmiStatistics {
            total_records: 0,
            gender_distribution: GenderDistribution {
                male: 0,
                female: 0,
                male_percentage: 0.0,
                female_percentage: 0.0,
            },
            category_distribution: Vec::new(),
            average_bmi: 0.0,
        };
    }

    let male = records.iter().filter(|r| r.gender == "Erkek").count() as i64;
    let female = records.iter().filter(|r| r.gender == "Kadın").count() as i64;

    let mut by_category: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *by_category.entry(record.bmi_category.as_str()).or_default() += 1;
    }

    let mut category_distribution: Vec<CategoryCount> = by_category
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
            percentage: calculator::round2(count as f64 / total as f64 * 100.0),
        })
        .collect();
    category_distribution.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));

    let average = records.iter().map(|r| r.bmi_value).sum::<f64>() / total as f64;

    BmiStatistics {
        total_records: total,
        gender_distribution: GenderDistribution {
            male,
            female,
            male_percentage: calculator::round2(male as f64 / total as f64 * 100.0),
            female_percentage: calculator::round2(female as f64 / total as f64 * 100.0),
        },
        category_distribution,
        average_bmi: calculator::round2(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(gender: &str, bmi: f64, category: &str) -> BmiRecord {
        BmiRecord {
            id: 0,
            user_id: 0,
            height: 1.75,
            weight: 70.0,
            gender: gender.to_string(),
            bmi_value: bmi,
            bmi_category: category.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn validates_ranges_and_gender() {
        let ok = BmiRequest {
            height: 1.80,
            weight: 80.0,
            gender: "Erkek".to_string(),
        };
        assert!(validate_request(&ok).is_ok());

        let too_tall = BmiRequest { height: 3.5, ..req_clone(&ok) };
        assert!(validate_request(&too_tall).is_err());

        let too_light = BmiRequest { weight: 5.0, ..req_clone(&ok) };
        assert!(validate_request(&too_light).is_err());

        let bad_gender = BmiRequest {
            gender: "other".to_string(),
            ..req_clone(&ok)
        };
        assert!(validate_request(&bad_gender).is_err());
    }

    fn req_clone(r: &BmiRequest) -> BmiRequest {
        BmiRequest {
            height: r.height,
            weight: r.weight,
            gender: r.gender.clone(),
        }
    }

    #[test]
    fn statistics_over_empty_set_are_zeroed() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.average_bmi, 0.0);
        assert!(stats.category_distribution.is_empty());
    }

    #[test]
    fn statistics_aggregate_counts_and_percentages() {
        let records = vec![
            record("Erkek", 24.69, "Normal"),
            record("Erkek", 27.0, "Fazla Kilolu"),
            record("Kadın", 22.0, "Normal"),
            record("Kadın", 35.16, "Obez (2. Derece)"),
        ];

        let stats = compute_statistics(&records);
        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.gender_distribution.male, 2);
        assert_eq!(stats.gender_distribution.female, 2);
        assert_eq!(stats.gender_distribution.male_percentage, 50.0);
        assert_eq!(stats.average_bmi, 27.21);

        assert_eq!(stats.category_distribution[0].category, "Normal");
        assert_eq!(stats.category_distribution[0].count, 2);
        assert_eq!(stats.category_distribution[0].percentage, 50.0);
    }
}
