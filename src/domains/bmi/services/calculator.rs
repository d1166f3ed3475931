//! BMI arithmetic: deterministic, stateless functions.

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// BMI = weight (kg) / height (m)^2, rounded to two decimals
pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> f64 {
    round2(weight_kg / (height_m * height_m))
}

/// WHO category bands, with the labels the stored records use
pub fn bmi_category(bmi: f64) -> &'static str {
    match bmi {
        b if b < 18.5 => "Zayıf",
        b if b < 25.0 => "Normal",
        b if b < 30.0 => "Fazla Kilolu",
        b if b < 35.0 => "Obez (1. Derece)",
        b if b < 40.0 => "Obez (2. Derece)",
        _ => "Morbid Obez",
    }
}

pub fn bmi_advice(bmi: f64) -> &'static str {
    match bmi {
        b if b < 18.5 => "Kilo almanız önerilir. Dengeli beslenme ve düzenli egzersiz yapın.",
        b if b < 25.0 => "İdeal kilodasınız! Bu durumu korumaya devam edin.",
        b if b < 30.0 => "Fazla kilolu kategorisinde olmakta. Sağlıklı beslenme ve egzersiz önerilir.",
        b if b < 35.0 => "Obezite riski var. Bir uzman ile görüşmeniz önerilir.",
        b if b < 40.0 => "Ciddi obezite riski. Mutlaka bir sağlık uzmanına danışın.",
        _ => "Morbid obezite. Acil tıbbi müdahale gerekebilir.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_values() {
        assert_eq!(calculate_bmi(1.80, 80.0), 24.69);
        assert_eq!(calculate_bmi(1.60, 90.0), 35.16);
    }

    #[test]
    fn categorizes_known_values() {
        assert_eq!(bmi_category(calculate_bmi(1.80, 80.0)), "Normal");
        assert_eq!(bmi_category(calculate_bmi(1.60, 90.0)), "Obez (2. Derece)");
    }

    #[test]
    fn category_thresholds_are_half_open() {
        assert_eq!(bmi_category(18.49), "Zayıf");
        assert_eq!(bmi_category(18.5), "Normal");
        assert_eq!(bmi_category(24.99), "Normal");
        assert_eq!(bmi_category(25.0), "Fazla Kilolu");
        assert_eq!(bmi_category(30.0), "Obez (1. Derece)");
        assert_eq!(bmi_category(35.0), "Obez (2. Derece)");
        assert_eq!(bmi_category(40.0), "Morbid Obez");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(24.696), 24.7);
        assert_eq!(round2(24.694), 24.69);
        assert_eq!(round2(24.0), 24.0);
    }
}
