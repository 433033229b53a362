use std::fmt;

/// Body mass index from height in centimetres and weight in kilograms.
/// Returns `None` unless both are positive.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    let height_m = height_cm / 100.0;
    if height_m > 0.0 && weight_kg > 0.0 {
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let value = bmi(180.0, 81.0).unwrap();
        assert!((value - 25.0).abs() < 1e-9);
        assert_eq!(format!("{:.1}", bmi(170.0, 65.0).unwrap()), "22.5");
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert_eq!(bmi(0.0, 70.0), None);
        assert_eq!(bmi(170.0, 0.0), None);
        assert_eq!(bmi(-170.0, 70.0), None);
        assert_eq!(bmi(f64::NAN, 70.0), None);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }
}
