use super::aggregator::NutrientTotals;
use crate::constitution::Dosha;
use serde::Serialize;

const DAILY_CALORIE_REFERENCE: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NutritionQuality {
    Balanced,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl NutritionQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    fn from_points(points: u8) -> Self {
        if points >= 7 {
            Self::Excellent
        } else if points >= 5 {
            Self::VeryGood
        } else if points >= 3 {
            Self::Good
        } else {
            Self::Balanced
        }
    }
}

/// Energy split and quality grade for the nutrient panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAnalysis {
    pub protein_percent: f64,
    pub carb_percent: f64,
    pub fat_percent: f64,
    pub daily_intake_percent: u32,
    pub quality: NutritionQuality,
    pub quality_points: u8,
    pub guidance: Vec<&'static str>,
}

impl NutrientAnalysis {
    pub fn from_totals(totals: &NutrientTotals) -> Self {
        let calories = f64::from(totals.calories);
        let share = |energy: f64| {
            if calories > 0.0 {
                energy / calories * 100.0
            } else {
                0.0
            }
        };

        let protein_percent = share(totals.protein * 4.0);
        let carb_percent = share(totals.carbs * 4.0);
        let fat_percent = share(totals.fat * 9.0);

        let mut points = 0;
        if totals.fiber > 5.0 {
            points += 2;
        } else if totals.fiber > 3.0 {
            points += 1;
        }
        if protein_percent > 15.0 && protein_percent < 35.0 {
            points += 2;
        }
        if carb_percent > 40.0 && carb_percent < 60.0 {
            points += 2;
        }
        if fat_percent > 20.0 && fat_percent < 35.0 {
            points += 2;
        }
        if totals.calcium > 100 {
            points += 1;
        }
        if totals.iron > 2.0 {
            points += 1;
        }
        if totals.magnesium > 50 {
            points += 1;
        }

        let mut guidance = Vec::new();
        if totals.protein > 20.0 {
            guidance.push("✓ Excellent protein source");
        }
        if totals.fiber > 5.0 {
            guidance.push("✓ High in dietary fiber");
        }
        if totals.calcium > 100 {
            guidance.push("✓ Good calcium content");
        }
        if totals.iron > 2.0 {
            guidance.push("✓ Good iron source");
        }
        if protein_percent >= 10.0 {
            guidance.push("✓ Adequate protein balance");
        }
        if carb_percent >= 45.0 {
            guidance.push("✓ Good energy source");
        }
        if fat_percent <= 30.0 {
            guidance.push("✓ Healthy fat balance");
        }

        Self {
            protein_percent,
            carb_percent,
            fat_percent,
            daily_intake_percent: (calories / DAILY_CALORIE_REFERENCE * 100.0).round() as u32,
            quality: NutritionQuality::from_points(points),
            quality_points: points,
            guidance,
        }
    }
}

/// How well an ingredient mix suits each dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoshaSuitability {
    pub vata: String,
    pub pitta: String,
    pub kapha: String,
}

impl DoshaSuitability {
    /// The dosha(s) with the lowest, most pacifying, affinity score are rated excellent.
    ///
    /// A positive score means the mix aggravates that dosha, so the rating is
    /// deliberately the reverse of a "highest score wins" rule. Scores arrive rounded
    /// to two decimals, which keeps the equality check stable across ingredient order.
    pub fn from_totals(totals: &NutrientTotals) -> Self {
        let best = Dosha::ordered()
            .iter()
            .map(|dosha| totals.dosha_score(*dosha))
            .fold(f64::INFINITY, f64::min);

        let rate = |dosha: Dosha| {
            if totals.dosha_score(dosha) == best {
                format!("Excellent for {} pacification", dosha.label())
            } else {
                format!("Consider for {}", dosha.label())
            }
        };

        Self {
            vata: rate(Dosha::Vata),
            pitta: rate(Dosha::Pitta),
            kapha: rate(Dosha::Kapha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{Ingredient, NutrientAggregator, NutrientTable};

    #[test]
    fn zero_calories_yield_zero_shares() {
        let analysis = NutrientAnalysis::from_totals(&NutrientTotals::default());
        assert_eq!(analysis.protein_percent, 0.0);
        assert_eq!(analysis.daily_intake_percent, 0);
        assert_eq!(analysis.quality, NutritionQuality::Balanced);
        assert_eq!(analysis.guidance, vec!["✓ Healthy fat balance"]);
    }

    #[test]
    fn lentil_bowl_grades_well() {
        let table = NutrientTable::standard();
        let totals = NutrientAggregator::new(&table)
            .aggregate(&[Ingredient::new("lentil", 1.0), Ingredient::new("spinach", 1.0)])
            .expect("aggregates");

        let analysis = NutrientAnalysis::from_totals(&totals);
        // fiber +2, protein share ~32% +2, carbs ~69% +0, fat ~3% +0, iron +1, magnesium +1
        assert_eq!(analysis.quality_points, 6);
        assert_eq!(analysis.quality, NutritionQuality::VeryGood);
        assert_eq!(analysis.daily_intake_percent, 12);
        assert!(analysis.guidance.contains(&"✓ High in dietary fiber"));
    }

    #[test]
    fn suitability_favours_most_pacifying_dosha() {
        let totals = NutrientTotals {
            vata_score: -2.0,
            pitta_score: -1.0,
            kapha_score: 1.0,
            ..NutrientTotals::default()
        };
        let suitability = DoshaSuitability::from_totals(&totals);
        assert_eq!(suitability.vata, "Excellent for Vata pacification");
        assert_eq!(suitability.pitta, "Consider for Pitta");
        assert_eq!(suitability.kapha, "Consider for Kapha");
    }

    #[test]
    fn higher_affinity_is_never_rated_excellent() {
        let totals = NutrientTotals {
            vata_score: -0.6,
            pitta_score: -0.6,
            kapha_score: 0.6,
            ..NutrientTotals::default()
        };
        let suitability = DoshaSuitability::from_totals(&totals);
        assert_eq!(suitability.vata, "Excellent for Vata pacification");
        assert_eq!(suitability.pitta, "Excellent for Pitta pacification");
        assert_eq!(suitability.kapha, "Consider for Kapha");
    }
}
