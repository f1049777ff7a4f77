use crate::constitution::Dosha;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const fn ordered() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_lowercase();
        Self::ordered()
            .into_iter()
            .find(|season| season.key() == key)
            .ok_or_else(|| ParseSeasonError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised season '{0}' (expected Spring, Summer, Fall, or Winter)")]
pub struct ParseSeasonError(pub String);

/// Health concerns that unlock one extra advisory line each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthConcern {
    Digestion,
    Sleep,
    Stress,
    Weight,
    Energy,
}

impl HealthConcern {
    /// Output order for concern insights, independent of selection order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Digestion,
            Self::Sleep,
            Self::Stress,
            Self::Weight,
            Self::Energy,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Digestion => "digestion",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Weight => "weight",
            Self::Energy => "energy",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Digestion => "Digestion Problems",
            Self::Sleep => "Sleep Issues",
            Self::Stress => "Stress & Anxiety",
            Self::Weight => "Weight Management",
            Self::Energy => "Low Energy",
        }
    }

    /// Exact key match; anything else is not a recognised concern.
    pub fn from_key(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|concern| concern.key() == value)
    }
}

/// Foods and practices to favour and to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAdviceSet {
    pub to_eat: Vec<&'static str>,
    pub to_avoid: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealTimingGuidance {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
    pub note: &'static str,
}

/// Practices spread across the day: waking, movement, winding down, and drinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRoutine {
    pub morning: &'static str,
    pub exercise: &'static str,
    pub evening: &'static str,
    pub hydration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickRemedy {
    pub issue: &'static str,
    pub solution: &'static str,
}

/// Everything the recommendations page renders for one dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    pub dosha: Dosha,
    pub description: &'static str,
    pub foods: FoodAdviceSet,
    pub meal_timing: MealTimingGuidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_guidance: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_tip: Option<&'static str>,
    pub insights: Vec<String>,
    pub daily_routine: DailyRoutine,
    pub quick_remedies: Vec<QuickRemedy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_parse_is_case_insensitive() {
        assert_eq!("WINTER".parse::<Season>(), Ok(Season::Winter));
        assert_eq!("Fall".parse::<Season>(), Ok(Season::Fall));
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn concern_keys_are_exact() {
        assert_eq!(HealthConcern::from_key("sleep"), Some(HealthConcern::Sleep));
        assert_eq!(HealthConcern::from_key("Sleep"), None);
        assert_eq!(HealthConcern::from_key("joints"), None);
    }
}
