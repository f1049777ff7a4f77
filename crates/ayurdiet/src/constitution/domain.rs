use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three constitution tags of the traditional model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Canonical order. Also the tie-break priority when scores are equal.
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub const fn element_description(self) -> &'static str {
        match self {
            Self::Vata => "Air & Ether - Creative, adaptable, but prone to anxiety",
            Self::Pitta => "Fire & Water - Driven, intelligent, but prone to inflammation",
            Self::Kapha => "Water & Earth - Stable, compassionate, but prone to sluggishness",
        }
    }

    const fn priority(self) -> usize {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dosha {
    type Err = ParseDoshaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Self::Vata),
            "pitta" => Ok(Self::Pitta),
            "kapha" => Ok(Self::Kapha),
            _ => Err(ParseDoshaError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised dosha '{0}' (expected Vata, Pitta, or Kapha)")]
pub struct ParseDoshaError(pub String);

/// Coarse classification of how skewed a profile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImbalanceLevel {
    Balanced,
    Moderate,
    High,
}

impl ImbalanceLevel {
    /// Gap between the highest and lowest score: `> 10` is High, `> 5` is Moderate.
    pub const fn from_spread(primary_score: u32, tertiary_score: u32) -> Self {
        let delta = primary_score.saturating_sub(tertiary_score);
        if delta > 10 {
            Self::High
        } else if delta > 5 {
            Self::Moderate
        } else {
            Self::Balanced
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::High => "Your doshas are significantly imbalanced. Focus on balancing your primary dosha.",
            Self::Moderate => "Your doshas are moderately imbalanced. Work on grounding practices.",
            Self::Balanced => "Your doshas are well-balanced! Maintain your current practices.",
        }
    }
}

impl fmt::Display for ImbalanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated points per dosha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionScore {
    #[serde(rename = "Vata")]
    pub vata: u32,
    #[serde(rename = "Pitta")]
    pub pitta: u32,
    #[serde(rename = "Kapha")]
    pub kapha: u32,
}

impl ConstitutionScore {
    pub const fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn add(&mut self, dosha: Dosha, points: u32) {
        match dosha {
            Dosha::Vata => self.vata += points,
            Dosha::Pitta => self.pitta += points,
            Dosha::Kapha => self.kapha += points,
        }
    }

    pub const fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Doshas by score descending; equal scores keep `Dosha::ordered()` priority.
    pub fn ranked(&self) -> [Dosha; 3] {
        let mut ranked = Dosha::ordered();
        ranked.sort_by(|a, b| {
            self.get(*b)
                .cmp(&self.get(*a))
                .then(a.priority().cmp(&b.priority()))
        });
        ranked
    }
}

/// Ranked result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstitutionProfile {
    pub primary: Dosha,
    pub secondary: Dosha,
    pub tertiary: Dosha,
    pub scores: ConstitutionScore,
    pub imbalance_level: ImbalanceLevel,
    pub max_score: u32,
}

impl ConstitutionProfile {
    pub fn from_scores(scores: ConstitutionScore, max_score: u32) -> Self {
        let [primary, secondary, tertiary] = scores.ranked();
        let imbalance_level = ImbalanceLevel::from_spread(scores.get(primary), scores.get(tertiary));

        Self {
            primary,
            secondary,
            tertiary,
            scores,
            imbalance_level,
            max_score,
        }
    }

    pub fn ranked(&self) -> [Dosha; 3] {
        [self.primary, self.secondary, self.tertiary]
    }

    /// Score as a share of the bank's maximum, for result bars.
    pub fn score_percent(&self, dosha: Dosha) -> f32 {
        if self.max_score == 0 {
            return 0.0;
        }
        self.scores.get(dosha) as f32 / self.max_score as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imbalance_thresholds_are_strict() {
        assert_eq!(ImbalanceLevel::from_spread(18, 7), ImbalanceLevel::High);
        assert_eq!(ImbalanceLevel::from_spread(17, 7), ImbalanceLevel::Moderate);
        assert_eq!(ImbalanceLevel::from_spread(12, 6), ImbalanceLevel::Moderate);
        assert_eq!(ImbalanceLevel::from_spread(11, 6), ImbalanceLevel::Balanced);
        assert_eq!(ImbalanceLevel::from_spread(6, 6), ImbalanceLevel::Balanced);
    }

    #[test]
    fn ties_fall_back_to_canonical_priority() {
        let scores = ConstitutionScore {
            vata: 6,
            pitta: 6,
            kapha: 6,
        };
        assert_eq!(scores.ranked(), [Dosha::Vata, Dosha::Pitta, Dosha::Kapha]);

        let scores = ConstitutionScore {
            vata: 3,
            pitta: 6,
            kapha: 6,
        };
        assert_eq!(scores.ranked(), [Dosha::Pitta, Dosha::Kapha, Dosha::Vata]);
    }

    #[test]
    fn dosha_parses_case_insensitively() {
        assert_eq!("pitta".parse::<Dosha>(), Ok(Dosha::Pitta));
        assert_eq!(" KAPHA ".parse::<Dosha>(), Ok(Dosha::Kapha));
        assert!("agni".parse::<Dosha>().is_err());
    }

    #[test]
    fn score_serializes_with_dosha_labels() {
        let scores = ConstitutionScore {
            vata: 18,
            pitta: 0,
            kapha: 0,
        };
        let json = serde_json::to_value(scores).expect("scores serialize");
        assert_eq!(json["Vata"], 18);
        assert_eq!(json["Kapha"], 0);
    }

    #[test]
    fn score_percent_uses_bank_maximum() {
        let profile = ConstitutionProfile::from_scores(
            ConstitutionScore {
                vata: 9,
                pitta: 6,
                kapha: 3,
            },
            18,
        );
        assert_eq!(profile.score_percent(Dosha::Vata), 50.0);
        assert_eq!(profile.imbalance_level, ImbalanceLevel::Moderate);
    }
}
