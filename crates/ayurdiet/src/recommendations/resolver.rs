use super::domain::{
    DailyRoutine, FoodAdviceSet, HealthConcern, MealTimingGuidance, QuickRemedy,
    RecommendationBundle, Season,
};
use super::tables::RecommendationTables;
use crate::constitution::Dosha;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// Names the reference table a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
    FoodAdvice,
    MealTimings,
    Seasonal,
    BaseInsights,
    ConcernInsights,
    DailyRoutines,
    SeasonalTips,
    QuickRemedies,
}

impl ReferenceTable {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoodAdvice => "food advice",
            Self::MealTimings => "meal timings",
            Self::Seasonal => "seasonal guidance",
            Self::BaseInsights => "base insights",
            Self::ConcernInsights => "concern insights",
            Self::DailyRoutines => "daily routines",
            Self::SeasonalTips => "seasonal tips",
            Self::QuickRemedies => "quick remedies",
        }
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    #[error("no {table} entry for '{key}'")]
    ReferenceDataNotFound { table: ReferenceTable, key: String },
}

fn not_found(table: ReferenceTable, key: impl Into<String>) -> RecommendationError {
    let key = key.into();
    warn!(%table, %key, "reference data lookup missed");
    RecommendationError::ReferenceDataNotFound { table, key }
}

/// Resolves advice, timings, seasonal guidance, and insights for a dosha.
#[derive(Debug, Clone)]
pub struct RecommendationResolver {
    tables: RecommendationTables,
}

impl RecommendationResolver {
    pub fn new(tables: RecommendationTables) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(RecommendationTables::standard())
    }

    pub fn food_advice(&self, dosha: Dosha) -> Result<&FoodAdviceSet, RecommendationError> {
        self.tables
            .food_advice
            .get(&dosha)
            .ok_or_else(|| not_found(ReferenceTable::FoodAdvice, dosha.label()))
    }

    pub fn food_advice_for(&self, tag: &str) -> Result<&FoodAdviceSet, RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::FoodAdvice)?;
        self.food_advice(dosha)
    }

    pub fn meal_timing(&self, dosha: Dosha) -> Result<&MealTimingGuidance, RecommendationError> {
        self.tables
            .meal_timings
            .get(&dosha)
            .ok_or_else(|| not_found(ReferenceTable::MealTimings, dosha.label()))
    }

    pub fn meal_timing_for(&self, tag: &str) -> Result<&MealTimingGuidance, RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::MealTimings)?;
        self.meal_timing(dosha)
    }

    pub fn seasonal_guidance_for(
        &self,
        dosha: Dosha,
        season: Season,
    ) -> Result<&'static str, RecommendationError> {
        self.tables
            .seasonal
            .get(&dosha)
            .and_then(|by_season| by_season.get(&season))
            .copied()
            .ok_or_else(|| {
                not_found(
                    ReferenceTable::Seasonal,
                    format!("{}/{}", dosha.label(), season.key()),
                )
            })
    }

    /// Two-level lookup keyed by dosha label and the lowercased season label.
    pub fn seasonal_guidance(
        &self,
        tag: &str,
        season: &str,
    ) -> Result<&'static str, RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::Seasonal)?;
        let season: Season = season
            .parse()
            .map_err(|_| not_found(ReferenceTable::Seasonal, season.trim().to_lowercase()))?;
        self.seasonal_guidance_for(dosha, season)
    }

    pub fn daily_routine(&self, dosha: Dosha) -> Result<&DailyRoutine, RecommendationError> {
        self.tables
            .daily_routines
            .get(&dosha)
            .ok_or_else(|| not_found(ReferenceTable::DailyRoutines, dosha.label()))
    }

    pub fn daily_routine_for(&self, tag: &str) -> Result<&DailyRoutine, RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::DailyRoutines)?;
        self.daily_routine(dosha)
    }

    pub fn seasonal_tip_for(
        &self,
        dosha: Dosha,
        season: Season,
    ) -> Result<&'static str, RecommendationError> {
        self.tables
            .seasonal_tips
            .get(&dosha)
            .and_then(|by_season| by_season.get(&season))
            .copied()
            .ok_or_else(|| {
                not_found(
                    ReferenceTable::SeasonalTips,
                    format!("{}/{}", dosha.label(), season.key()),
                )
            })
    }

    /// Same keying as `seasonal_guidance`, against the shorter tip table.
    pub fn seasonal_tip(
        &self,
        tag: &str,
        season: &str,
    ) -> Result<&'static str, RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::SeasonalTips)?;
        let season: Season = season
            .parse()
            .map_err(|_| not_found(ReferenceTable::SeasonalTips, season.trim().to_lowercase()))?;
        self.seasonal_tip_for(dosha, season)
    }

    pub fn quick_remedies(&self, dosha: Dosha) -> Result<&[QuickRemedy], RecommendationError> {
        self.tables
            .quick_remedies
            .get(&dosha)
            .map(Vec::as_slice)
            .ok_or_else(|| not_found(ReferenceTable::QuickRemedies, dosha.label()))
    }

    pub fn quick_remedies_for(&self, tag: &str) -> Result<&[QuickRemedy], RecommendationError> {
        let dosha = parse_tag(tag, ReferenceTable::QuickRemedies)?;
        self.quick_remedies(dosha)
    }

    /// Base insights for the dosha followed by one line per recognised concern.
    ///
    /// Concern lines follow `HealthConcern::ordered()`, so the caller's ordering and
    /// duplicates have no effect. Unrecognised concern keys are ignored.
    pub fn generate_insights<I, S>(
        &self,
        dosha: Dosha,
        concerns: I,
    ) -> Result<Vec<String>, RecommendationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = BTreeSet::new();
        for concern in concerns {
            let key = concern.as_ref();
            match HealthConcern::from_key(key) {
                Some(concern) => {
                    selected.insert(concern);
                }
                None => debug!(concern = key, "ignoring unrecognised health concern"),
            }
        }

        self.insights_for(dosha, &selected)
    }

    pub fn insights_for(
        &self,
        dosha: Dosha,
        concerns: &BTreeSet<HealthConcern>,
    ) -> Result<Vec<String>, RecommendationError> {
        let base = self
            .tables
            .base_insights
            .get(&dosha)
            .ok_or_else(|| not_found(ReferenceTable::BaseInsights, dosha.label()))?;

        let mut insights: Vec<String> = base.iter().map(|line| line.to_string()).collect();

        for concern in HealthConcern::ordered() {
            if !concerns.contains(&concern) {
                continue;
            }
            let line = self
                .tables
                .concern_insights
                .get(&concern)
                .ok_or_else(|| not_found(ReferenceTable::ConcernInsights, concern.key()))?;
            insights.push(line.to_string());
        }

        Ok(insights)
    }

    pub fn recommend<I, S>(
        &self,
        dosha: Dosha,
        season: Option<Season>,
        concerns: I,
    ) -> Result<RecommendationBundle, RecommendationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seasonal_guidance = season
            .map(|season| self.seasonal_guidance_for(dosha, season))
            .transpose()?;
        let seasonal_tip = season
            .map(|season| self.seasonal_tip_for(dosha, season))
            .transpose()?;

        Ok(RecommendationBundle {
            dosha,
            description: dosha.element_description(),
            foods: self.food_advice(dosha)?.clone(),
            meal_timing: self.meal_timing(dosha)?.clone(),
            season,
            seasonal_guidance,
            seasonal_tip,
            insights: self.generate_insights(dosha, concerns)?,
            daily_routine: self.daily_routine(dosha)?.clone(),
            quick_remedies: self.quick_remedies(dosha)?.to_vec(),
        })
    }
}

fn parse_tag(tag: &str, table: ReferenceTable) -> Result<Dosha, RecommendationError> {
    tag.parse().map_err(|_| not_found(table, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_advice_lookup_by_label() {
        let resolver = RecommendationResolver::standard();
        let advice = resolver.food_advice_for("Pitta").expect("pitta advice");
        assert_eq!(advice.to_eat[0], "Cool, refreshing foods");
        assert_eq!(advice.to_avoid[0], "Spicy, hot foods");
    }

    #[test]
    fn unknown_tag_is_reference_miss() {
        let resolver = RecommendationResolver::standard();
        let err = resolver.meal_timing_for("Agni").expect_err("unknown dosha");
        assert_eq!(
            err,
            RecommendationError::ReferenceDataNotFound {
                table: ReferenceTable::MealTimings,
                key: "Agni".to_string()
            }
        );
    }

    #[test]
    fn seasonal_guidance_lowercases_the_season() {
        let resolver = RecommendationResolver::standard();
        let guidance = resolver
            .seasonal_guidance("Kapha", "WINTER")
            .expect("winter guidance");
        assert_eq!(
            guidance,
            "Maximum heat and movement; favor spicy and dry foods"
        );

        let err = resolver
            .seasonal_guidance("Kapha", "Monsoon")
            .expect_err("unknown season");
        assert!(matches!(
            err,
            RecommendationError::ReferenceDataNotFound {
                table: ReferenceTable::Seasonal,
                ref key,
            } if key == "monsoon"
        ));
    }

    #[test]
    fn missing_table_entry_surfaces_as_error() {
        let mut tables = RecommendationTables::standard();
        tables.meal_timings.remove(&Dosha::Kapha);
        tables
            .seasonal
            .get_mut(&Dosha::Vata)
            .expect("vata seasons")
            .remove(&Season::Fall);
        let resolver = RecommendationResolver::new(tables);

        assert!(resolver.meal_timing(Dosha::Kapha).is_err());
        assert!(resolver
            .seasonal_guidance_for(Dosha::Vata, Season::Fall)
            .is_err());
        assert!(resolver
            .seasonal_guidance_for(Dosha::Vata, Season::Winter)
            .is_ok());
    }

    #[test]
    fn insights_append_concerns_in_canonical_order() {
        let resolver = RecommendationResolver::standard();
        let insights = resolver
            .generate_insights(Dosha::Pitta, ["energy", "digestion", "energy"])
            .expect("pitta insights");

        assert_eq!(insights.len(), 8);
        assert!(insights[6].starts_with("⚠ For better digestion"));
        assert!(insights[7].starts_with("⚠ For better energy"));
    }

    #[test]
    fn insights_ignore_unknown_concerns() {
        let resolver = RecommendationResolver::standard();
        let plain = resolver
            .generate_insights(Dosha::Kapha, Vec::<String>::new())
            .expect("kapha insights");
        let with_unknown = resolver
            .generate_insights(Dosha::Kapha, ["joints"])
            .expect("kapha insights");
        assert_eq!(plain, with_unknown);
        assert_eq!(plain.len(), 6);
    }

    #[test]
    fn recommend_bundles_every_table() {
        let resolver = RecommendationResolver::standard();
        let bundle = resolver
            .recommend(Dosha::Vata, Some(Season::Winter), ["sleep"])
            .expect("bundle builds");

        assert_eq!(bundle.meal_timing.breakfast, "8:00 - 9:00 AM");
        assert_eq!(
            bundle.seasonal_guidance,
            Some("Maximum warming; favor ghee, oils, and heating spices")
        );
        assert_eq!(bundle.insights.len(), 7);
        assert_eq!(bundle.seasonal_tip, Some("Extra heat, oils, and spices"));
        assert_eq!(
            bundle.daily_routine.hydration,
            "Warm water throughout the day. Avoid cold drinks."
        );
        assert_eq!(bundle.quick_remedies[2].issue, "Insomnia");

        let without_season = resolver
            .recommend(Dosha::Vata, None, Vec::<&str>::new())
            .expect("bundle builds");
        assert!(without_season.seasonal_guidance.is_none());
        assert!(without_season.seasonal_tip.is_none());
    }

    #[test]
    fn routine_and_remedies_resolve_by_label() {
        let resolver = RecommendationResolver::standard();
        let routine = resolver.daily_routine_for("Kapha").expect("kapha routine");
        assert_eq!(
            routine.exercise,
            "Vigorous exercise, dancing, running. Push yourself."
        );

        let remedies = resolver.quick_remedies_for("Pitta").expect("pitta remedies");
        let issues: Vec<&str> = remedies.iter().map(|remedy| remedy.issue).collect();
        assert_eq!(issues, ["Acidity", "Inflammation", "Anger", "Skin Issues"]);

        assert_eq!(
            resolver.seasonal_tip("Pitta", "summer"),
            Ok("Maximize cooling; avoid heat exposure")
        );
    }

    #[test]
    fn routine_tip_and_remedy_misses_name_their_table() {
        let mut tables = RecommendationTables::standard();
        tables.daily_routines.remove(&Dosha::Pitta);
        tables.quick_remedies.remove(&Dosha::Vata);
        let resolver = RecommendationResolver::new(tables);

        match resolver.daily_routine(Dosha::Pitta) {
            Err(RecommendationError::ReferenceDataNotFound { table, key }) => {
                assert_eq!(table, ReferenceTable::DailyRoutines);
                assert_eq!(key, "Pitta");
            }
            other => panic!("expected routine miss, got {other:?}"),
        }
        assert!(resolver.quick_remedies(Dosha::Vata).is_err());
        assert!(resolver
            .recommend(Dosha::Vata, None, Vec::<&str>::new())
            .is_err());

        match resolver.seasonal_tip("Kapha", "monsoon") {
            Err(RecommendationError::ReferenceDataNotFound { table, key }) => {
                assert_eq!(table, ReferenceTable::SeasonalTips);
                assert_eq!(key, "monsoon");
            }
            other => panic!("expected season miss, got {other:?}"),
        }
        assert!(resolver.quick_remedies_for("Agni").is_err());
    }
}
