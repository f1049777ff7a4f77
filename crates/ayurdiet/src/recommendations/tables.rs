use super::domain::{
    DailyRoutine, FoodAdviceSet, HealthConcern, MealTimingGuidance, QuickRemedy, Season,
};
use crate::constitution::Dosha;
use std::collections::BTreeMap;

/// Read-only reference data consumed by the resolver.
#[derive(Debug, Clone, Default)]
pub struct RecommendationTables {
    pub food_advice: BTreeMap<Dosha, FoodAdviceSet>,
    pub meal_timings: BTreeMap<Dosha, MealTimingGuidance>,
    pub seasonal: BTreeMap<Dosha, BTreeMap<Season, &'static str>>,
    pub base_insights: BTreeMap<Dosha, Vec<&'static str>>,
    pub concern_insights: BTreeMap<HealthConcern, &'static str>,
    pub daily_routines: BTreeMap<Dosha, DailyRoutine>,
    /// Short one-line seasonal reminders shown beside the insights.
    pub seasonal_tips: BTreeMap<Dosha, BTreeMap<Season, &'static str>>,
    pub quick_remedies: BTreeMap<Dosha, Vec<QuickRemedy>>,
}

impl RecommendationTables {
    pub fn standard() -> Self {
        Self {
            food_advice: standard_food_advice(),
            meal_timings: standard_meal_timings(),
            seasonal: standard_seasonal(),
            base_insights: standard_base_insights(),
            concern_insights: standard_concern_insights(),
            daily_routines: standard_daily_routines(),
            seasonal_tips: standard_seasonal_tips(),
            quick_remedies: standard_quick_remedies(),
        }
    }
}

fn standard_food_advice() -> BTreeMap<Dosha, FoodAdviceSet> {
    BTreeMap::from([
        (
            Dosha::Vata,
            FoodAdviceSet {
                to_eat: vec![
                    "Warm, cooked foods",
                    "Ghee and oils",
                    "Sweet, sour, salty tastes",
                    "Grains: wheat, rice, oats",
                    "Vegetables: carrots, beets, asparagus, zucchini",
                    "Fruits: bananas, avocados, berries",
                    "Spices: ginger, cumin, black pepper",
                    "Nuts and seeds (soaked)",
                    "Warm milk with spices",
                    "Sesame oil",
                ],
                to_avoid: vec![
                    "Raw, cold foods",
                    "Dry fruits and vegetables",
                    "Caffeine in excess",
                    "Refined sugar",
                    "Corn, barley",
                    "Bitter and astringent tastes",
                    "Ice cream, cold drinks",
                    "Excessive fasting",
                    "Popcorn, crackers",
                    "Carbonated beverages",
                ],
            },
        ),
        (
            Dosha::Pitta,
            FoodAdviceSet {
                to_eat: vec![
                    "Cool, refreshing foods",
                    "Coconut oil",
                    "Sweet, bitter, astringent tastes",
                    "Whole grains: barley, rice, oats",
                    "Vegetables: leafy greens, cucumbers, broccoli, celery",
                    "Fruits: coconut, melons, grapes, pomegranate",
                    "Legumes: mung beans, split peas",
                    "Spices: cilantro, fennel, turmeric",
                    "Cooling herbs: mint, aloe",
                    "Ghee (in moderation)",
                ],
                to_avoid: vec![
                    "Spicy, hot foods",
                    "Alcohol and caffeine",
                    "Excess salt",
                    "Red meat",
                    "Sesame and mustard oil",
                    "Sour fruits and fermented foods",
                    "Hot peppers, garlic, onions",
                    "Hot beverages",
                    "Fried and greasy foods",
                    "Excess sun exposure",
                ],
            },
        ),
        (
            Dosha::Kapha,
            FoodAdviceSet {
                to_eat: vec![
                    "Light, warming foods",
                    "Mustard oil",
                    "Spicy, bitter, astringent tastes",
                    "Light grains: barley, millet, corn",
                    "Vegetables: leafy greens, broccoli, cabbage, peppers",
                    "Fruits: apples, pears, berries, pomegranate",
                    "Legumes: mung beans, lentils",
                    "Spices: ginger, black pepper, cayenne, turmeric",
                    "Honey (in moderation)",
                    "Herbal teas",
                ],
                to_avoid: vec![
                    "Heavy, oily foods",
                    "Dairy in excess",
                    "Sweet, salty tastes",
                    "Rice, wheat in excess",
                    "Coconut oil, sesame oil",
                    "Nuts in excess",
                    "Cold drinks and foods",
                    "Sugar and refined carbs",
                    "Meat and fish (heavy proteins)",
                    "Frozen desserts",
                ],
            },
        ),
    ])
}

fn standard_meal_timings() -> BTreeMap<Dosha, MealTimingGuidance> {
    BTreeMap::from([
        (
            Dosha::Vata,
            MealTimingGuidance {
                breakfast: "8:00 - 9:00 AM",
                lunch: "12:00 - 1:00 PM (largest meal)",
                dinner: "6:00 - 7:00 PM (light)",
                note: "Eat at regular times for grounding",
            },
        ),
        (
            Dosha::Pitta,
            MealTimingGuidance {
                breakfast: "7:00 - 8:00 AM (light)",
                lunch: "12:00 - 1:00 PM (largest meal)",
                dinner: "7:00 - 8:00 PM (moderate)",
                note: "Avoid eating too late to prevent acidity",
            },
        ),
        (
            Dosha::Kapha,
            MealTimingGuidance {
                breakfast: "7:00 - 8:00 AM (light or skip)",
                lunch: "12:00 - 1:00 PM (largest meal)",
                dinner: "6:00 - 7:00 PM (light)",
                note: "Avoid heavy breakfasts; exercise before eating",
            },
        ),
    ])
}

fn standard_seasonal() -> BTreeMap<Dosha, BTreeMap<Season, &'static str>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            BTreeMap::from([
                (
                    Season::Spring,
                    "Increase warm oils; add grounding foods like root vegetables",
                ),
                (
                    Season::Summer,
                    "Can handle more raw foods but keep warm; add cooling spices to prevent overheating",
                ),
                (
                    Season::Fall,
                    "Increase oils and warm foods; favor heavier foods for stability",
                ),
                (
                    Season::Winter,
                    "Maximum warming; favor ghee, oils, and heating spices",
                ),
            ]),
        ),
        (
            Dosha::Pitta,
            BTreeMap::from([
                (
                    Season::Spring,
                    "Cooling herbs and vegetables; reduce spicy foods",
                ),
                (
                    Season::Summer,
                    "Maximum cooling; coconut, cucumber, melons; avoid heat",
                ),
                (
                    Season::Fall,
                    "Warm but not spicy; balance with cooling ingredients",
                ),
                (
                    Season::Winter,
                    "More warming but avoid excess heat; favor mild spices",
                ),
            ]),
        ),
        (
            Dosha::Kapha,
            BTreeMap::from([
                (
                    Season::Spring,
                    "Light, warming foods; avoid mucus-forming foods",
                ),
                (
                    Season::Summer,
                    "Light meals; increase exercise; spicy and bitter foods",
                ),
                (
                    Season::Fall,
                    "Warming spices; light meals; promote digestion",
                ),
                (
                    Season::Winter,
                    "Maximum heat and movement; favor spicy and dry foods",
                ),
            ]),
        ),
    ])
}

fn standard_base_insights() -> BTreeMap<Dosha, Vec<&'static str>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            vec![
                "✓ Your Vata is naturally variable - establish routines to ground yourself",
                "✓ Drink warm water instead of cold drinks to improve digestion",
                "✓ Avoid skipping meals - eat at regular times",
                "✓ Warm oils like sesame help balance your variable nature",
                "✓ Practice calming activities like yoga and meditation",
                "✓ Ensure adequate sleep (7-8 hours) for stability",
            ],
        ),
        (
            Dosha::Pitta,
            vec![
                "✓ Your Pitta tends toward intensity - practice cooling activities",
                "✓ Drink coconut water to naturally cool your system",
                "✓ Avoid excessive heat (sun, spicy foods, intense exercise)",
                "✓ Summer is your challenging season - increase cooling foods",
                "✓ Practice patience and compassion in daily life",
                "✓ Take time to relax; don't push yourself too hard",
            ],
        ),
        (
            Dosha::Kapha,
            vec![
                "✓ Your Kapha brings stability - use it to establish healthy routines",
                "✓ Morning exercise stimulates your digestion",
                "✓ Light, warming foods prevent sluggishness",
                "✓ Vary your routine to stay mentally sharp",
                "✓ Warming spices like ginger enhance your metabolism",
                "✓ Avoid excessive daytime napping",
            ],
        ),
    ])
}

fn standard_concern_insights() -> BTreeMap<HealthConcern, &'static str> {
    BTreeMap::from([
        (
            HealthConcern::Digestion,
            "⚠ For better digestion: eat slowly, chew well, avoid cold water with meals",
        ),
        (
            HealthConcern::Sleep,
            "⚠ For better sleep: avoid screens 1 hour before bed, warm milk with spices",
        ),
        (
            HealthConcern::Stress,
            "⚠ For stress: practice meditation, breathing exercises, and warm oils",
        ),
        (
            HealthConcern::Weight,
            "⚠ For weight management: consistent exercise, proper meal timing, reduce snacking",
        ),
        (
            HealthConcern::Energy,
            "⚠ For better energy: morning routines, warm lemon water, regular sleep",
        ),
    ])
}

fn standard_daily_routines() -> BTreeMap<Dosha, DailyRoutine> {
    BTreeMap::from([
        (
            Dosha::Vata,
            DailyRoutine {
                morning: "Warm water with lemon, gentle yoga, oil massage to ground yourself",
                exercise: "Gentle yoga, tai chi, walking. Avoid overexertion.",
                evening: "Warm milk with spices, calming herbs, early bedtime",
                hydration: "Warm water throughout the day. Avoid cold drinks.",
            },
        ),
        (
            Dosha::Pitta,
            DailyRoutine {
                morning: "Cool water, calming meditation, avoid intense sun exposure",
                exercise: "Swimming, cool environments, moderate intensity workouts",
                evening: "Cool herbal tea, relaxation, avoid heavy foods",
                hydration: "Coconut water, cooling herbal teas, room temperature water",
            },
        ),
        (
            Dosha::Kapha,
            DailyRoutine {
                morning: "Brisk walk, stimulating exercise, dry massage to energize",
                exercise: "Vigorous exercise, dancing, running. Push yourself.",
                evening: "Light activities, avoid napping, stimulating conversation",
                hydration: "Warm ginger tea, herbal infusions, limited cold drinks",
            },
        ),
    ])
}

fn standard_seasonal_tips() -> BTreeMap<Dosha, BTreeMap<Season, &'static str>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            BTreeMap::from([
                (Season::Spring, "Increase oils and warming foods"),
                (Season::Summer, "Balance heat with grounding practices"),
                (Season::Fall, "Maximum warmth and routine establishment"),
                (Season::Winter, "Extra heat, oils, and spices"),
            ]),
        ),
        (
            Dosha::Pitta,
            BTreeMap::from([
                (Season::Spring, "Cooling herbs and fresh vegetables"),
                (Season::Summer, "Maximize cooling; avoid heat exposure"),
                (Season::Fall, "Balance with mild warm spices"),
                (Season::Winter, "Warm but moderate spices"),
            ]),
        ),
        (
            Dosha::Kapha,
            BTreeMap::from([
                (Season::Spring, "Light, warming, avoid heavy foods"),
                (Season::Summer, "Light meals, increase activity"),
                (Season::Fall, "Warming spices, light digestion support"),
                (Season::Winter, "Maximum heat and movement"),
            ]),
        ),
    ])
}

const fn remedy(issue: &'static str, solution: &'static str) -> QuickRemedy {
    QuickRemedy { issue, solution }
}

fn standard_quick_remedies() -> BTreeMap<Dosha, Vec<QuickRemedy>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            vec![
                remedy("Anxiety", "Warm milk, grounding practices, oil massage"),
                remedy("Dry Skin", "Sesame oil massage, hydrating foods"),
                remedy("Insomnia", "Regular bedtime, warm milk with spices"),
                remedy("Constipation", "Warm water, ghee, increase oils"),
            ],
        ),
        (
            Dosha::Pitta,
            vec![
                remedy("Acidity", "Coconut water, cooling herbs, avoid spice"),
                remedy("Inflammation", "Turmeric, coconut oil, cooling foods"),
                remedy("Anger", "Meditation, cooling activities, mint tea"),
                remedy("Skin Issues", "Coconut oil, cooling diet, reduce heat"),
            ],
        ),
        (
            Dosha::Kapha,
            vec![
                remedy("Sluggishness", "Exercise, ginger tea, light diet"),
                remedy("Weight Gain", "Warm spices, reduce oils, active lifestyle"),
                remedy("Congestion", "Warming spices, dry foods, exercise"),
                remedy("Depression", "Movement, warm spices, social activity"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_cover_every_dosha_and_season() {
        let tables = RecommendationTables::standard();
        for dosha in Dosha::ordered() {
            let advice = &tables.food_advice[&dosha];
            assert_eq!(advice.to_eat.len(), 10);
            assert_eq!(advice.to_avoid.len(), 10);
            assert!(tables.meal_timings.contains_key(&dosha));
            assert_eq!(tables.base_insights[&dosha].len(), 6);
            assert!(tables.daily_routines.contains_key(&dosha));
            assert_eq!(tables.quick_remedies[&dosha].len(), 4);
            for season in Season::ordered() {
                assert!(tables.seasonal[&dosha].contains_key(&season));
                assert!(tables.seasonal_tips[&dosha].contains_key(&season));
            }
        }
        assert_eq!(tables.concern_insights.len(), HealthConcern::ordered().len());
    }
}
