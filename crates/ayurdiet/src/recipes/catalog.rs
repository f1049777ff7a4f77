use super::domain::{Difficulty, MealTime, Recipe, RecipeId};
use crate::constitution::Dosha;
use crate::nutrition::Ingredient;

/// Authored sample recipes shipped with the application.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn standard() -> Self {
        Self {
            recipes: sample_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn by_dosha(&self, dosha: Dosha) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.suits(dosha))
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.difficulty == difficulty)
            .collect()
    }
}

struct SampleRecipe {
    id: u64,
    name: &'static str,
    description: &'static str,
    meal_time: MealTime,
    servings: u32,
    prep_time: &'static str,
    cook_time: &'static str,
    difficulty: Difficulty,
    suitable_for: &'static [Dosha],
    ingredients: &'static [(&'static str, f64)],
    instructions: &'static [&'static str],
    health_benefits: &'static [&'static str],
}

impl SampleRecipe {
    fn build(self) -> Recipe {
        Recipe {
            id: RecipeId(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            meal_time: self.meal_time,
            servings: self.servings,
            prep_time: self.prep_time.to_string(),
            cook_time: self.cook_time.to_string(),
            difficulty: self.difficulty,
            suitable_for: self.suitable_for.to_vec(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, quantity)| Ingredient::new(*name, *quantity))
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            health_benefits: self.health_benefits.iter().map(|s| s.to_string()).collect(),
            is_custom: false,
        }
    }
}

const ALL_DOSHAS: &[Dosha] = &[Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

fn sample_recipes() -> Vec<Recipe> {
    [
        SampleRecipe {
            id: 1,
            name: "Moong Dal with Rice",
            description: "Light, easily digestible comfort food",
            meal_time: MealTime::Morning,
            servings: 2,
            prep_time: "5 min",
            cook_time: "20 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("dal", 0.5),
                ("rice", 0.5),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Wash and soak dal and rice for 15 minutes",
                "Heat ghee in a pot",
                "Add cumin seeds for tempering",
                "Add dal and rice, mix well",
                "Add 3 cups water and bring to boil",
                "Reduce heat and simmer for 15-20 minutes until soft",
                "Add turmeric and salt to taste",
                "Serve hot",
            ],
            health_benefits: &[
                "Easily digestible",
                "High protein content",
                "Balances all three doshas",
                "Provides sustained energy",
            ],
        },
        SampleRecipe {
            id: 2,
            name: "Turmeric Ginger Tea",
            description: "Anti-inflammatory wellness drink",
            meal_time: MealTime::Morning,
            servings: 1,
            prep_time: "2 min",
            cook_time: "5 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("milk", 1.0),
                ("turmeric", 0.25),
                ("ginger", 0.25),
            ],
            instructions: &[
                "Heat milk in a saucepan",
                "Add turmeric and ginger",
                "Simmer for 3-5 minutes",
                "Strain and serve hot",
            ],
            health_benefits: &[
                "Anti-inflammatory properties",
                "Aids digestion",
                "Boosts immunity",
                "Promotes better sleep",
            ],
        },
        SampleRecipe {
            id: 3,
            name: "Spinach and Paneer Curry",
            description: "Protein-rich green vegetable dish",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "10 min",
            cook_time: "15 min",
            difficulty: Difficulty::Medium,
            suitable_for: &[Dosha::Vata, Dosha::Kapha],
            ingredients: &[
                ("spinach", 1.5),
                ("paneer", 0.5),
                ("tomato", 0.5),
                ("ginger", 0.25),
                ("ghee", 0.75),
            ],
            instructions: &[
                "Blanch spinach and make paste",
                "Cut paneer into cubes",
                "Heat ghee in pan",
                "Add ginger and tomato, cook until soft",
                "Add spinach paste and cook for 5 minutes",
                "Add paneer cubes gently",
                "Simmer for 5 more minutes",
                "Season and serve",
            ],
            health_benefits: &[
                "High in iron",
                "Excellent protein source",
                "Rich in calcium",
                "Supports digestive health",
            ],
        },
        SampleRecipe {
            id: 4,
            name: "Vegetable Khichdi",
            description: "Detoxifying comfort meal",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "5 min",
            cook_time: "25 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("rice", 0.75),
                ("dal", 0.5),
                ("carrot", 0.75),
                ("turmeric", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Wash rice and dal thoroughly",
                "Chop vegetables into small pieces",
                "Heat ghee in pot",
                "Add turmeric and dal",
                "Add rice and vegetables",
                "Add 3.5 cups water",
                "Bring to boil, then reduce heat",
                "Cook until all ingredients are soft (20 min)",
                "Serve warm",
            ],
            health_benefits: &[
                "Complete one-pot meal",
                "Easy to digest",
                "Balances all doshas",
                "Perfect for recovery and detox",
            ],
        },
        SampleRecipe {
            id: 5,
            name: "Warm Oatmeal with Dates and Ghee",
            description: "Nourishing breakfast with natural sweetness",
            meal_time: MealTime::Morning,
            servings: 1,
            prep_time: "2 min",
            cook_time: "10 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Kapha],
            ingredients: &[
                ("oats", 0.33),
                ("milk", 1.0),
                ("dates", 0.5),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Boil milk in a pot",
                "Add oats and stir well",
                "Cook for 5-8 minutes on low heat",
                "Chop dates and add to oatmeal",
                "Add ghee and mix",
                "Add honey and serve warm",
            ],
            health_benefits: &[
                "Rich in fiber",
                "Provides sustained energy",
                "Easy to digest",
                "Balances nervous system",
            ],
        },
        SampleRecipe {
            id: 6,
            name: "Red Lentil Dal Curry",
            description: "Protein-rich traditional lentil soup",
            meal_time: MealTime::Lunch,
            servings: 3,
            prep_time: "5 min",
            cook_time: "30 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("dal", 1.0),
                ("tomato", 1.0),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Wash lentils and boil with 4 cups water",
                "Add turmeric while boiling",
                "Heat ghee separately",
                "Add cumin and cook until seeds crackle",
                "Add chopped tomatoes to ghee",
                "Once lentils are soft, add the ghee mixture",
                "Simmer for 10 minutes",
                "Season with salt and serve hot",
            ],
            health_benefits: &[
                "High in protein",
                "Rich in fiber",
                "Supports digestive fire",
                "Grounding and nourishing",
            ],
        },
        SampleRecipe {
            id: 7,
            name: "Broccoli and Carrot Curry",
            description: "Light seasonal vegetable dish",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "8 min",
            cook_time: "15 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Pitta, Dosha::Kapha],
            ingredients: &[
                ("broccoli", 1.0),
                ("carrot", 0.75),
                ("coconut oil", 0.5),
                ("cumin", 0.25),
                ("turmeric", 0.25),
            ],
            instructions: &[
                "Cut broccoli into florets",
                "Slice carrots into thin pieces",
                "Heat coconut oil in pan",
                "Add cumin seeds for tempering",
                "Add carrots first, cook for 5 minutes",
                "Add broccoli and turmeric",
                "Cook until vegetables are tender (8-10 min)",
                "Season and serve hot",
            ],
            health_benefits: &[
                "Rich in vitamins",
                "Anti-inflammatory",
                "Supports immune system",
                "Light and cooling",
            ],
        },
        SampleRecipe {
            id: 8,
            name: "Mung Bean and Vegetable Soup",
            description: "Light, easily digestible evening meal",
            meal_time: MealTime::Dinner,
            servings: 2,
            prep_time: "10 min",
            cook_time: "25 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("dal", 0.5),
                ("carrot", 0.75),
                ("turmeric", 0.25),
                ("ginger", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Heat ghee and add ginger",
                "Add diced carrots and cook for 3 minutes",
                "Add washed mung beans",
                "Add 4 cups water and turmeric",
                "Bring to boil, then simmer for 20 minutes",
                "Beans should be soft and soup light",
                "Season with salt and serve hot",
            ],
            health_benefits: &[
                "Light on digestion",
                "Perfect dinner food",
                "Cooling and calming",
                "Promotes restful sleep",
            ],
        },
        SampleRecipe {
            id: 9,
            name: "Warm Milk with Ashwagandha",
            description: "Calming bedtime drink",
            meal_time: MealTime::Dinner,
            servings: 1,
            prep_time: "1 min",
            cook_time: "5 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("milk", 1.0),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Heat milk in a saucepan",
                "Add ghee",
                "Simmer for 2-3 minutes",
                "Add ashwagandha powder (1/4 tsp)",
                "Stir well and serve warm",
            ],
            health_benefits: &[
                "Promotes deep sleep",
                "Reduces stress and anxiety",
                "Nourishes the nervous system",
                "Calming and grounding",
            ],
        },
        SampleRecipe {
            id: 10,
            name: "Light Clear Vegetable Broth",
            description: "Soothing evening soup",
            meal_time: MealTime::Dinner,
            servings: 2,
            prep_time: "5 min",
            cook_time: "20 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("carrot", 1.0),
                ("turmeric", 0.25),
                ("ginger", 0.25),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Heat ghee in pot",
                "Add minced ginger and cook until fragrant",
                "Add chopped carrots",
                "Add 4 cups water and turmeric",
                "Bring to boil and simmer for 15 minutes",
                "Carrots become soft and broth is clear",
                "Season with salt and serve hot",
            ],
            health_benefits: &[
                "Very light and soothing",
                "Aids evening digestion",
                "Cooling and calming",
                "Perfect before sleep",
            ],
        },
        SampleRecipe {
            id: 11,
            name: "Apple and Coconut Oatmeal",
            description: "Nourishing breakfast with cooling coconut",
            meal_time: MealTime::Morning,
            servings: 1,
            prep_time: "3 min",
            cook_time: "8 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Pitta, Dosha::Kapha],
            ingredients: &[
                ("oats", 0.33),
                ("apple", 0.5),
                ("coconut oil", 0.25),
                ("milk", 0.75),
            ],
            instructions: &[
                "Grate or dice apple",
                "Boil milk with diced apple",
                "Add oats and stir well",
                "Cook on low heat for 5-7 minutes",
                "Add coconut oil at the end",
                "Sweeten with honey if needed",
                "Serve warm",
            ],
            health_benefits: &[
                "Cooling for Pitta",
                "Cooling effect from apple and coconut",
                "Light yet nourishing",
                "Balances blood sugar",
            ],
        },
        SampleRecipe {
            id: 12,
            name: "Chickpea and Bean Curry",
            description: "Hearty legume-based lunch",
            meal_time: MealTime::Lunch,
            servings: 3,
            prep_time: "10 min",
            cook_time: "35 min",
            difficulty: Difficulty::Medium,
            suitable_for: &[Dosha::Kapha],
            ingredients: &[
                ("lentil", 1.0),
                ("tomato", 1.0),
                ("turmeric", 0.25),
                ("ginger", 0.25),
                ("ghee", 0.75),
            ],
            instructions: &[
                "Soak chickpeas overnight (or use canned)",
                "Heat ghee in a large pot",
                "Add ginger and cook until golden",
                "Add diced tomatoes and simmer",
                "Add cooked chickpeas and turmeric",
                "Add 2 cups water and cook covered for 20 min",
                "Stir occasionally until sauce thickens",
                "Season with salt and serve hot",
            ],
            health_benefits: &[
                "High in protein and fiber",
                "Grounding for Vata",
                "Warming for cold weather",
                "Long-lasting energy",
            ],
        },
        SampleRecipe {
            id: 13,
            name: "Semolina Upma",
            description: "Savory millet porridge breakfast",
            meal_time: MealTime::Morning,
            servings: 2,
            prep_time: "5 min",
            cook_time: "10 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Kapha],
            ingredients: &[
                ("wheat", 0.5),
                ("carrot", 0.5),
                ("ghee", 0.5),
                ("cumin", 0.25),
            ],
            instructions: &[
                "Toast semolina in ghee until golden",
                "Finely dice carrots",
                "Add 2 cups water to the toasted semolina",
                "Add diced carrots and cumin",
                "Bring to boil, stirring constantly",
                "Reduce heat and simmer for 5 minutes",
                "Cover and let rest for 2 minutes",
                "Serve warm with ghee drizzle",
            ],
            health_benefits: &[
                "Easy to digest",
                "Grounding and warming",
                "Quick energy source",
                "Light yet satisfying",
            ],
        },
        SampleRecipe {
            id: 14,
            name: "Banana and Honey Porridge",
            description: "Sweet nourishing morning meal",
            meal_time: MealTime::Morning,
            servings: 1,
            prep_time: "2 min",
            cook_time: "8 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("oats", 0.33),
                ("banana", 0.5),
                ("milk", 1.0),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Slice banana into small pieces",
                "Heat milk in a pot",
                "Add oats and stir",
                "Add banana slices",
                "Cook on low heat for 5-7 minutes",
                "Add ghee and honey",
                "Stir well and serve hot",
            ],
            health_benefits: &[
                "Rich in potassium",
                "Natural sweetness balances doshas",
                "Calming and nourishing",
                "Good for bone health",
            ],
        },
        SampleRecipe {
            id: 15,
            name: "Bitter Melon Curry",
            description: "Detoxifying bitter greens",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "10 min",
            cook_time: "20 min",
            difficulty: Difficulty::Medium,
            suitable_for: &[Dosha::Pitta, Dosha::Kapha],
            ingredients: &[
                ("broccoli", 1.5),
                ("tomato", 0.75),
                ("turmeric", 0.25),
                ("ghee", 0.5),
                ("ginger", 0.25),
            ],
            instructions: &[
                "Slice bitter melon thinly",
                "Soak in salt water for 10 minutes to reduce bitterness",
                "Heat ghee in pan",
                "Sauté ginger briefly",
                "Add squeezed bitter melon",
                "Add tomatoes and turmeric",
                "Cook until tender (12-15 minutes)",
                "Season and serve hot",
            ],
            health_benefits: &[
                "Strong detoxifying properties",
                "Supports liver health",
                "Balances blood sugar",
                "Aids digestion",
            ],
        },
        SampleRecipe {
            id: 16,
            name: "Potato and Mushroom Curry",
            description: "Earthy seasonal vegetable dish",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "8 min",
            cook_time: "20 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Kapha],
            ingredients: &[
                ("carrot", 1.0),
                ("tomato", 0.75),
                ("cumin", 0.25),
                ("ghee", 0.5),
                ("ginger", 0.25),
            ],
            instructions: &[
                "Dice potatoes and mushrooms into small pieces",
                "Heat ghee in a large pan",
                "Add cumin seeds and let them crackle",
                "Add ginger and cook for 1 minute",
                "Add diced vegetables and cook for 5 minutes",
                "Add chopped tomatoes and turmeric",
                "Add 1 cup water and cover",
                "Cook until vegetables are tender (12-15 min)",
                "Season and serve hot",
            ],
            health_benefits: &[
                "Grounding and warming",
                "Rich in minerals",
                "Sustains energy",
                "Supports immune system",
            ],
        },
        SampleRecipe {
            id: 17,
            name: "Beet and Carrot Curry",
            description: "Colorful root vegetable dish",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "10 min",
            cook_time: "25 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("carrot", 1.5),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("ghee", 0.5),
                ("ginger", 0.25),
            ],
            instructions: &[
                "Peel and dice beets and carrots",
                "Heat ghee in pot",
                "Add cumin and ginger",
                "Add diced vegetables",
                "Cook for 5 minutes, stirring occasionally",
                "Add turmeric and 1.5 cups water",
                "Bring to boil and then simmer for 15 minutes",
                "Vegetables should be soft and sweet",
                "Season with salt and serve hot",
            ],
            health_benefits: &[
                "Excellent for blood health",
                "Rich in folate and iron",
                "Naturally sweet and grounding",
                "Supports heart health",
            ],
        },
        SampleRecipe {
            id: 18,
            name: "Green Gram Curry",
            description: "Light and nutritious lentil dish",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "5 min",
            cook_time: "30 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("dal", 0.75),
                ("tomato", 0.75),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Rinse green gram lentils",
                "Heat ghee in pot",
                "Add cumin seeds",
                "Add lentils and sauté for 1 minute",
                "Add 3 cups water and turmeric",
                "Bring to boil and simmer for 20 minutes",
                "Add chopped tomatoes and cook for 5 more minutes",
                "Lentils should be cooked but not mushy",
                "Season and serve hot",
            ],
            health_benefits: &[
                "High in protein",
                "Easy to digest when properly prepared",
                "Balances all doshas",
                "Chlorophyll rich",
            ],
        },
        SampleRecipe {
            id: 19,
            name: "Barley and Vegetable Soup",
            description: "Warming evening soup",
            meal_time: MealTime::Dinner,
            servings: 2,
            prep_time: "5 min",
            cook_time: "35 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Kapha],
            ingredients: &[
                ("wheat", 0.5),
                ("carrot", 0.75),
                ("turmeric", 0.25),
                ("ghee", 0.25),
                ("ginger", 0.25),
            ],
            instructions: &[
                "Rinse barley grains",
                "Heat ghee with ginger",
                "Add barley and toast lightly for 2 minutes",
                "Add diced carrots",
                "Pour 4.5 cups water",
                "Add turmeric and bring to boil",
                "Reduce heat and simmer for 30 minutes",
                "Barley should be tender",
                "Season and serve warm",
            ],
            health_benefits: &[
                "Very light and warming",
                "Good for evening meal",
                "Aids digestion and sleep",
                "Ancient grain with fiber",
            ],
        },
        SampleRecipe {
            id: 20,
            name: "Cream of Tomato Soup",
            description: "Soothing evening tomato soup",
            meal_time: MealTime::Dinner,
            servings: 2,
            prep_time: "8 min",
            cook_time: "20 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("tomato", 2.0),
                ("milk", 0.75),
                ("ghee", 0.5),
                ("ginger", 0.25),
                ("cumin", 0.25),
            ],
            instructions: &[
                "Chop tomatoes into small pieces",
                "Heat ghee in pot",
                "Add ginger and cumin",
                "Add chopped tomatoes",
                "Cook for 10 minutes until soft",
                "Blend the cooked tomatoes into smooth puree",
                "Return to pot and add milk",
                "Simmer for 5 minutes without boiling",
                "Season and serve warm",
            ],
            health_benefits: &[
                "Warming and soothing",
                "Easy on digestion at night",
                "Rich in lycopene",
                "Comforting for nervous system",
            ],
        },
        SampleRecipe {
            id: 21,
            name: "Herbal Cleansing Broth",
            description: "Detoxifying herbal soup",
            meal_time: MealTime::Dinner,
            servings: 1,
            prep_time: "3 min",
            cook_time: "15 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("carrot", 0.75),
                ("turmeric", 0.25),
                ("ginger", 0.5),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Heat ghee in a pot",
                "Add sliced ginger",
                "Chop carrot into small pieces",
                "Add carrot and turmeric",
                "Pour 2 cups water",
                "Bring to boil and simmer for 12 minutes",
                "Strain lightly or leave pieces",
                "Season with rock salt",
                "Serve warm before bed",
            ],
            health_benefits: &[
                "Deep cleansing properties",
                "Anti-inflammatory",
                "Calming before sleep",
                "Supports immune system",
            ],
        },
        SampleRecipe {
            id: 22,
            name: "Sesame Seed Milk",
            description: "Warm calcium-rich morning drink",
            meal_time: MealTime::Morning,
            servings: 1,
            prep_time: "5 min",
            cook_time: "10 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("milk", 1.0),
                ("ghee", 0.25),
            ],
            instructions: &[
                "Crush 1 tbsp sesame seeds lightly",
                "Heat milk in a saucepan",
                "Add crushed sesame seeds",
                "Add ghee",
                "Simmer for 5 minutes",
                "Strain through fine cloth",
                "Add honey if desired",
                "Serve warm",
            ],
            health_benefits: &[
                "Rich in calcium and minerals",
                "Warming and grounding",
                "Supports bone health",
                "Nourishes nerves",
            ],
        },
        SampleRecipe {
            id: 23,
            name: "Lentil and Spinach Dal",
            description: "Iron-rich nutritious lunch",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "5 min",
            cook_time: "30 min",
            difficulty: Difficulty::Easy,
            suitable_for: ALL_DOSHAS,
            ingredients: &[
                ("dal", 0.75),
                ("spinach", 1.0),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("ghee", 0.5),
            ],
            instructions: &[
                "Wash and soak lentils",
                "Heat ghee and add cumin",
                "Add soaked lentils",
                "Add 3 cups water and turmeric",
                "Bring to boil and simmer for 20 minutes",
                "Blanch and finely chop spinach",
                "Add spinach to cooked lentils",
                "Cook for 5 more minutes",
                "Season and serve hot",
            ],
            health_benefits: &[
                "High in iron",
                "Complete protein",
                "Deep blood nourishment",
                "Energy boosting",
            ],
        },
        SampleRecipe {
            id: 24,
            name: "Light Rice Pudding (Kheer Lite)",
            description: "Light evening pudding",
            meal_time: MealTime::Dinner,
            servings: 2,
            prep_time: "5 min",
            cook_time: "20 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Vata, Dosha::Pitta],
            ingredients: &[
                ("rice", 0.25),
                ("milk", 1.5),
                ("ghee", 0.25),
                ("dates", 0.5),
            ],
            instructions: &[
                "Toast rice lightly in ghee",
                "Add milk slowly while stirring",
                "Bring to simmer and cook for 15 minutes",
                "Rice should be cooked and soft",
                "Add chopped dates in last 2 minutes",
                "Stir well and cook until creamy",
                "Add cardamom if available",
                "Serve warm",
            ],
            health_benefits: &[
                "Very light for evening",
                "Nourishing and satisfying",
                "Promotes deep sleep",
                "Sweet grounding energy",
            ],
        },
        SampleRecipe {
            id: 25,
            name: "Roasted Chickpea and Broccoli",
            description: "Protein-rich vegetable medley",
            meal_time: MealTime::Lunch,
            servings: 2,
            prep_time: "8 min",
            cook_time: "25 min",
            difficulty: Difficulty::Easy,
            suitable_for: &[Dosha::Kapha, Dosha::Pitta],
            ingredients: &[
                ("broccoli", 1.25),
                ("coconut oil", 0.5),
                ("turmeric", 0.25),
                ("cumin", 0.25),
                ("lentil", 0.5),
            ],
            instructions: &[
                "Soak chickpeas overnight or use canned",
                "Cut broccoli into florets",
                "Heat coconut oil in a large pan",
                "Add cumin seeds and cook 30 seconds",
                "Add cooked chickpeas and broccoli",
                "Add turmeric and 1 cup water",
                "Cook covered for 15 minutes",
                "Vegetables should be tender but firm",
                "Season and serve",
            ],
            health_benefits: &[
                "Complete protein combination",
                "High in fiber",
                "Anti-inflammatory",
                "Supports metabolism",
            ],
        },
    ]
    .into_iter()
    .map(SampleRecipe::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_dosha() {
        let catalog = RecipeCatalog::standard();
        let pitta: Vec<&str> = catalog
            .by_dosha(Dosha::Pitta)
            .iter()
            .map(|recipe| recipe.name.as_str())
            .collect();

        assert!(pitta.contains(&"Broccoli and Carrot Curry"));
        assert!(!pitta.contains(&"Spinach and Paneer Curry"));
        assert_eq!(catalog.by_dosha(Dosha::Vata).len(), 20);
        assert_eq!(catalog.by_dosha(Dosha::Kapha).len(), 19);
    }

    #[test]
    fn filters_by_difficulty() {
        let catalog = RecipeCatalog::standard();
        let medium: Vec<RecipeId> = catalog
            .by_difficulty(Difficulty::Medium)
            .iter()
            .map(|recipe| recipe.id)
            .collect();
        assert_eq!(medium, vec![RecipeId(3), RecipeId(12), RecipeId(15)]);
        assert!(catalog.by_difficulty(Difficulty::Hard).is_empty());
    }

    #[test]
    fn sample_ids_run_contiguously() {
        let catalog = RecipeCatalog::standard();
        let ids: Vec<u64> = catalog.recipes().iter().map(|recipe| recipe.id.0).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<u64>>());
    }

    #[test]
    fn sample_ingredients_are_all_in_the_nutrient_table() {
        let table = crate::nutrition::NutrientTable::standard();
        for recipe in RecipeCatalog::standard().recipes() {
            for ingredient in &recipe.ingredients {
                assert!(
                    table.lookup(&ingredient.name).is_some(),
                    "{} uses unknown {}",
                    recipe.name,
                    ingredient.name
                );
            }
        }
    }

    #[test]
    fn samples_are_not_custom() {
        let catalog = RecipeCatalog::standard();
        assert!(catalog.recipes().iter().all(|recipe| !recipe.is_custom));
        assert_eq!(
            catalog.get(RecipeId(2)).map(|recipe| recipe.name.as_str()),
            Some("Turmeric Ginger Tea")
        );
    }
}
