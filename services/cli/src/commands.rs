use crate::infra::{
    parse_ingredient, parse_meal_recipe, JsonDietChartRepository, JsonRecipeRepository,
};
use ayurdiet::config::AppConfig;
use ayurdiet::constitution::{ConstitutionClassifier, ConstitutionProfile, Dosha};
use ayurdiet::diet_chart::{
    DietChartPlanner, DietChartRepository, DietChartRequest, DietGoal, Patient, PatientId,
};
use ayurdiet::error::AppError;
use ayurdiet::nutrition::{
    DoshaSuitability, Ingredient, NutrientAggregator, NutrientAnalysis, NutrientTable,
    NutrientTotals,
};
use ayurdiet::recipes::{Difficulty, Recipe, RecipeBook, RecipeDraft, RecipeId};
use ayurdiet::recommendations::{DailyRoutine, QuickRemedy, RecommendationResolver, Season};
use chrono::Utc;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let classifier = ConstitutionClassifier::standard();
    print_json(classifier.bank().questions())
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Zero-based answer index per question, comma separated (e.g. 0,2,1,1,0,2)
    #[arg(long, required = true, value_delimiter = ',')]
    pub(crate) answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DoshaShare {
    dosha: Dosha,
    score: u32,
    percent: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizReport {
    profile: ConstitutionProfile,
    description: &'static str,
    guidance: &'static str,
    shares: Vec<DoshaShare>,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let profile = ConstitutionClassifier::standard().classify(&args.answers)?;
    let shares = profile
        .ranked()
        .into_iter()
        .map(|dosha| DoshaShare {
            dosha,
            score: profile.scores.get(dosha),
            percent: profile.score_percent(dosha),
        })
        .collect();

    print_json(&QuizReport {
        description: profile.primary.element_description(),
        guidance: profile.imbalance_level.guidance(),
        shares,
        profile,
    })
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Vata, Pitta or Kapha
    #[arg(long)]
    pub(crate) dosha: Dosha,
    /// Spring, Summer, Fall or Winter
    #[arg(long)]
    pub(crate) season: Option<Season>,
    /// Health concern key (digestion, sleep, stress, weight, energy); repeatable
    #[arg(long = "concern")]
    pub(crate) concerns: Vec<String>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let bundle =
        RecommendationResolver::standard().recommend(args.dosha, args.season, &args.concerns)?;
    print_json(&bundle)
}

#[derive(Args, Debug)]
pub(crate) struct InsightsArgs {
    #[arg(long)]
    pub(crate) dosha: Dosha,
    /// Adds the one-line tip for this season
    #[arg(long)]
    pub(crate) season: Option<Season>,
    #[arg(long = "concern")]
    pub(crate) concerns: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsReport<'a> {
    insights: Vec<String>,
    daily_routine: &'a DailyRoutine,
    #[serde(skip_serializing_if = "Option::is_none")]
    seasonal_tip: Option<&'static str>,
    quick_remedies: &'a [QuickRemedy],
}

pub(crate) fn run_insights(args: InsightsArgs) -> Result<(), AppError> {
    let resolver = RecommendationResolver::standard();
    let seasonal_tip = args
        .season
        .map(|season| resolver.seasonal_tip_for(args.dosha, season))
        .transpose()?;

    print_json(&InsightsReport {
        insights: resolver.generate_insights(args.dosha, &args.concerns)?,
        daily_routine: resolver.daily_routine(args.dosha)?,
        seasonal_tip,
        quick_remedies: resolver.quick_remedies(args.dosha)?,
    })
}

#[derive(Args, Debug)]
pub(crate) struct NutrientsArgs {
    /// Ingredient as NAME=QUANTITY (quantity in servings); repeatable
    #[arg(long = "ingredient", required = true, value_parser = parse_ingredient)]
    pub(crate) ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NutrientReport {
    totals: NutrientTotals,
    analysis: NutrientAnalysis,
    suitability: DoshaSuitability,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unknown_ingredients: Vec<String>,
}

impl NutrientReport {
    fn build(table: &NutrientTable, ingredients: &[Ingredient]) -> Result<Self, AppError> {
        let totals = NutrientAggregator::new(table).aggregate(ingredients)?;
        let unknown_ingredients = ingredients
            .iter()
            .filter(|ingredient| table.lookup(&ingredient.name).is_none())
            .map(|ingredient| ingredient.name.clone())
            .collect();
        Ok(Self {
            analysis: NutrientAnalysis::from_totals(&totals),
            suitability: DoshaSuitability::from_totals(&totals),
            totals,
            unknown_ingredients,
        })
    }
}

pub(crate) fn run_nutrients(config: &AppConfig, args: NutrientsArgs) -> Result<(), AppError> {
    let table = config.reference.nutrient_table()?;
    print_json(&NutrientReport::build(&table, &args.ingredients)?)
}

pub(crate) fn run_ingredients(config: &AppConfig) -> Result<(), AppError> {
    let table = config.reference.nutrient_table()?;
    print_json(&table.available_ingredients())
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum RecipesCommand {
    /// List sample and custom recipes
    List {
        #[arg(long)]
        dosha: Option<Dosha>,
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
        /// Only show recipes saved locally
        #[arg(long)]
        custom: bool,
    },
    /// Show one recipe with its nutrient breakdown
    Show {
        #[arg(long)]
        id: u64,
    },
    /// Save a custom recipe from a JSON draft ("-" reads stdin)
    Add {
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a custom recipe
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDetail {
    recipe: Recipe,
    nutrients: NutrientReport,
}

fn recipe_book(config: &AppConfig) -> RecipeBook<JsonRecipeRepository> {
    let repository = JsonRecipeRepository::new(config.storage.recipes_path());
    RecipeBook::new(Arc::new(repository))
}

fn read_draft(file: &Path) -> Result<RecipeDraft, AppError> {
    let draft = if file.as_os_str() == "-" {
        serde_json::from_reader(io::stdin().lock())?
    } else {
        serde_json::from_reader(BufReader::new(File::open(file)?))?
    };
    Ok(draft)
}

pub(crate) fn run_recipes(config: &AppConfig, command: RecipesCommand) -> Result<(), AppError> {
    let book = recipe_book(config);

    match command {
        RecipesCommand::List {
            dosha,
            difficulty,
            custom,
        } => {
            let difficulty = difficulty.map(Difficulty::from);
            let recipes: Vec<Recipe> = book
                .all()?
                .into_iter()
                .filter(|recipe| dosha.map_or(true, |dosha| recipe.suits(dosha)))
                .filter(|recipe| difficulty.map_or(true, |level| recipe.difficulty == level))
                .filter(|recipe| !custom || recipe.is_custom)
                .collect();
            print_json(&recipes)
        }
        RecipesCommand::Show { id } => {
            let recipe = book.get(RecipeId(id))?;
            let table = config.reference.nutrient_table()?;
            let nutrients = NutrientReport::build(&table, &recipe.ingredients)?;
            print_json(&RecipeDetail { recipe, nutrients })
        }
        RecipesCommand::Add { file } => {
            let recipe = book.save_custom(read_draft(&file)?)?;
            print_json(&recipe)
        }
        RecipesCommand::Delete { id } => {
            book.delete_custom(RecipeId(id))?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ChartGenerateArgs {
    #[arg(long)]
    patient_id: u64,
    #[arg(long)]
    patient_name: String,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    gender: Option<String>,
    /// The patient's assessed dosha, if any
    #[arg(long)]
    dosha: Option<Dosha>,
    #[arg(long)]
    target_calories: Option<u32>,
    /// e.g. "Weight Loss", "digestive-health"
    #[arg(long)]
    goal: Option<DietGoal>,
    #[arg(long, default_value = "")]
    restrictions: String,
    #[arg(long)]
    protein: Option<f64>,
    #[arg(long)]
    carbs: Option<f64>,
    #[arg(long)]
    fat: Option<f64>,
    #[arg(long)]
    fiber: Option<f64>,
    #[arg(long)]
    water_intake: Option<String>,
    #[arg(long)]
    meal_frequency: Option<String>,
    #[arg(long)]
    chart_duration: Option<String>,
    /// Add a recipe to a meal slot as SLOT=RECIPE_ID (slot 0 is early morning); repeatable
    #[arg(long = "add-recipe", value_parser = parse_meal_recipe)]
    add_recipes: Vec<(usize, RecipeId)>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ChartCommand {
    /// Generate and save a diet chart from the default meal plan
    Generate(ChartGenerateArgs),
    /// Show the most recent chart for a patient
    Latest {
        #[arg(long)]
        patient_id: u64,
    },
    /// List saved charts
    List {
        #[arg(long)]
        patient_id: Option<u64>,
    },
}

pub(crate) fn run_chart(config: &AppConfig, command: ChartCommand) -> Result<(), AppError> {
    let charts = JsonDietChartRepository::new(config.storage.diet_charts_path());

    match command {
        ChartCommand::Generate(args) => {
            let table = config.reference.nutrient_table()?;
            let book = recipe_book(config);
            let mut planner = DietChartPlanner::new();
            for (slot, id) in &args.add_recipes {
                let recipe = book.get(*id)?;
                planner.add_recipe_to_meal(*slot, &recipe, &table)?;
            }

            let request = DietChartRequest {
                patient: Some(Patient {
                    id: PatientId(args.patient_id),
                    name: args.patient_name,
                    age: args.age,
                    gender: args.gender,
                    dosha: args.dosha,
                }),
                target_calories: args.target_calories,
                diet_goal: args.goal,
                dietary_restrictions: args.restrictions,
                protein: args.protein,
                carbs: args.carbs,
                fat: args.fat,
                fiber: args.fiber,
                water_intake: args.water_intake,
                meal_frequency: args.meal_frequency,
                chart_duration: args.chart_duration,
            };

            let chart = charts.save(planner.generate(request, Utc::now())?)?;
            info!(chart_id = %chart.id, patient_id = %chart.patient.id, "saved diet chart");
            print_json(&chart)
        }
        ChartCommand::Latest { patient_id } => {
            let chart = charts.latest_for_patient(PatientId(patient_id))?;
            print_json(&chart)
        }
        ChartCommand::List { patient_id } => {
            let listed: Vec<_> = charts
                .list()?
                .into_iter()
                .filter(|chart| patient_id.map_or(true, |id| chart.patient.id == PatientId(id)))
                .collect();
            print_json(&listed)
        }
    }
}
