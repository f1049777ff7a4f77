use crate::commands::{
    run_chart, run_ingredients, run_insights, run_nutrients, run_questions, run_quiz,
    run_recipes, run_recommend, ChartCommand, InsightsArgs, NutrientsArgs, QuizArgs,
    RecipesCommand, RecommendArgs,
};
use ayurdiet::config::AppConfig;
use ayurdiet::error::AppError;
use ayurdiet::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "ayurdiet",
    about = "Dosha assessment, Ayurvedic diet recommendations, and nutrient analysis",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the constitution quiz questions
    Questions,
    /// Score a completed quiz
    Quiz(QuizArgs),
    /// Food, meal timing, seasonal and insight recommendations for a dosha
    Recommend(RecommendArgs),
    /// Insight lines, daily routine, and quick remedies for a dosha
    Insights(InsightsArgs),
    /// Aggregate nutrients for an ingredient list
    Nutrients(NutrientsArgs),
    /// List ingredients known to the nutrient table
    Ingredients,
    /// Browse, add and delete recipes
    Recipes {
        #[command(subcommand)]
        command: RecipesCommand,
    },
    /// Generate and look up patient diet charts
    Chart {
        #[command(subcommand)]
        command: ChartCommand,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Command::Questions => run_questions(),
        Command::Quiz(args) => run_quiz(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Insights(args) => run_insights(args),
        Command::Nutrients(args) => run_nutrients(&config, args),
        Command::Ingredients => run_ingredients(&config),
        Command::Recipes { command } => run_recipes(&config, command),
        Command::Chart { command } => run_chart(&config, command),
    }
}
