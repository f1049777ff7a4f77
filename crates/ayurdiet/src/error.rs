use crate::config::ConfigError;
use crate::constitution::ClassifierError;
use crate::diet_chart::DietChartError;
use crate::nutrition::{NutrientError, NutrientImportError};
use crate::recipes::RecipeError;
use crate::recommendations::RecommendationError;
use crate::repository::RepositoryError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Classifier(ClassifierError),
    Recommendation(RecommendationError),
    NutrientImport(NutrientImportError),
    Nutrient(NutrientError),
    Recipe(RecipeError),
    DietChart(DietChartError),
    Repository(RepositoryError),
}

impl AppError {
    /// Input errors are the caller's fault; everything else is an environment failure.
    pub fn is_input_error(&self) -> bool {
        match self {
            AppError::Classifier(_)
            | AppError::Recommendation(_)
            | AppError::Nutrient(_)
            | AppError::DietChart(_) => true,
            AppError::Recipe(err) => !matches!(err, RecipeError::Repository(_)),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::NutrientImport(_)
            | AppError::Repository(_) => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Classifier(err) => write!(f, "invalid quiz answers: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
            AppError::NutrientImport(err) => write!(f, "nutrient import error: {}", err),
            AppError::Nutrient(err) => write!(f, "nutrient error: {}", err),
            AppError::Recipe(err) => write!(f, "recipe error: {}", err),
            AppError::DietChart(err) => write!(f, "diet chart error: {}", err),
            AppError::Repository(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Classifier(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
            AppError::NutrientImport(err) => Some(err),
            AppError::Nutrient(err) => Some(err),
            AppError::Recipe(err) => Some(err),
            AppError::DietChart(err) => Some(err),
            AppError::Repository(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ClassifierError> for AppError {
    fn from(value: ClassifierError) -> Self {
        Self::Classifier(value)
    }
}

impl From<RecommendationError> for AppError {
    fn from(value: RecommendationError) -> Self {
        Self::Recommendation(value)
    }
}

impl From<NutrientImportError> for AppError {
    fn from(value: NutrientImportError) -> Self {
        Self::NutrientImport(value)
    }
}

impl From<NutrientError> for AppError {
    fn from(value: NutrientError) -> Self {
        Self::Nutrient(value)
    }
}

impl From<RecipeError> for AppError {
    fn from(value: RecipeError) -> Self {
        Self::Recipe(value)
    }
}

impl From<DietChartError> for AppError {
    fn from(value: DietChartError) -> Self {
        Self::DietChart(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}
