use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::nutrition::{NutrientImportError, NutrientTable};

const DEFAULT_DATA_DIR: &str = ".ayurdiet";

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub reference: ReferenceDataConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let nutrient_csv = match env::var("AYURDIET_NUTRIENT_CSV") {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value.trim());
                if !path.is_file() {
                    return Err(ConfigError::MissingNutrientCsv { path });
                }
                Some(path)
            }
            _ => None,
        };

        let data_dir = match env::var("AYURDIET_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::InvalidDataDir),
            Ok(value) => PathBuf::from(value.trim()),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            reference: ReferenceDataConfig { nutrient_csv },
            storage: StorageConfig { data_dir },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where reference data beyond the built-in tables comes from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataConfig {
    pub nutrient_csv: Option<PathBuf>,
}

impl ReferenceDataConfig {
    /// The built-in nutrient table with any configured CSV rows merged over it.
    pub fn nutrient_table(&self) -> Result<NutrientTable, NutrientImportError> {
        let mut table = NutrientTable::standard();
        if let Some(path) = &self.nutrient_csv {
            table.merge(NutrientTable::from_path(path)?);
        }
        Ok(table)
    }
}

/// Location of persisted custom recipes and diet charts.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn recipes_path(&self) -> PathBuf {
        self.data_dir.join("recipes.json")
    }

    pub fn diet_charts_path(&self) -> PathBuf {
        self.data_dir.join("diet_charts.json")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingNutrientCsv { path: PathBuf },
    InvalidDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingNutrientCsv { path } => write!(
                f,
                "AYURDIET_NUTRIENT_CSV points at '{}', which is not a readable file",
                path.display()
            ),
            ConfigError::InvalidDataDir => write!(f, "AYURDIET_DATA_DIR must not be blank"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("AYURDIET_NUTRIENT_CSV");
        env::remove_var("AYURDIET_DATA_DIR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.reference.nutrient_csv.is_none());
        assert_eq!(
            config.storage.recipes_path(),
            PathBuf::from(".ayurdiet/recipes.json")
        );
    }

    #[test]
    fn reads_environment_and_data_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "PROD");
        env::set_var("AYURDIET_DATA_DIR", "/var/lib/ayurdiet");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.storage.diet_charts_path(),
            PathBuf::from("/var/lib/ayurdiet/diet_charts.json")
        );
        reset_env();
    }

    #[test]
    fn rejects_blank_data_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AYURDIET_DATA_DIR", "   ");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidDataDir)));
        reset_env();
    }

    #[test]
    fn rejects_missing_nutrient_csv() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AYURDIET_NUTRIENT_CSV", "/definitely/not/here.csv");
        match AppConfig::load() {
            Err(ConfigError::MissingNutrientCsv { path }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.csv"));
            }
            other => panic!("expected missing csv, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn reference_table_defaults_to_builtin() {
        let table = ReferenceDataConfig::default()
            .nutrient_table()
            .expect("builtin table");
        assert_eq!(table.len(), NutrientTable::standard().len());
    }
}
