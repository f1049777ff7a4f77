use ayurdiet::diet_chart::{next_free_id, DietChart, DietChartRepository};
use ayurdiet::nutrition::Ingredient;
use ayurdiet::recipes::{Recipe, RecipeId, RecipeRepository};
use ayurdiet::repository::RepositoryError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A JSON array of records on disk, rewritten whole on every change.
#[derive(Debug)]
struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(unavailable(&self.path, err)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|err| unavailable(&self.path, err))
    }

    fn write<T: Serialize>(&self, records: &[T]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| unavailable(parent, err))?;
        }
        let body =
            serde_json::to_string_pretty(records).map_err(|err| unavailable(&self.path, err))?;
        fs::write(&self.path, body).map_err(|err| unavailable(&self.path, err))
    }

    fn update<T, F, R>(&self, change: F) -> Result<R, RepositoryError>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut Vec<T>) -> Result<R, RepositoryError>,
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record file lock poisoned".to_string()))?;
        let mut records = self.read()?;
        let result = change(&mut records)?;
        self.write(&records)?;
        Ok(result)
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Unavailable(format!("{}: {err}", path.display()))
}

#[derive(Debug)]
pub(crate) struct JsonRecipeRepository {
    file: JsonFile,
}

impl JsonRecipeRepository {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

impl RecipeRepository for JsonRecipeRepository {
    fn insert(&self, recipe: Recipe) -> Result<Recipe, RepositoryError> {
        self.file.update(|records: &mut Vec<Recipe>| {
            if records.iter().any(|existing| existing.id == recipe.id) {
                return Err(RepositoryError::Conflict);
            }
            records.push(recipe.clone());
            Ok(recipe)
        })
    }

    fn list(&self) -> Result<Vec<Recipe>, RepositoryError> {
        self.file.read()
    }

    fn delete(&self, id: RecipeId) -> Result<(), RepositoryError> {
        self.file.update(|records: &mut Vec<Recipe>| {
            let before = records.len();
            records.retain(|recipe| recipe.id != id);
            if records.len() == before {
                Err(RepositoryError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}

#[derive(Debug)]
pub(crate) struct JsonDietChartRepository {
    file: JsonFile,
}

impl JsonDietChartRepository {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

impl DietChartRepository for JsonDietChartRepository {
    fn save(&self, mut chart: DietChart) -> Result<DietChart, RepositoryError> {
        self.file.update(|records: &mut Vec<DietChart>| {
            chart.id = next_free_id(records, chart.id);
            records.push(chart.clone());
            Ok(chart)
        })
    }

    fn list(&self) -> Result<Vec<DietChart>, RepositoryError> {
        self.file.read()
    }
}

/// Parses `name=quantity`; a bare name means one serving.
pub(crate) fn parse_ingredient(raw: &str) -> Result<Ingredient, String> {
    let (name, quantity) = match raw.rsplit_once('=') {
        Some((name, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<f64>()
                .map_err(|err| format!("invalid quantity in '{raw}' ({err})"))?;
            (name, quantity)
        }
        None => (raw, 1.0),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("ingredient name missing in '{raw}'"));
    }
    Ok(Ingredient::new(name, quantity))
}

/// Parses `slot=recipe_id`, where slot is the zero-based meal slot index.
pub(crate) fn parse_meal_recipe(raw: &str) -> Result<(usize, RecipeId), String> {
    let (slot, id) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=RECIPE_ID, got '{raw}'"))?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid meal slot in '{raw}' ({err})"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|err| format!("invalid recipe id in '{raw}' ({err})"))?;
    Ok((slot, RecipeId(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayurdiet::diet_chart::{DietChartPlanner, DietChartRequest, DietGoal, Patient, PatientId};
    use ayurdiet::recipes::{Difficulty, MealTime};
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir()
            .join(format!("ayurdiet-cli-{}-{unique}", std::process::id()))
            .join(name)
    }

    fn recipe(id: u64) -> Recipe {
        Recipe {
            id: RecipeId(id),
            name: format!("Recipe {id}"),
            description: String::new(),
            meal_time: MealTime::Snack,
            servings: 1,
            prep_time: String::new(),
            cook_time: String::new(),
            difficulty: Difficulty::Easy,
            suitable_for: Vec::new(),
            ingredients: vec![Ingredient::new("banana", 1.0)],
            instructions: Vec::new(),
            health_benefits: Vec::new(),
            is_custom: true,
        }
    }

    #[test]
    fn recipe_file_round_trips_inserts_and_deletes() {
        let path = scratch_path("recipes.json");
        let repository = JsonRecipeRepository::new(path.clone());
        assert!(repository.list().expect("missing file is empty").is_empty());

        repository.insert(recipe(10)).expect("insert");
        repository.insert(recipe(11)).expect("insert");
        assert!(matches!(
            repository.insert(recipe(10)),
            Err(RepositoryError::Conflict)
        ));

        let reopened = JsonRecipeRepository::new(path.clone());
        let ids: Vec<u64> = reopened
            .list()
            .expect("list")
            .iter()
            .map(|recipe| recipe.id.0)
            .collect();
        assert_eq!(ids, vec![10, 11]);

        reopened.delete(RecipeId(10)).expect("delete");
        assert!(matches!(
            reopened.delete(RecipeId(10)),
            Err(RepositoryError::NotFound)
        ));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    fn chart_at_noon() -> DietChart {
        let request = DietChartRequest {
            patient: Some(Patient {
                id: PatientId(4),
                name: "Ravi".to_string(),
                age: None,
                gender: None,
                dosha: None,
            }),
            target_calories: Some(1900),
            diet_goal: Some(DietGoal::GeneralWellness),
            ..DietChartRequest::default()
        };
        let at = Utc
            .with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        DietChartPlanner::new()
            .generate(request, at)
            .expect("chart generated")
    }

    #[test]
    fn charts_from_the_same_millisecond_both_persist() {
        let path = scratch_path("diet_charts.json");
        let repository = JsonDietChartRepository::new(path.clone());

        let first = repository.save(chart_at_noon()).expect("first save");
        let second = repository.save(chart_at_noon()).expect("second save");
        assert_eq!(second.id.0, first.id.0 + 1);

        let latest = repository
            .latest_for_patient(PatientId(4))
            .expect("lists")
            .expect("patient has charts");
        assert_eq!(latest.id, second.id);
        assert_eq!(repository.list().expect("lists").len(), 2);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn corrupt_file_reports_unavailable() {
        let path = scratch_path("recipes.json");
        fs::create_dir_all(path.parent().expect("has parent")).expect("create dir");
        fs::write(&path, "{not json").expect("write");

        match JsonRecipeRepository::new(path.clone()).list() {
            Err(RepositoryError::Unavailable(message)) => assert!(message.contains("recipes.json")),
            other => panic!("expected unavailable, got {other:?}"),
        }

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn parses_cli_values() {
        let ingredient = parse_ingredient("coconut oil=0.5").expect("parses");
        assert_eq!(ingredient.name, "coconut oil");
        assert_eq!(ingredient.quantity, 0.5);
        assert_eq!(parse_ingredient("rice").expect("parses").quantity, 1.0);
        assert!(parse_ingredient("=2").is_err());
        assert!(parse_ingredient("rice=lots").is_err());

        assert_eq!(parse_meal_recipe("5=12"), Ok((5, RecipeId(12))));
        assert!(parse_meal_recipe("dinner").is_err());
    }
}
