use super::record::{DoshaEffect, NutrientRecord};
use super::table::normalize_key;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub enum NutrientImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: usize, reason: String },
}

impl std::fmt::Display for NutrientImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientImportError::Io(err) => write!(f, "failed to read nutrient table: {}", err),
            NutrientImportError::Csv(err) => write!(f, "invalid nutrient CSV data: {}", err),
            NutrientImportError::InvalidRow { line, reason } => {
                write!(f, "nutrient CSV line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for NutrientImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NutrientImportError::Io(err) => Some(err),
            NutrientImportError::Csv(err) => Some(err),
            NutrientImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for NutrientImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for NutrientImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct NutrientRow {
    key: String,
    name: String,
    #[serde(default)]
    quantity: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    calcium: f64,
    iron: f64,
    magnesium: f64,
    vata: i8,
    pitta: i8,
    kapha: i8,
}

impl NutrientRow {
    fn into_record(self, line: usize) -> Result<(String, NutrientRecord), NutrientImportError> {
        let key = normalize_key(&self.key);
        if key.is_empty() {
            return Err(NutrientImportError::InvalidRow {
                line,
                reason: "ingredient key is blank".to_string(),
            });
        }

        let dosha_effect = DoshaEffect::new(self.vata, self.pitta, self.kapha);
        if !dosha_effect.is_valid() {
            return Err(NutrientImportError::InvalidRow {
                line,
                reason: format!("dosha affinity for '{key}' must be -1, 0, or 1"),
            });
        }

        let record = NutrientRecord {
            name: if self.name.trim().is_empty() {
                key.clone()
            } else {
                self.name
            },
            quantity: self.quantity,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            calcium: self.calcium,
            iron: self.iron,
            magnesium: self.magnesium,
            dosha_effect,
        };

        if record
            .numeric_fields()
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(NutrientImportError::InvalidRow {
                line,
                reason: format!("nutrient values for '{key}' must be non-negative numbers"),
            });
        }

        Ok((key, record))
    }
}

pub(crate) fn parse_rows<R: Read>(
    reader: R,
) -> Result<Vec<(String, NutrientRecord)>, NutrientImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, row) in csv_reader.deserialize::<NutrientRow>().enumerate() {
        // Header occupies line 1.
        let line = index + 2;
        rows.push(row?.into_record(line)?);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::super::NutrientTable;
    use super::*;

    const HEADER: &str =
        "key,name,quantity,calories,protein,carbs,fat,fiber,calcium,iron,magnesium,vata,pitta,kapha\n";

    #[test]
    fn imports_rows_with_lowercased_keys() {
        let csv = format!(
            "{HEADER}Quinoa,Quinoa (1 cup cooked),185g,222,8.1,39.4,3.6,5.2,31,2.8,118,-1,-1,0\n"
        );
        let table = NutrientTable::from_reader(csv.as_bytes()).expect("csv imports");

        let quinoa = table.lookup("quinoa").expect("quinoa imported");
        assert_eq!(quinoa.name, "Quinoa (1 cup cooked)");
        assert_eq!(quinoa.magnesium, 118.0);
        assert_eq!(quinoa.dosha_effect, DoshaEffect::new(-1, -1, 0));
    }

    #[test]
    fn rejects_out_of_range_affinity() {
        let csv = format!("{HEADER}chili,Chili,1 tsp,6,0.3,1.3,0.3,0.7,1,0.1,2,1,2,-1\n");
        let err = NutrientTable::from_reader(csv.as_bytes()).expect_err("affinity 2 rejected");
        match err {
            NutrientImportError::InvalidRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("chili"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_nutrients() {
        let csv = format!("{HEADER}salt,Salt,1 tsp,-1,0,0,0,0,0,0,0,0,1,1\n");
        assert!(matches!(
            NutrientTable::from_reader(csv.as_bytes()),
            Err(NutrientImportError::InvalidRow { .. })
        ));
    }

    #[test]
    fn malformed_numbers_surface_csv_errors() {
        let csv = format!("{HEADER}salt,Salt,1 tsp,lots,0,0,0,0,0,0,0,0,1,1\n");
        assert!(matches!(
            NutrientTable::from_reader(csv.as_bytes()),
            Err(NutrientImportError::Csv(_))
        ));
    }
}
