use super::domain::{DietChart, DietChartId, PatientId};
use crate::repository::RepositoryError;

/// Persistence for generated diet charts.
pub trait DietChartRepository: Send + Sync {
    fn save(&self, chart: DietChart) -> Result<DietChart, RepositoryError>;
    fn list(&self) -> Result<Vec<DietChart>, RepositoryError>;

    /// The patient's chart with the greatest id, which is the most recently generated.
    fn latest_for_patient(&self, patient: PatientId) -> Result<Option<DietChart>, RepositoryError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|chart| chart.patient.id == patient)
            .max_by_key(|chart| chart.id))
    }
}

/// The first id at or after `proposed` that no stored chart uses.
///
/// Chart ids are generation timestamps in milliseconds, so two charts made in the
/// same millisecond collide; the later one moves forward by a millisecond at a time.
pub fn next_free_id(existing: &[DietChart], proposed: DietChartId) -> DietChartId {
    let mut id = proposed;
    while existing.iter().any(|chart| chart.id == id) {
        id = DietChartId(id.0.saturating_add(1));
    }
    id
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::diet_chart::{DietChartPlanner, DietChartRequest, DietGoal, Patient};

    #[derive(Default)]
    struct MemoryCharts {
        charts: Mutex<Vec<DietChart>>,
    }

    impl DietChartRepository for MemoryCharts {
        fn save(&self, chart: DietChart) -> Result<DietChart, RepositoryError> {
            self.charts
                .lock()
                .expect("chart mutex poisoned")
                .push(chart.clone());
            Ok(chart)
        }

        fn list(&self) -> Result<Vec<DietChart>, RepositoryError> {
            Ok(self.charts.lock().expect("chart mutex poisoned").clone())
        }
    }

    fn chart_for(patient: u64, day: u32) -> DietChart {
        let request = DietChartRequest {
            patient: Some(Patient {
                id: PatientId(patient),
                name: format!("Patient {patient}"),
                age: None,
                gender: None,
                dosha: None,
            }),
            target_calories: Some(2000),
            diet_goal: Some(DietGoal::GeneralWellness),
            ..DietChartRequest::default()
        };
        let at = Utc
            .with_ymd_and_hms(2025, 5, day, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        DietChartPlanner::new()
            .generate(request, at)
            .expect("chart generated")
    }

    #[test]
    fn colliding_ids_move_to_the_next_free_millisecond() {
        let first = chart_for(1, 10);
        let mut second = chart_for(1, 10);
        let taken = first.id;
        second.id = DietChartId(taken.0 + 1);
        let existing = vec![first, second];

        assert_eq!(next_free_id(&existing, taken), DietChartId(taken.0 + 2));
        assert_eq!(next_free_id(&existing, DietChartId(1)), DietChartId(1));
    }

    #[test]
    fn latest_chart_is_the_greatest_id_not_the_last_saved() {
        let repository = MemoryCharts::default();
        repository.save(chart_for(1, 10)).expect("saves");
        repository.save(chart_for(1, 20)).expect("saves");
        repository.save(chart_for(2, 25)).expect("saves");
        repository.save(chart_for(1, 5)).expect("saves");

        let latest = repository
            .latest_for_patient(PatientId(1))
            .expect("lists")
            .expect("patient has charts");
        assert_eq!(latest.generated_on.to_string(), "2025-05-20");

        assert!(repository
            .latest_for_patient(PatientId(3))
            .expect("lists")
            .is_none());
    }
}
