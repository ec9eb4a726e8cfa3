use vigor_domain::{self as domain, WorkoutService};
use vigor_storage as storage;

/// Data shared by all pages. Owns the workout service over the in-memory
/// store, so the list the home page renders and the list the add-workout
/// flow appends to are the same.
pub struct Model {
    service: domain::Service<storage::Memory>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: domain::Service::new(storage::Memory::seeded()),
        }
    }

    #[must_use]
    pub fn workouts(&self) -> Vec<domain::Workout> {
        self.service.get_workouts().unwrap_or_default()
    }

    #[must_use]
    pub fn workout(&self, id: &domain::WorkoutID) -> Option<domain::Workout> {
        self.service.get_workout(id).ok().flatten()
    }

    /// Turns a validated draft into a workout record and appends it to the
    /// store. The draft's intensity is not part of the stored record.
    pub fn add_workout(
        &mut self,
        draft: &domain::WorkoutDraft,
    ) -> Result<domain::Workout, domain::CreateError> {
        self.service.create_workout(domain::Workout {
            id: domain::WorkoutID::new(),
            title: draft.title.trim().to_string(),
            duration: format!("{} min", draft.duration.trim()),
            category: draft.category,
            date: draft.date.trim().to_string(),
        })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vigor_domain::{Category, Intensity, WorkoutDraft, WorkoutID, catalog};

    use super::*;

    #[test]
    fn test_new_model_contains_catalog() {
        assert_eq!(Model::new().workouts(), catalog::workouts());
    }

    #[test]
    fn test_workout_lookup() {
        let data = Model::new();
        assert_eq!(
            data.workout(&WorkoutID::from("3")).map(|w| w.title),
            Some("Yoga & Stretching".to_string())
        );
        assert_eq!(data.workout(&WorkoutID::from("unknown")), None);
    }

    #[test]
    fn test_add_workout_appends_record() {
        let mut data = Model::new();
        let workout = data
            .add_workout(&WorkoutDraft {
                title: "  Leg Day  ".to_string(),
                category: Category::Strength,
                duration: "45".to_string(),
                intensity: Intensity::High,
                date: "2025-01-30".to_string(),
            })
            .unwrap();
        assert_eq!(workout.title, "Leg Day");
        assert_eq!(workout.duration, "45 min");
        assert_eq!(workout.date, "2025-01-30");
        assert_eq!(data.workouts().len(), catalog::workouts().len() + 1);
        assert_eq!(data.workouts().last(), Some(&workout));
    }
}
