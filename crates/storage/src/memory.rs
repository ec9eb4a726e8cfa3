use std::cell::RefCell;

use log::debug;
use vigor_domain::{CreateError, ReadError, Workout, WorkoutRepository, catalog};

/// In-memory workout store, the single source of truth for the home list
/// and the add-workout flow. Only ever accessed from the UI thread.
pub struct Memory {
    workouts: RefCell<Vec<Workout>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            workouts: RefCell::new(Vec::new()),
        }
    }

    /// A store preloaded with the catalog fixture.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            workouts: RefCell::new(catalog::workouts()),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRepository for Memory {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        Ok(self.workouts.borrow().clone())
    }

    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        let mut workouts = self.workouts.borrow_mut();
        if workouts.iter().any(|w| w.id == workout.id) {
            return Err(CreateError::Conflict);
        }
        debug!("workout {} added", workout.id);
        workouts.push(workout.clone());
        Ok(workout)
    }
}
