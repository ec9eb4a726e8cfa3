use log::error;

use crate::{CreateError, ReadError, Workout, WorkoutID, WorkoutRepository, WorkoutService};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "get", "workouts")
    }

    fn get_workout(&self, id: &WorkoutID) -> Result<Option<Workout>, ReadError> {
        log_on_error!(
            self.repository
                .read_workouts()
                .map(|workouts| workouts.into_iter().find(|workout| workout.id == *id)),
            "get",
            "workout"
        )
    }

    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(self.repository.create_workout(workout), "create", "workout")
    }
}
