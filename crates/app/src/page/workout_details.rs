use vigor_domain as domain;

use crate::{Orders, data};

pub struct Model {
    workout_id: domain::WorkoutID,
}

#[must_use]
pub fn init(workout_id: domain::WorkoutID) -> Model {
    Model { workout_id }
}

impl Model {
    #[must_use]
    pub fn workout(&self, data: &data::Model) -> Option<domain::Workout> {
        data.workout(&self.workout_id)
    }

    /// The raw identifier is always shown, whether or not a matching
    /// record exists.
    #[must_use]
    pub fn id_label(&self) -> String {
        format!("Workout ID: {}", self.workout_id)
    }
}

pub enum Msg {
    GoBack,
}

pub fn update(msg: Msg, _model: &mut Model, orders: &mut Orders) {
    match msg {
        Msg::GoBack => orders.go_back(),
    }
}
