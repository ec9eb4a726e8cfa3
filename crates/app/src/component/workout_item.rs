use vigor_domain::{Workout, WorkoutID};

use crate::component::icon;

/// Display fields of a single row in the workout list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: WorkoutID,
    pub icon: &'static str,
    pub title: String,
    pub date: String,
    pub duration_tag: String,
    pub category_tag: String,
}

impl From<&Workout> for View {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id.clone(),
            icon: icon::material_icon(workout.category.symbol()),
            title: workout.title.clone(),
            date: workout.date.clone(),
            duration_tag: workout.duration.clone(),
            category_tag: workout.category.to_string(),
        }
    }
}
