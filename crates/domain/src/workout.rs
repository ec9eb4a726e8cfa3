use derive_more::{AsRef, Display, Into};
use uuid::Uuid;

use crate::{CreateError, ReadError};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn get_workout(&self, id: &WorkoutID) -> Result<Option<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

#[derive(AsRef, Debug, Display, Into, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct WorkoutID(String);

impl WorkoutID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for WorkoutID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed set of workout categories offered by the entry form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Category {
    #[default]
    Strength,
    Cardio,
    Flexibility,
    #[strum(to_string = "HIIT")]
    Hiit,
}

impl Category {
    /// Abstract icon symbol resolved by the platform icon mapping.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Category::Strength => "dumbbell",
            Category::Cardio => "figure.run",
            Category::Flexibility => "figure.yoga",
            Category::Hiit => "flame",
        }
    }
}

/// Closed set of intensity levels. `Moderate` is the form default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    Maximum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub title: String,
    pub duration: String,
    pub category: Category,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_workout_id_new_is_unique() {
        assert_ne!(WorkoutID::new(), WorkoutID::new());
    }

    #[test]
    fn test_workout_id_from_str() {
        assert_eq!(WorkoutID::from("1").to_string(), "1");
        assert_eq!(WorkoutID::from(String::from("42")).as_ref(), "42");
    }

    #[rstest]
    #[case(Category::Strength, "Strength", "dumbbell")]
    #[case(Category::Cardio, "Cardio", "figure.run")]
    #[case(Category::Flexibility, "Flexibility", "figure.yoga")]
    #[case(Category::Hiit, "HIIT", "flame")]
    fn test_category_display_and_symbol(
        #[case] category: Category,
        #[case] string: &str,
        #[case] symbol: &str,
    ) {
        assert_eq!(category.to_string(), string);
        assert_eq!(category.symbol(), symbol);
    }

    #[rstest]
    #[case(Intensity::Low, "Low")]
    #[case(Intensity::Moderate, "Moderate")]
    #[case(Intensity::High, "High")]
    #[case(Intensity::Maximum, "Maximum")]
    fn test_intensity_display(#[case] intensity: Intensity, #[case] string: &str) {
        assert_eq!(intensity.to_string(), string);
    }

    #[test]
    fn test_defaults_match_form_presets() {
        assert_eq!(Category::default(), Category::iter().next().unwrap());
        assert_eq!(Intensity::default(), Intensity::iter().nth(1).unwrap());
    }
}
