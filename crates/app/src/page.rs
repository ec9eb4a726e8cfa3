pub mod add_workout;
pub mod home;
pub mod workout_details;
