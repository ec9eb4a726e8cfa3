pub mod icon;
pub mod workout_item;
