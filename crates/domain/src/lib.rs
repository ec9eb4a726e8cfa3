#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod draft;
mod error;
mod service;
mod workout;

pub use draft::{Field, FieldErrors, ValidationError, WorkoutDraft, validate};
pub use error::{CreateError, ReadError, StorageError};
pub use service::Service;
pub use workout::{Category, Intensity, Workout, WorkoutID, WorkoutRepository, WorkoutService};
