use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{Category, Intensity};

/// Mutable field state of the workout entry form.
///
/// `duration` and `date` are kept as the raw entered text and only
/// interpreted by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub title: String,
    pub category: Category,
    pub duration: String,
    pub intensity: Intensity,
    pub date: String,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            category: Category::default(),
            duration: String::new(),
            intensity: Intensity::default(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Category,
    Duration,
    Intensity,
    Date,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Workout name is required.")]
    TitleRequired,
    #[error("Duration is required.")]
    DurationRequired,
    #[error("Duration must be a positive number.")]
    DurationNotPositive,
    #[error("Date is required.")]
    DateRequired,
    #[error("Date must be in YYYY-MM-DD format.")]
    DateFormat,
}

/// Per-field validation errors of a single submit attempt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Removes the error recorded for `field`, leaving all others untouched.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &ValidationError)> {
        self.0.iter()
    }
}

/// Validates the draft and returns a fresh error mapping.
///
/// `category` and `intensity` are never validated as they are drawn from
/// closed sets via selection controls. The result is empty if and only if
/// the draft can be submitted.
#[must_use]
pub fn validate(draft: &WorkoutDraft) -> FieldErrors {
    let mut errors = BTreeMap::new();

    if draft.title.trim().is_empty() {
        errors.insert(Field::Title, ValidationError::TitleRequired);
    }

    let duration = draft.duration.trim();
    if duration.is_empty() {
        errors.insert(Field::Duration, ValidationError::DurationRequired);
    } else {
        match duration.parse::<f32>() {
            Ok(parsed_duration) if parsed_duration > 0.0 => {}
            _ => {
                errors.insert(Field::Duration, ValidationError::DurationNotPositive);
            }
        }
    }

    let date = draft.date.trim();
    if date.is_empty() {
        errors.insert(Field::Date, ValidationError::DateRequired);
    } else if !has_iso_date_shape(date) {
        errors.insert(Field::Date, ValidationError::DateFormat);
    }

    FieldErrors(errors)
}

// Shape check only, no calendar validity ("2025-13-99" passes).
fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
