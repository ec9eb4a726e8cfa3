use chrono::Local;
use log::error;
use strum::IntoEnumIterator;
use vigor_domain::{self as domain, Field, FieldErrors};

use crate::{Orders, Route, data};

pub struct Model {
    draft: domain::WorkoutDraft,
    errors: FieldErrors,
    state: State,
}

impl Model {
    #[must_use]
    pub fn draft(&self) -> &domain::WorkoutDraft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Editing,
    Submitted,
}

#[must_use]
pub fn init() -> Model {
    Model {
        draft: domain::WorkoutDraft::new(Local::now().date_naive()),
        errors: FieldErrors::default(),
        state: State::Editing,
    }
}

pub enum Msg {
    TitleChanged(String),
    CategoryChanged(domain::Category),
    DurationChanged(String),
    IntensityChanged(domain::Intensity),
    DateChanged(String),
    SaveWorkout,
    GoBack,
}

pub fn update(msg: Msg, model: &mut Model, data_model: &mut data::Model, orders: &mut Orders) {
    match msg {
        Msg::TitleChanged(title) => {
            model.draft.title = title;
            model.errors.clear(Field::Title);
        }
        Msg::CategoryChanged(category) => {
            model.draft.category = category;
            model.errors.clear(Field::Category);
        }
        Msg::DurationChanged(duration) => {
            model.draft.duration = duration;
            model.errors.clear(Field::Duration);
        }
        Msg::IntensityChanged(intensity) => {
            model.draft.intensity = intensity;
            model.errors.clear(Field::Intensity);
        }
        Msg::DateChanged(date) => {
            model.draft.date = date;
            model.errors.clear(Field::Date);
        }
        Msg::SaveWorkout => {
            let errors = domain::validate(&model.draft);
            if errors.is_empty() {
                match data_model.add_workout(&model.draft) {
                    Ok(workout) => {
                        model.errors = FieldErrors::default();
                        model.state = State::Submitted;
                        orders.notify(format!("Workout \"{}\" added", workout.title));
                        orders.request_route(Route::Home);
                    }
                    Err(err) => {
                        error!("failed to add workout: {err}");
                    }
                }
            } else {
                model.errors = errors;
            }
        }
        Msg::GoBack => {
            orders.go_back();
        }
    }
}

/// Options of the category selection control, in form order.
#[must_use]
pub fn category_options() -> Vec<domain::Category> {
    domain::Category::iter().collect()
}

/// Options of the intensity selection control, in form order.
#[must_use]
pub fn intensity_options() -> Vec<domain::Intensity> {
    domain::Intensity::iter().collect()
}
