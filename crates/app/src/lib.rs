#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

pub mod component;
pub mod data;
pub mod page;

/// Closed navigation contract between screens. Every destination names the
/// parameters it requires; navigation requests are type-checked at the
/// call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AddWorkout,
    WorkoutDetails { workout_id: String },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/home"),
            Route::AddWorkout => write!(f, "/add-workout"),
            Route::WorkoutDetails { workout_id } => write!(f, "/workout-details#{workout_id}"),
        }
    }
}

/// Side effects requested by a page in response to a message. The shell
/// hosting the pages performs them after `update` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Route),
    NavigateBack,
    Notify(String),
}

#[derive(Debug, Default)]
pub struct Orders {
    effects: Vec<Effect>,
}

impl Orders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_route(&mut self, route: Route) {
        self.effects.push(Effect::Navigate(route));
    }

    pub fn go_back(&mut self) {
        self.effects.push(Effect::NavigateBack);
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.effects.push(Effect::Notify(message.into()));
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
