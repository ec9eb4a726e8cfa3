use vigor_domain as domain;

use crate::{Orders, Route, component::workout_item, data};

pub struct Model;

#[must_use]
pub fn init() -> Model {
    Model
}

pub enum Msg {
    ShowWorkout(domain::WorkoutID),
    AddWorkout,
}

pub fn update(msg: Msg, _model: &mut Model, orders: &mut Orders) {
    match msg {
        Msg::ShowWorkout(id) => orders.request_route(Route::WorkoutDetails {
            workout_id: id.to_string(),
        }),
        Msg::AddWorkout => orders.request_route(Route::AddWorkout),
    }
}

#[must_use]
pub fn subtitle(data: &data::Model) -> String {
    format!("You have {} workouts logged", data.workouts().len())
}

#[must_use]
pub fn workout_list(data: &data::Model) -> Vec<workout_item::View> {
    data.workouts().iter().map(workout_item::View::from).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Effect;

    #[test]
    fn test_show_workout_navigates_to_details() {
        let mut orders = Orders::new();
        update(
            Msg::ShowWorkout(domain::WorkoutID::from("3")),
            &mut init(),
            &mut orders,
        );
        assert_eq!(
            orders.take_effects(),
            vec![Effect::Navigate(Route::WorkoutDetails {
                workout_id: "3".to_string()
            })]
        );
    }

    #[test]
    fn test_add_workout_navigates_to_form() {
        let mut orders = Orders::new();
        update(Msg::AddWorkout, &mut init(), &mut orders);
        assert_eq!(
            orders.take_effects(),
            vec![Effect::Navigate(Route::AddWorkout)]
        );
    }

    #[test]
    fn test_workout_list_renders_all_workouts() {
        let data = data::Model::new();
        let list = workout_list(&data);
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].title, "Morning Full Body");
        assert_eq!(list[5].title, "Cycling Session");
        assert_eq!(subtitle(&data), "You have 6 workouts logged");
    }
}
