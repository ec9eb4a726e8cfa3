use crate::{Category, Workout, WorkoutID};

struct CatalogWorkout {
    id: &'static str,
    title: &'static str,
    duration: &'static str,
    category: Category,
    date: &'static str,
}

const WORKOUTS: [CatalogWorkout; 6] = [
    CatalogWorkout {
        id: "1",
        title: "Morning Full Body",
        duration: "45 min",
        category: Category::Strength,
        date: "Today, 07:30",
    },
    CatalogWorkout {
        id: "2",
        title: "Evening Run",
        duration: "30 min",
        category: Category::Cardio,
        date: "Yesterday, 18:00",
    },
    CatalogWorkout {
        id: "3",
        title: "Yoga & Stretching",
        duration: "20 min",
        category: Category::Flexibility,
        date: "Mon, 08:00",
    },
    CatalogWorkout {
        id: "4",
        title: "Upper Body Push",
        duration: "50 min",
        category: Category::Strength,
        date: "Sun, 10:15",
    },
    CatalogWorkout {
        id: "5",
        title: "HIIT Circuit",
        duration: "25 min",
        category: Category::Hiit,
        date: "Sat, 09:00",
    },
    CatalogWorkout {
        id: "6",
        title: "Cycling Session",
        duration: "60 min",
        category: Category::Cardio,
        date: "Fri, 17:30",
    },
];

/// Workouts preloaded into a fresh store, in display order.
#[must_use]
pub fn workouts() -> Vec<Workout> {
    WORKOUTS
        .iter()
        .map(|workout| Workout {
            id: WorkoutID::from(workout.id),
            title: workout.title.to_string(),
            duration: workout.duration.to_string(),
            category: workout.category,
            date: workout.date.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_workouts_order_is_stable() {
        assert_eq!(workouts(), workouts());
        assert_eq!(
            workouts()
                .iter()
                .map(|workout| workout.id.to_string())
                .collect::<Vec<_>>(),
            ["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_workout_ids_are_unique() {
        assert_eq!(
            workouts()
                .iter()
                .map(|workout| workout.id.clone())
                .collect::<BTreeSet<_>>()
                .len(),
            workouts().len()
        );
    }
}
