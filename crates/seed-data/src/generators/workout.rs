//! The static workout catalog.

use rand::Rng;

use octofit::models::{Difficulty, Workout};

use super::random_id;

/// Name, description, and difficulty of every catalog workout.
pub const WORKOUT_CATALOG: &[(&str, &str, Difficulty)] = &[
    (
        "Super Strength Training",
        "Build incredible strength like a superhero",
        Difficulty::Hard,
    ),
    (
        "Speed Training",
        "Lightning fast cardio workout",
        Difficulty::Medium,
    ),
    (
        "Flexibility & Agility",
        "Improve flexibility and agility",
        Difficulty::Easy,
    ),
    (
        "Hero Endurance Challenge",
        "Ultimate endurance test for heroes",
        Difficulty::Hard,
    ),
    (
        "Combat Training",
        "Practice fighting techniques",
        Difficulty::Medium,
    ),
    (
        "Flying Practice",
        "Aerial maneuvers and flying skills",
        Difficulty::Easy,
    ),
];

pub struct WorkoutGenerator {
    catalog: &'static [(&'static str, &'static str, Difficulty)],
}

impl WorkoutGenerator {
    pub fn new() -> Self {
        Self {
            catalog: WORKOUT_CATALOG,
        }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Workout> {
        self.catalog
            .iter()
            .map(|&(name, description, difficulty)| {
                Workout::new(random_id(rng), name, description, difficulty)
            })
            .collect()
    }
}

impl Default for WorkoutGenerator {
    fn default() -> Self {
        Self::new()
    }
}
