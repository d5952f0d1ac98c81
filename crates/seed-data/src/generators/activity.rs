//! Random activity generation.

use rand::Rng;
use time::{Date, Duration};

use octofit::models::Activity;

use super::random_id;
use crate::config::SeedConfig;

pub const ACTIVITY_TYPES: &[&str] = &[
    "running",
    "strength training",
    "swimming",
    "cycling",
    "flying",
    "combat training",
];

/// Generates a random batch of activities for a user.
pub struct ActivityGenerator {
    activities_per_user: (u32, u32),
    duration_minutes: (i32, i32),
    calories: (i32, i32),
    days_back: (i64, i64),
}

impl ActivityGenerator {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            activities_per_user: config.activities_per_user,
            duration_minutes: config.duration_minutes,
            calories: config.calories,
            days_back: config.days_back,
        }
    }

    /// Generates between `activities_per_user.0` and `.1` activities, each
    /// dated `days_back` days before `today`.
    pub fn generate_for_user(
        &self,
        user_email: &str,
        today: Date,
        rng: &mut impl Rng,
    ) -> Vec<Activity> {
        let (min, max) = self.activities_per_user;
        let count = rng.gen_range(min..=max);

        (0..count)
            .map(|_| self.generate_one(user_email, today, rng))
            .collect()
    }

    fn generate_one(&self, user_email: &str, today: Date, rng: &mut impl Rng) -> Activity {
        let id = random_id(rng);
        let activity_type = ACTIVITY_TYPES[rng.gen_range(0..ACTIVITY_TYPES.len())];
        let duration = rng.gen_range(self.duration_minutes.0..=self.duration_minutes.1);
        let calories = rng.gen_range(self.calories.0..=self.calories.1);
        let days = rng.gen_range(self.days_back.0..=self.days_back.1);

        Activity::new(
            id,
            user_email,
            activity_type,
            duration,
            calories,
            today.saturating_sub(Duration::days(days)),
        )
    }
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new(&SeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    #[test]
    fn test_activities_within_ranges() {
        let activity_gen = ActivityGenerator::default();
        let mut rng = StdRng::seed_from_u64(12345);
        let today = date!(2025 - 08 - 22);

        for _ in 0..50 {
            let activities =
                activity_gen.generate_for_user("diana.prince@themyscira.com", today, &mut rng);

            assert!((5..=10).contains(&activities.len()));
            for a in &activities {
                assert_eq!(a.user_email, "diana.prince@themyscira.com");
                assert!(ACTIVITY_TYPES.contains(&a.activity_type.as_str()));
                assert!((15..=120).contains(&a.duration));
                assert!((100..=800).contains(&a.calories));
                assert!(a.date < today);
                assert!(a.date >= today - Duration::days(30));
            }
        }
    }

    #[test]
    fn test_fixed_count_config() {
        let config = SeedConfig {
            activities_per_user: (3, 3),
            days_back: (1, 1),
            ..SeedConfig::default()
        };
        let activity_gen = ActivityGenerator::new(&config);
        let mut rng = StdRng::seed_from_u64(3);
        let today = date!(2025 - 03 - 01);

        let activities = activity_gen.generate_for_user("barry.allen@ccpd.com", today, &mut rng);
        assert_eq!(activities.len(), 3);
        assert!(activities.iter().all(|a| a.date == date!(2025 - 02 - 28)));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let activity_gen = ActivityGenerator::default();
        let today = date!(2025 - 08 - 22);

        let first = activity_gen.generate_for_user(
            "hal.jordan@greenlantern.com",
            today,
            &mut StdRng::seed_from_u64(7),
        );
        let second = activity_gen.generate_for_user(
            "hal.jordan@greenlantern.com",
            today,
            &mut StdRng::seed_from_u64(7),
        );
        assert_eq!(first, second);
    }
}
