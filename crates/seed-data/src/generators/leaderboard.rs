//! Leaderboard scoring.

use rand::Rng;

use octofit::models::{Activity, LeaderboardEntry};

use super::random_id;
use crate::config::SeedConfig;

/// Scores a user as total calories burned plus a random bonus.
pub struct LeaderboardGenerator {
    score_bonus: (i32, i32),
}

impl LeaderboardGenerator {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            score_bonus: config.score_bonus,
        }
    }

    pub fn score(&self, activities: &[Activity], rng: &mut impl Rng) -> i32 {
        let total_calories: i32 = activities.iter().map(|a| a.calories).sum();
        total_calories + rng.gen_range(self.score_bonus.0..=self.score_bonus.1)
    }

    pub fn entry_for(
        &self,
        user_email: &str,
        activities: &[Activity],
        rng: &mut impl Rng,
    ) -> LeaderboardEntry {
        let score = self.score(activities, rng);
        LeaderboardEntry::new(random_id(rng), user_email, score)
    }
}

impl Default for LeaderboardGenerator {
    fn default() -> Self {
        Self::new(&SeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ActivityGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    #[test]
    fn test_score_bounds() {
        let mut rng = StdRng::seed_from_u64(12345);
        let activities = ActivityGenerator::default().generate_for_user(
            "bruce.wayne@wayneenterprises.com",
            date!(2025 - 08 - 22),
            &mut rng,
        );
        let total: i32 = activities.iter().map(|a| a.calories).sum();

        let leaderboard_gen = LeaderboardGenerator::default();
        for _ in 0..100 {
            let score = leaderboard_gen.score(&activities, &mut rng);
            assert!(score >= total);
            assert!(score <= total + 500);
        }
    }

    #[test]
    fn test_no_activities_scores_bonus_only() {
        let config = SeedConfig {
            score_bonus: (42, 42),
            ..SeedConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let leaderboard_gen = LeaderboardGenerator::new(&config);
        let entry = leaderboard_gen.entry_for("arthur.curry@atlantis.com", &[], &mut rng);

        assert_eq!(entry.score, 42);
        assert_eq!(entry.user_email, "arthur.curry@atlantis.com");
    }
}
