//! Record generators for database population.
//!
//! - [`TeamGenerator`]: the fixed teams and their rosters
//! - [`UserGenerator`]: one user per rostered hero
//! - [`WorkoutGenerator`]: the static workout catalog
//! - [`ActivityGenerator`]: random activities per user
//! - [`LeaderboardGenerator`]: calorie totals plus a random bonus

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::{ACTIVITY_TYPES, ActivityGenerator};
pub use leaderboard::LeaderboardGenerator;
pub use team::{ROSTERS, TeamGenerator, TeamRoster};
pub use user::{DC_HEROES, Hero, MARVEL_HEROES, UserGenerator};
pub use workout::{WORKOUT_CATALOG, WorkoutGenerator};

use rand::Rng;
use uuid::Uuid;

/// Draws a v4 UUID from `rng` so seeded runs produce identical ids.
pub(crate) fn random_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid()
}
