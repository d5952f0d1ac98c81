//! Database population for octofit.
//!
//! Seeds a store with two superhero teams, twelve users, a six-entry
//! workout catalog, random activities for every user, and a leaderboard
//! derived from those activities.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//! use rand::SeedableRng;
//!
//! let seeder = Seeder::new(Database::new(pool));
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let summary = seeder.populate(&mut rng).await?;
//! println!("{summary}");
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub use octofit::models::{Activity, Difficulty, LeaderboardEntry, RecordKind, Team, User, Workout};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{RunConfig, SeedConfig};
    pub use crate::db::{ReferenceReport, SeedError, SeedSummary, Seeder, audit_references};
    pub use crate::generators::{
        ActivityGenerator, LeaderboardGenerator, TeamGenerator, UserGenerator, WorkoutGenerator,
    };
    pub use crate::{Activity, Difficulty, LeaderboardEntry, RecordKind, Team, User, Workout};
    pub use octofit::{Database, MemoryStore, Store};
}
