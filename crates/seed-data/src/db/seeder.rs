//! Database seeding utilities.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use octofit::{
    Store, StoreError,
    models::{Activity, LeaderboardEntry, RecordKind, Team, User, Workout},
};

use crate::config::SeedConfig;
use crate::generators::{
    ActivityGenerator, LeaderboardGenerator, ROSTERS, TeamGenerator, TeamRoster, UserGenerator,
    WorkoutGenerator,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Invalid seed configuration: {0}")]
    InvalidConfig(String),
}

/// Record counts read back from the store after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub teams: u64,
    pub users: u64,
    pub activities: u64,
    pub workouts: u64,
    pub leaderboard_entries: u64,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully populated database with:")?;
        writeln!(f, "- {} teams", self.teams)?;
        writeln!(f, "- {} users", self.users)?;
        writeln!(f, "- {} activities", self.activities)?;
        writeln!(f, "- {} workouts", self.workouts)?;
        write!(f, "- {} leaderboard entries", self.leaderboard_entries)
    }
}

/// Wipes a [`Store`] and repopulates it with superhero test data.
///
/// Not safe to run alongside any other writer: deletes and inserts are
/// issued one by one with no transaction around them.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
    rosters: &'static [TeamRoster],
    today: Date,
}

impl<S: Store> Seeder<S> {
    /// Creates a seeder with default ranges, the built-in rosters, and today's UTC date.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SeedConfig::default(),
            rosters: ROSTERS,
            today: OffsetDateTime::now_utc().date(),
        }
    }

    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rosters(mut self, rosters: &'static [TeamRoster]) -> Self {
        self.rosters = rosters;
        self
    }

    /// Overrides the date activities are dated back from.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Deletes every record of every kind, then inserts teams, users,
    /// workouts, activities, and leaderboard entries in that order.
    pub async fn populate(&self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        self.config.validate()?;
        info!("Starting database population...");

        self.clear_all().await?;

        let teams = TeamGenerator::new(self.rosters).generate(rng);
        self.seed_teams(&teams).await?;

        let users = UserGenerator::new(self.rosters).generate(rng);
        self.seed_users(&users).await?;

        let workouts = WorkoutGenerator::new().generate(rng);
        self.seed_workouts(&workouts).await?;

        let activity_gen = ActivityGenerator::new(&self.config);
        let activities: Vec<Activity> = users
            .iter()
            .flat_map(|user| activity_gen.generate_for_user(&user.email, self.today, rng))
            .collect();
        self.seed_activities(&activities).await?;

        self.seed_leaderboard(&users, rng).await?;

        let summary = self.summary().await?;
        info!(
            teams = summary.teams,
            users = summary.users,
            activities = summary.activities,
            workouts = summary.workouts,
            leaderboard_entries = summary.leaderboard_entries,
            "Population complete"
        );
        Ok(summary)
    }

    /// Clears all records of every kind.
    ///
    /// **WARNING**: This deletes all data from the store. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing existing data...");

        for kind in RecordKind::ALL {
            let removed = self.store.delete_all(kind).await?;
            debug!("Deleted {} {} records", removed, kind.table());
        }

        info!("All data cleared");
        Ok(())
    }

    pub async fn seed_teams(&self, teams: &[Team]) -> Result<(), SeedError> {
        info!("Seeding {} teams...", teams.len());

        for team in teams {
            self.store.create_team(team).await?;
        }

        info!("Seeded {} teams", teams.len());
        Ok(())
    }

    pub async fn seed_users(&self, users: &[User]) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        for user in users {
            self.store.create_user(user).await?;
        }

        info!("Seeded {} users", users.len());
        Ok(())
    }

    pub async fn seed_workouts(&self, workouts: &[Workout]) -> Result<(), SeedError> {
        info!("Seeding {} workouts...", workouts.len());

        for workout in workouts {
            self.store.create_workout(workout).await?;
        }

        info!("Seeded {} workouts", workouts.len());
        Ok(())
    }

    pub async fn seed_activities(&self, activities: &[Activity]) -> Result<(), SeedError> {
        info!("Seeding {} activities...", activities.len());

        for activity in activities {
            self.store.create_activity(activity).await?;
        }

        info!("Seeded {} activities", activities.len());
        Ok(())
    }

    /// Scores each user from the activities currently stored for them.
    pub async fn seed_leaderboard(
        &self,
        users: &[User],
        rng: &mut impl Rng,
    ) -> Result<Vec<LeaderboardEntry>, SeedError> {
        info!("Seeding leaderboard for {} users...", users.len());

        let leaderboard_gen = LeaderboardGenerator::new(&self.config);
        let mut entries = Vec::with_capacity(users.len());

        for user in users {
            let activities = self.store.activities_for_user(&user.email).await?;
            let entry = leaderboard_gen.entry_for(&user.email, &activities, rng);
            debug!(
                "{}: {} activities, score {}",
                user.email,
                activities.len(),
                entry.score
            );
            self.store.create_leaderboard_entry(&entry).await?;
            entries.push(entry);
        }

        info!("Seeded {} leaderboard entries", entries.len());
        Ok(entries)
    }

    pub async fn summary(&self) -> Result<SeedSummary, SeedError> {
        Ok(SeedSummary {
            teams: self.store.count(RecordKind::Team).await?,
            users: self.store.count(RecordKind::User).await?,
            activities: self.store.count(RecordKind::Activity).await?,
            workouts: self.store.count(RecordKind::Workout).await?,
            leaderboard_entries: self.store.count(RecordKind::Leaderboard).await?,
        })
    }
}
