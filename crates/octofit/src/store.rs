//! The persistence boundary shared by every record kind.
//!
//! A [`Store`] offers the handful of operations the tracker needs:
//! create one record, read all records of a kind, filter by user email,
//! delete a whole kind, and count. Relationships between kinds are by
//! plain string value and are not checked here.

use async_trait::async_trait;

use crate::{
    errors::StoreError,
    models::{Activity, LeaderboardEntry, RecordKind, Team, User, Workout},
};

#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a team. Fails with [`StoreError::Duplicate`] if the name is taken.
    async fn create_team(&self, team: &Team) -> Result<(), StoreError>;

    /// Insert a user. Fails with [`StoreError::Duplicate`] if the email is taken.
    async fn create_user(&self, user: &User) -> Result<(), StoreError>;

    async fn create_workout(&self, workout: &Workout) -> Result<(), StoreError>;

    async fn create_activity(&self, activity: &Activity) -> Result<(), StoreError>;

    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> Result<(), StoreError>;

    async fn teams(&self) -> Result<Vec<Team>, StoreError>;

    async fn users(&self) -> Result<Vec<User>, StoreError>;

    async fn workouts(&self) -> Result<Vec<Workout>, StoreError>;

    async fn activities(&self) -> Result<Vec<Activity>, StoreError>;

    /// All leaderboard entries, highest score first.
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError>;

    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, StoreError>;

    async fn leaderboard_for_user(&self, email: &str)
    -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Delete every record of `kind`, returning how many were removed.
    async fn delete_all(&self, kind: RecordKind) -> Result<u64, StoreError>;

    async fn count(&self, kind: RecordKind) -> Result<u64, StoreError>;
}
