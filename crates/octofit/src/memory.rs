//! In-process [`Store`] backed by plain vectors.
//!
//! Applies the same validation and uniqueness rules as [`Database`](crate::database::Database),
//! so seeding logic can be exercised without a running PostgreSQL.

use async_trait::async_trait;
use tokio::sync::Mutex;
use validator::Validate;

use crate::errors::StoreError;
use crate::models::{Activity, LeaderboardEntry, RecordKind, Team, User, Workout};
use crate::store::Store;

#[derive(Debug, Default)]
struct Collections {
    teams: Vec<Team>,
    users: Vec<User>,
    workouts: Vec<Workout>,
    activities: Vec<Activity>,
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_team(&self, team: &Team) -> Result<(), StoreError> {
        team.validate()?;
        let mut inner = self.inner.lock().await;
        if inner.teams.iter().any(|t| t.name == team.name) {
            return Err(StoreError::Duplicate {
                kind: RecordKind::Team,
                key: team.name.clone(),
            });
        }
        inner.teams.push(team.clone());
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<(), StoreError> {
        user.validate()?;
        let mut inner = self.inner.lock().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate {
                kind: RecordKind::User,
                key: user.email.clone(),
            });
        }
        inner.users.push(user.clone());
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout) -> Result<(), StoreError> {
        workout.validate()?;
        self.inner.lock().await.workouts.push(workout.clone());
        Ok(())
    }

    async fn create_activity(&self, activity: &Activity) -> Result<(), StoreError> {
        activity.validate()?;
        self.inner.lock().await.activities.push(activity.clone());
        Ok(())
    }

    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> Result<(), StoreError> {
        entry.validate()?;
        self.inner.lock().await.leaderboard.push(entry.clone());
        Ok(())
    }

    async fn teams(&self) -> Result<Vec<Team>, StoreError> {
        let mut teams = self.inner.lock().await.teams.clone();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        let mut users = self.inner.lock().await.users.clone();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn workouts(&self) -> Result<Vec<Workout>, StoreError> {
        Ok(self.inner.lock().await.workouts.clone())
    }

    async fn activities(&self) -> Result<Vec<Activity>, StoreError> {
        let mut activities = self.inner.lock().await.activities.clone();
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(activities)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let mut entries = self.inner.lock().await.leaderboard.clone();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(entries)
    }

    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, StoreError> {
        let mut activities: Vec<Activity> = self
            .inner
            .lock()
            .await
            .activities
            .iter()
            .filter(|a| a.user_email == email)
            .cloned()
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(activities)
    }

    async fn leaderboard_for_user(
        &self,
        email: &str,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .leaderboard
            .iter()
            .filter(|e| e.user_email == email)
            .cloned()
            .collect())
    }

    async fn delete_all(&self, kind: RecordKind) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        let removed = match kind {
            RecordKind::Team => std::mem::take(&mut inner.teams).len(),
            RecordKind::User => std::mem::take(&mut inner.users).len(),
            RecordKind::Workout => std::mem::take(&mut inner.workouts).len(),
            RecordKind::Activity => std::mem::take(&mut inner.activities).len(),
            RecordKind::Leaderboard => std::mem::take(&mut inner.leaderboard).len(),
        };
        Ok(removed as u64)
    }

    async fn count(&self, kind: RecordKind) -> Result<u64, StoreError> {
        let inner = self.inner.lock().await;
        let count = match kind {
            RecordKind::Team => inner.teams.len(),
            RecordKind::User => inner.users.len(),
            RecordKind::Workout => inner.workouts.len(),
            RecordKind::Activity => inner.activities.len(),
            RecordKind::Leaderboard => inner.leaderboard.len(),
        };
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use time::macros::date;
    use uuid::Uuid;

    fn activity(email: &str, calories: i32) -> Activity {
        Activity::new(
            Uuid::new_v4(),
            email,
            "running",
            30,
            calories,
            date!(2025 - 08 - 20),
        )
    }

    #[tokio::test]
    async fn test_duplicate_team_name_rejected() {
        let store = MemoryStore::new();
        store.create_team(&Team::new(Uuid::new_v4(), "Team Marvel")).await.unwrap();

        let err = store
            .create_team(&Team::new(Uuid::new_v4(), "Team Marvel"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate { kind: RecordKind::Team, ref key } if key == "Team Marvel"
        ));
        assert_eq!(store.count(RecordKind::Team).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_user_email_rejected() {
        let store = MemoryStore::new();
        let tony = User::new(
            Uuid::new_v4(),
            "tony.stark@avengers.com",
            "Tony Stark",
            "Team Marvel",
        );
        store.create_user(&tony).await.unwrap();

        let impostor = User::new(
            Uuid::new_v4(),
            "tony.stark@avengers.com",
            "Not Tony",
            "Team DC",
        );
        let err = store.create_user(&impostor).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { kind: RecordKind::User, .. }));
    }

    #[tokio::test]
    async fn test_invalid_record_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_activity(&activity("nobody", 100))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.count(RecordKind::Activity).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filter_and_delete() {
        let store = MemoryStore::new();
        store
            .create_activity(&activity("tony.stark@avengers.com", 200))
            .await
            .unwrap();
        store
            .create_activity(&activity("tony.stark@avengers.com", 300))
            .await
            .unwrap();
        store
            .create_activity(&activity("clark.kent@dailyplanet.com", 400))
            .await
            .unwrap();
        store
            .create_workout(&Workout::new(
                Uuid::new_v4(),
                "Speed Training",
                "Cardio",
                Difficulty::Medium,
            ))
            .await
            .unwrap();

        let tony = store
            .activities_for_user("tony.stark@avengers.com")
            .await
            .unwrap();
        assert_eq!(tony.len(), 2);
        assert_eq!(tony.iter().map(|a| a.calories).sum::<i32>(), 500);

        assert_eq!(store.delete_all(RecordKind::Activity).await.unwrap(), 3);
        assert_eq!(store.count(RecordKind::Activity).await.unwrap(), 0);
        assert_eq!(store.count(RecordKind::Workout).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_leaderboard_sorted_by_score() {
        let store = MemoryStore::new();
        for (email, score) in [("a@x.com", 10), ("b@x.com", 30), ("c@x.com", 20)] {
            store
                .create_leaderboard_entry(&LeaderboardEntry::new(
                    Uuid::new_v4(),
                    email,
                    score,
                ))
                .await
                .unwrap();
        }

        let scores: Vec<i32> = store
            .leaderboard()
            .await
            .unwrap()
            .iter()
            .map(|e| e.score)
            .collect();
        assert_eq!(scores, vec![30, 20, 10]);
    }
}
