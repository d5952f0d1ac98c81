use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::debug;
use validator::Validate;

use crate::errors::StoreError;
use crate::models::{Activity, LeaderboardEntry, RecordKind, Team, User, Workout};
use crate::store::Store;

/// Connects to PostgreSQL with a bounded pool.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for Database {
    async fn create_team(&self, team: &Team) -> Result<(), StoreError> {
        team.validate()?;
        sqlx::query("INSERT INTO teams (id, name) VALUES ($1, $2)")
            .bind(team.id)
            .bind(&team.name)
            .execute(&self.pool)
            .await
            .map_err(StoreError::on_insert(RecordKind::Team, &team.name))?;

        debug!("Inserted team {}", team.name);
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<(), StoreError> {
        user.validate()?;
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, team_name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.team_name)
        .execute(&self.pool)
        .await
        .map_err(StoreError::on_insert(RecordKind::User, &user.email))?;

        debug!("Inserted user {}", user.email);
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout) -> Result<(), StoreError> {
        workout.validate()?;
        sqlx::query(
            r#"
            INSERT INTO workouts (id, name, description, difficulty)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.difficulty.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_activity(&self, activity: &Activity) -> Result<(), StoreError> {
        activity.validate()?;
        sqlx::query(
            r#"
            INSERT INTO activities (id, user_email, "type", duration, calories, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(activity.id)
        .bind(&activity.user_email)
        .bind(&activity.activity_type)
        .bind(activity.duration)
        .bind(activity.calories)
        .bind(activity.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_leaderboard_entry(&self, entry: &LeaderboardEntry) -> Result<(), StoreError> {
        entry.validate()?;
        sqlx::query("INSERT INTO leaderboard (id, user_email, score) VALUES ($1, $2, $3)")
            .bind(entry.id)
            .bind(&entry.user_email)
            .bind(entry.score)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn teams(&self) -> Result<Vec<Team>, StoreError> {
        let teams = sqlx::query_as("SELECT id, name FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as("SELECT id, email, name, team_name FROM users ORDER BY email")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn workouts(&self) -> Result<Vec<Workout>, StoreError> {
        let workouts = sqlx::query_as("SELECT id, name, description, difficulty FROM workouts")
            .fetch_all(&self.pool)
            .await?;
        Ok(workouts)
    }

    async fn activities(&self) -> Result<Vec<Activity>, StoreError> {
        let activities = sqlx::query_as(
            r#"
            SELECT id, user_email, "type", duration, calories, date
            FROM activities
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries =
            sqlx::query_as("SELECT id, user_email, score FROM leaderboard ORDER BY score DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(entries)
    }

    async fn activities_for_user(&self, email: &str) -> Result<Vec<Activity>, StoreError> {
        let activities = sqlx::query_as(
            r#"
            SELECT id, user_email, "type", duration, calories, date
            FROM activities
            WHERE user_email = $1
            ORDER BY date DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn leaderboard_for_user(
        &self,
        email: &str,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries =
            sqlx::query_as("SELECT id, user_email, score FROM leaderboard WHERE user_email = $1")
                .bind(email)
                .fetch_all(&self.pool)
                .await?;
        Ok(entries)
    }

    async fn delete_all(&self, kind: RecordKind) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {}", kind.table());
        let result = sqlx::query(&sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn count(&self, kind: RecordKind) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        u64::try_from(count)
            .map_err(|_| StoreError::InvalidValue(format!("negative {kind} count: {count}")))
    }
}
