use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::{
    FromRow, Postgres,
    postgres::{PgTypeInfo, PgValueRef},
};
use thiserror::Error;
use time::Date;
use uuid::Uuid;
use validator::Validate;

/// The five kinds of record held by a [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Team,
    User,
    Workout,
    Activity,
    Leaderboard,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::User,
        RecordKind::Team,
        RecordKind::Activity,
        RecordKind::Workout,
        RecordKind::Leaderboard,
    ];

    /// Returns the table (collection) name the kind is stored under.
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Team => "teams",
            RecordKind::User => "users",
            RecordKind::Workout => "workouts",
            RecordKind::Activity => "activities",
            RecordKind::Leaderboard => "leaderboard",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Team => "team",
            RecordKind::User => "user",
            RecordKind::Workout => "workout",
            RecordKind::Activity => "activity",
            RecordKind::Leaderboard => "leaderboard entry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Team {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl Team {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A tracker user. `team_name` is a copy of the team's name, not a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct User {
    pub id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub team_name: String,
}

impl User {
    pub fn new(
        id: Uuid,
        email: impl Into<String>,
        name: impl Into<String>,
        team_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            team_name: team_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown workout difficulty: {0:?}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

// Stored as plain text; bind with `as_str()`.
impl sqlx::Type<Postgres> for Difficulty {
    fn type_info() -> PgTypeInfo {
        <&str as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, Postgres> for Difficulty {
    fn decode(value: PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Workout {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
}

impl Workout {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            difficulty,
        }
    }
}

/// One logged activity. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Activity {
    pub id: Uuid,
    #[validate(email)]
    pub user_email: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub activity_type: String,
    pub duration: i32,
    pub calories: i32,
    pub date: Date,
}

impl Activity {
    pub fn new(
        id: Uuid,
        user_email: impl Into<String>,
        activity_type: impl Into<String>,
        duration: i32,
        calories: i32,
        date: Date,
    ) -> Self {
        Self {
            id,
            user_email: user_email.into(),
            activity_type: activity_type.into(),
            duration,
            calories,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    #[validate(email)]
    pub user_email: String,
    pub score: i32,
}

impl LeaderboardEntry {
    pub fn new(id: Uuid, user_email: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            user_email: user_email.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(ParseDifficultyError("extreme".to_string()))
        );
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.as_str().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_activity_serializes_type_field() {
        let activity = Activity::new(
            Uuid::nil(),
            "tony.stark@avengers.com",
            "flying",
            45,
            320,
            date!(2025 - 08 - 22),
        );

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "flying");
        assert!(json.get("activity_type").is_none());
    }

    #[test]
    fn test_user_validation() {
        let user = User::new(
            Uuid::new_v4(),
            "tony.stark@avengers.com",
            "Tony Stark",
            "Team Marvel",
        );
        assert!(user.validate().is_ok());

        let bad_email = User::new(Uuid::new_v4(), "not-an-email", "Tony Stark", "Team Marvel");
        assert!(bad_email.validate().is_err());

        let long_name = User::new(Uuid::new_v4(), "a@b.com", "x".repeat(101), "Team Marvel");
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_record_kind_tables() {
        let tables: Vec<_> = RecordKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(
            tables,
            vec!["users", "teams", "activities", "workouts", "leaderboard"]
        );
        assert_eq!(RecordKind::Leaderboard.to_string(), "leaderboard entry");
    }
}
