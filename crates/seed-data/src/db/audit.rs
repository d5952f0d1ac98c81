//! Reference audit across record kinds.
//!
//! The store links users to teams by name and activities/leaderboard
//! entries to users by email without enforcing either. The audit finds
//! values that point at nothing; it never rejects or repairs them.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use octofit::Store;

use super::SeedError;

/// A record whose reference field names a missing owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub record_id: Uuid,
    /// The unmatched team name or user email.
    pub missing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceReport {
    /// Users whose `team_name` matches no team.
    pub users_without_team: Vec<DanglingReference>,
    /// Activities whose `user_email` matches no user.
    pub activities_without_user: Vec<DanglingReference>,
    /// Leaderboard entries whose `user_email` matches no user.
    pub leaderboard_without_user: Vec<DanglingReference>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.users_without_team.is_empty()
            && self.activities_without_user.is_empty()
            && self.leaderboard_without_user.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users_without_team.len()
            + self.activities_without_user.len()
            + self.leaderboard_without_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}

pub async fn audit_references(store: &impl Store) -> Result<ReferenceReport, SeedError> {
    let team_names: HashSet<String> = store.teams().await?.into_iter().map(|t| t.name).collect();
    let users = store.users().await?;
    let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();

    let users_without_team = users
        .iter()
        .filter(|u| !team_names.contains(&u.team_name))
        .map(|u| DanglingReference {
            record_id: u.id,
            missing: u.team_name.clone(),
        })
        .collect();

    let activities_without_user = store
        .activities()
        .await?
        .into_iter()
        .filter(|a| !emails.contains(a.user_email.as_str()))
        .map(|a| DanglingReference {
            record_id: a.id,
            missing: a.user_email,
        })
        .collect();

    let leaderboard_without_user = store
        .leaderboard()
        .await?
        .into_iter()
        .filter(|e| !emails.contains(e.user_email.as_str()))
        .map(|e| DanglingReference {
            record_id: e.id,
            missing: e.user_email,
        })
        .collect();

    Ok(ReferenceReport {
        users_without_team,
        activities_without_user,
        leaderboard_without_user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofit::MemoryStore;
    use octofit::models::{LeaderboardEntry, Team, User};

    #[tokio::test]
    async fn test_audit_finds_orphans() {
        let store = MemoryStore::new();
        store.create_team(&Team::new(Uuid::new_v4(), "Team Marvel")).await.unwrap();
        store
            .create_user(&User::new(
                Uuid::new_v4(),
                "tony.stark@avengers.com",
                "Tony Stark",
                "Team Marvel",
            ))
            .await
            .unwrap();
        let stray = User::new(
            Uuid::new_v4(),
            "wade.wilson@xforce.com",
            "Wade Wilson",
            "X-Force",
        );
        store.create_user(&stray).await.unwrap();
        store
            .create_leaderboard_entry(&LeaderboardEntry::new(
                Uuid::new_v4(),
                "logan@xmen.com",
                900,
            ))
            .await
            .unwrap();

        let report = audit_references(&store).await.unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.users_without_team,
            vec![DanglingReference {
                record_id: stray.id,
                missing: "X-Force".to_string(),
            }]
        );
        assert!(report.activities_without_user.is_empty());
        assert_eq!(report.leaderboard_without_user[0].missing, "logan@xmen.com");
    }

    #[tokio::test]
    async fn test_empty_store_is_clean() {
        let report = audit_references(&MemoryStore::new()).await.unwrap();
        assert!(report.is_clean());
    }
}
