//! Wipes the octofit database and repopulates it with superhero test data.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin populate
//! ```
//!
//! Set `OCTOFIT_SEED` for a reproducible run.

use octofit::Database;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::config::RunConfig;
use seed_data::db::{Seeder, audit_references};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunConfig::from_env()?;

    let pool = octofit::database::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("Connected to database");

    octofit::database::migrate(&pool).await?;

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("Using RNG seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let seeder = Seeder::new(Database::new(pool)).with_config(config.seed_config);
    let summary = seeder.populate(&mut rng).await?;

    let report = audit_references(seeder.store()).await?;
    for dangling in &report.users_without_team {
        warn!("User {} references missing team {:?}", dangling.record_id, dangling.missing);
    }
    for dangling in &report.activities_without_user {
        warn!("Activity {} references missing user {}", dangling.record_id, dangling.missing);
    }
    for dangling in &report.leaderboard_without_user {
        warn!(
            "Leaderboard entry {} references missing user {}",
            dangling.record_id, dangling.missing
        );
    }

    println!("{summary}");

    Ok(())
}
