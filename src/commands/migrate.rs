//! Migrate command - manual control over the schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.apply_pending().await?;
        }
        MigrateAction::Down { steps } => {
            tracing::info!(steps, "Rolling back migrations");
            db.roll_back(steps).await?;
        }
        MigrateAction::Status => {
            for migration in db.status().await? {
                let state = if migration.applied { "applied" } else { "pending" };
                println!("{:<48} {}", migration.name, state);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-applying migrations");
            db.reset().await?;
        }
    }

    Ok(())
}
