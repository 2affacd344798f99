//! Postgres connection handle and schema migrations.

use std::collections::HashSet;

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// A migration known to the binary, and whether the database has it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Shared handle to the credential store database
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool. The schema is left as it is.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        tracing::debug!("Database connection established");
        Ok(Self { connection })
    }

    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration, returning how many ran.
    pub async fn apply_pending(&self) -> Result<usize, DbErr> {
        let pending = self
            .status()
            .await?
            .into_iter()
            .filter(|m| !m.applied)
            .count();

        if pending > 0 {
            Migrator::up(&self.connection, None).await?;
        }
        tracing::info!(applied = pending, "Schema up to date");
        Ok(pending)
    }

    /// Revert the most recent `steps` migrations.
    pub async fn roll_back(&self, steps: u32) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(steps)).await
    }

    /// Drop all tables and rebuild the schema from scratch.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    pub async fn status(&self) -> Result<Vec<MigrationState>, DbErr> {
        // The bookkeeping table is absent before the first run
        let applied: HashSet<String> = match seaql_migrations::Entity::find()
            .all(&self.connection)
            .await
        {
            Ok(rows) => rows.into_iter().map(|row| row.version).collect(),
            Err(e) => {
                tracing::debug!(error = %e, "No migration history found");
                HashSet::new()
            }
        };

        Ok(Migrator::migrations()
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: applied.contains(m.name()),
            })
            .collect())
    }
}
