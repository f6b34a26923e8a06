//! Embedded schema migrations.

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{DbError, DbResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// ## Summary
/// Applies any pending migrations to the database at `database_url`.
///
/// Migrations run on a blocking thread over a short-lived synchronous
/// connection, which is closed before this returns.
///
/// ## Errors
/// Returns an error if the connection cannot be established or a migration fails.
#[tracing::instrument(skip(database_url))]
pub async fn run_migrations(database_url: &str) -> DbResult<()> {
    let url = database_url.to_string();

    let applied = tokio::task::spawn_blocking(move || -> DbResult<usize> {
        let mut conn = diesel::PgConnection::establish(&url)
            .map_err(|e| DbError::MigrationError(format!("failed to connect: {e}")))?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::MigrationError(e.to_string()))?;
        Ok(versions.len())
    })
    .await
    .map_err(|e| DbError::MigrationError(format!("migration task failed: {e}")))??;

    tracing::info!(applied, "Database migrations up to date");

    Ok(())
}
