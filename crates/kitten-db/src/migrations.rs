//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time. Migrations are an explicit
//! startup step (`KittenDb::migrate`), never a side effect of opening the
//! database. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::KittenDb;
use crate::error::DatabaseError;

/// Initial schema: 2 tables, 2 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl KittenDb {
    /// Run all embedded migrations in sequence.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` naming the failing migration.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        tracing::info!("database migrations applied");
        Ok(())
    }
}
