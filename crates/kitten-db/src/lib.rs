//! # kitten-db
//!
//! libSQL storage for Kitten Weights.
//!
//! Holds the two relational tables (`kittens`, `weight_measurements`), the
//! explicit migration step, the record access layer (`repos`), partial-update
//! builders (`updates`) and the sample-data seeder (`seed`).
//!
//! Every access-layer method maps to a single SQL statement; there are no
//! multi-statement transactions. Referential integrity between measurements
//! and kittens is enforced by the foreign key (`ON DELETE CASCADE`).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Owned handle to the kitten database.
///
/// Constructed once at process start; [`KittenDb::migrate`] must be called
/// before the first query against a fresh file.
pub struct KittenDb {
    db: libsql::Database,
    conn: libsql::Connection,
}

impl KittenDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign keys on the connection so cascade deletes apply.
    /// Does not run migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Query(format!("PRAGMA foreign_keys: {e}")))?;

        tracing::debug!(path, "opened database");
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Release the connection and the database handle.
    pub fn close(self) {
        let Self { db, conn } = self;
        drop(conn);
        drop(db);
        tracing::debug!("closed database");
    }
}
