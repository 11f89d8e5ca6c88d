//! Service handle exposing the record access layer.
//!
//! `KittenService` owns the `KittenDb`. All repo methods are implemented as
//! `impl KittenService` blocks under `repos/` and `seed.rs`. The binary builds
//! one service at startup and shares it with the HTTP handlers behind an `Arc`.

use crate::KittenDb;
use crate::error::DatabaseError;

pub struct KittenService {
    db: KittenDb,
}

impl KittenService {
    /// Open a local database without migrating it.
    ///
    /// # Arguments
    ///
    /// * `db_path`: path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = KittenDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &KittenDb {
        &self.db
    }

    /// Apply the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if a migration fails.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.db.migrate().await
    }

    /// Shut the service down, closing the database.
    pub fn close(self) {
        self.db.close();
    }
}
