//! Connection to the favorites database.
//!
//! [`Database`] owns the `rusqlite::Connection` behind [`SqliteFavorites`]
//! and brings the favorites schema up to date on open.
//!
//! [`SqliteFavorites`]: crate::managers::sqlite_favorites::SqliteFavorites

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use super::migrations;
use crate::platform;
use crate::types::errors::DatabaseError;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the favorites database at `path`.
    ///
    /// Missing parent directories are created first.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let db = Self {
            conn: Connection::open(path)?,
        };
        db.migrate()?;
        info!(path = %path.display(), favorites = db.favorites_count()?, "opened favorites database");
        Ok(db)
    }

    /// Opens the database at the platform default, `<data dir>/favorites.db`.
    pub fn open_default() -> Result<Self, DatabaseError> {
        Self::open(platform::default_favorites_db_path())
    }

    /// Session-only database, discarded on drop.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.migrate()?;
        debug!("opened in-memory favorites database");
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        migrations::run_all(&self.conn)?;
        Ok(())
    }

    /// Number of rows in the `favorites` table.
    pub fn favorites_count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
