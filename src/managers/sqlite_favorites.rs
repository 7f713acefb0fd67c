//! SQLite-backed favorites store.
//!
//! Every toggle is written through to the `favorites` table. A `HashMap`
//! mirror answers membership queries, and is only updated after the write
//! succeeds.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::params;
use tracing::{debug, info};

use crate::database::connection::Database;
use crate::managers::favorites_manager::{sort_entries, FavoritesStoreTrait};
use crate::types::errors::FavoritesError;
use crate::types::link::{FavoriteEntry, FavoriteTarget, LinkRecord};

/// Favorites persisted in SQLite.
pub struct SqliteFavorites {
    db: Arc<Database>,
    mirror: HashMap<String, FavoriteEntry>,
}

impl SqliteFavorites {
    /// Opens the store and loads existing favorites into the mirror.
    pub fn new(db: Arc<Database>) -> Result<Self, FavoritesError> {
        let mut store = Self {
            db,
            mirror: HashMap::new(),
        };
        store.load()?;
        info!(count = store.mirror.len(), "loaded persisted favorites");
        Ok(store)
    }

    fn load(&mut self) -> Result<(), FavoritesError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT link_id, record_json, favorited_at FROM favorites")
            .map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })
            .map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;

        for row in rows {
            let (link_id, record_json, favorited_at) =
                row.map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;
            let record = match record_json {
                Some(json) => Some(
                    serde_json::from_str::<LinkRecord>(&json)
                        .map_err(|e| FavoritesError::SerializationError(e.to_string()))?,
                ),
                None => None,
            };
            let favorited_at = DateTime::<Utc>::from_timestamp_millis(favorited_at)
                .unwrap_or_default();
            self.mirror.insert(
                link_id.clone(),
                FavoriteEntry {
                    link_id,
                    record,
                    favorited_at,
                },
            );
        }
        Ok(())
    }
}

impl FavoritesStoreTrait for SqliteFavorites {
    fn is_favorite(&self, id: &str) -> bool {
        self.mirror.contains_key(id)
    }

    fn toggle_favorite(&mut self, target: FavoriteTarget<'_>) -> Result<bool, FavoritesError> {
        let id = target.link_id().ok_or(FavoritesError::MissingId)?;
        let conn = self.db.connection();

        if self.mirror.contains_key(id) {
            conn.execute("DELETE FROM favorites WHERE link_id = ?1", params![id])
                .map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;
            self.mirror.remove(id);
            debug!(link_id = id, "removed persisted favorite");
            return Ok(false);
        }

        let entry = FavoriteEntry::new(id, target.record().cloned());
        let record_json = match &entry.record {
            Some(record) => Some(
                serde_json::to_string(record)
                    .map_err(|e| FavoritesError::SerializationError(e.to_string()))?,
            ),
            None => None,
        };
        conn.execute(
            "INSERT INTO favorites (link_id, record_json, favorited_at) VALUES (?1, ?2, ?3)",
            params![id, record_json, entry.favorited_at.timestamp_millis()],
        )
        .map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;

        self.mirror.insert(id.to_string(), entry);
        debug!(link_id = id, "added persisted favorite");
        Ok(true)
    }

    fn list_favorites(&self) -> Vec<FavoriteEntry> {
        let mut entries: Vec<FavoriteEntry> = self.mirror.values().cloned().collect();
        sort_entries(&mut entries);
        entries
    }

    fn count(&self) -> usize {
        self.mirror.len()
    }

    fn reset(&mut self) -> Result<(), FavoritesError> {
        self.db
            .connection()
            .execute("DELETE FROM favorites", [])
            .map_err(|e| FavoritesError::DatabaseError(e.to_string()))?;
        debug!(cleared = self.mirror.len(), "reset persisted favorites");
        self.mirror.clear();
        Ok(())
    }
}
