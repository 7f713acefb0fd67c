//! Favorites store for LinkDeck.
//!
//! Tracks which links are favorited. `FavoritesStoreTrait` is the only way to
//! mutate membership; presentation code reads it through a [`FavoriteQuery`]
//! bound to a single link id.

use std::collections::HashMap;

use tracing::debug;

use crate::types::errors::FavoritesError;
use crate::types::link::{FavoriteEntry, FavoriteTarget};

/// Trait defining favorites store operations.
pub trait FavoritesStoreTrait {
    /// Current membership of `id`. Constant-time, no side effects.
    fn is_favorite(&self, id: &str) -> bool;
    /// Flips membership of the target's id and returns the new state.
    ///
    /// A target without an id is rejected with `FavoritesError::MissingId`
    /// and the set is left unchanged.
    fn toggle_favorite(&mut self, target: FavoriteTarget<'_>) -> Result<bool, FavoritesError>;
    /// All favorites, oldest first.
    fn list_favorites(&self) -> Vec<FavoriteEntry>;
    fn count(&self) -> usize;
    /// Clears every favorite.
    fn reset(&mut self) -> Result<(), FavoritesError>;
}

/// Read-only membership query bound to one link.
#[derive(Clone, Copy)]
pub struct FavoriteQuery<'a> {
    store: &'a dyn FavoritesStoreTrait,
    link_id: &'a str,
}

impl<'a> FavoriteQuery<'a> {
    pub fn new(store: &'a dyn FavoritesStoreTrait, link_id: &'a str) -> Self {
        Self { store, link_id }
    }

    pub fn link_id(&self) -> &str {
        self.link_id
    }

    /// An empty id is never a member.
    pub fn is_favorite(&self) -> bool {
        !self.link_id.trim().is_empty() && self.store.is_favorite(self.link_id)
    }
}

/// Orders entries by the time they were favorited, then by id.
pub(crate) fn sort_entries(entries: &mut [FavoriteEntry]) {
    entries.sort_by(|a, b| {
        a.favorited_at
            .cmp(&b.favorited_at)
            .then_with(|| a.link_id.cmp(&b.link_id))
    });
}

/// Session-scoped favorites kept in memory.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    entries: HashMap<String, FavoriteEntry>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStoreTrait for InMemoryFavorites {
    fn is_favorite(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn toggle_favorite(&mut self, target: FavoriteTarget<'_>) -> Result<bool, FavoritesError> {
        let id = target.link_id().ok_or(FavoritesError::MissingId)?;

        if self.entries.remove(id).is_some() {
            debug!(link_id = id, "removed favorite");
            return Ok(false);
        }

        let entry = FavoriteEntry::new(id, target.record().cloned());
        self.entries.insert(id.to_string(), entry);
        debug!(link_id = id, "added favorite");
        Ok(true)
    }

    fn list_favorites(&self) -> Vec<FavoriteEntry> {
        let mut entries: Vec<FavoriteEntry> = self.entries.values().cloned().collect();
        sort_entries(&mut entries);
        entries
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn reset(&mut self) -> Result<(), FavoritesError> {
        debug!(cleared = self.entries.len(), "reset favorites");
        self.entries.clear();
        Ok(())
    }
}
