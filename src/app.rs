//! App Core for LinkDeck.
//!
//! Holds the link directory, the injected favorites store and the per-card UI
//! state, and routes card activations to them.

use std::sync::Arc;

use tracing::{debug, info};

use crate::database::connection::Database;
use crate::managers::favorites_manager::{FavoritesStoreTrait, InMemoryFavorites};
use crate::managers::link_directory::LinkDirectory;
use crate::managers::sqlite_favorites::SqliteFavorites;
use crate::services::category_catalog::CategoryCatalog;
use crate::types::card::{CardControl, CardIntent, CardLayout, CardOutcome, CardView};
use crate::types::errors::{AppError, FavoritesError};
use crate::types::link::FavoriteTarget;
use crate::types::settings::{AppSettings, FavoritesBackend};
use crate::ui::html;
use crate::ui::link_card::{CardState, LinkCard};

/// Central application struct.
pub struct App {
    directory: LinkDirectory,
    favorites: Box<dyn FavoritesStoreTrait>,
    backend: FavoritesBackend,
    catalog: CategoryCatalog,
    date_format: String,
    cards: Vec<CardState>,
}

impl App {
    /// Creates the app with the favorites backend named in `settings`.
    pub fn new(
        settings: &AppSettings,
        directory: LinkDirectory,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let favorites: Box<dyn FavoritesStoreTrait> = match settings.favorites.backend {
            FavoritesBackend::Memory => Box::new(InMemoryFavorites::new()),
            FavoritesBackend::Sqlite => {
                let db = match settings.favorites.database_path.as_deref() {
                    Some(path) => Database::open(path)?,
                    None => Database::open_default()?,
                };
                info!("using persistent favorites");
                Box::new(SqliteFavorites::new(Arc::new(db))?)
            }
        };

        Ok(Self::with_store(directory, favorites, settings))
    }

    /// Creates the app around an already-built favorites store.
    pub fn with_store(
        directory: LinkDirectory,
        favorites: Box<dyn FavoritesStoreTrait>,
        settings: &AppSettings,
    ) -> Self {
        let cards = vec![CardState::new(); directory.len()];
        Self {
            directory,
            favorites,
            backend: settings.favorites.backend,
            catalog: CategoryCatalog::new(),
            date_format: settings.general.date_format.clone(),
            cards,
        }
    }

    pub fn directory(&self) -> &LinkDirectory {
        &self.directory
    }

    pub fn favorites(&self) -> &dyn FavoritesStoreTrait {
        self.favorites.as_ref()
    }

    pub fn card_state(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    /// Directory positions whose cards render.
    pub fn renderable_indices(&self) -> Vec<usize> {
        self.directory
            .links()
            .iter()
            .enumerate()
            .filter(|(_, link)| LinkCard::is_renderable(link))
            .map(|(index, _)| index)
            .collect()
    }

    fn card(&self, index: usize) -> LinkCard<'_> {
        LinkCard::new(self.directory.links().get(index), &self.catalog)
            .date_format(&self.date_format)
    }

    /// Routes one control activation on the card at `index`.
    ///
    /// Only `ToggleFavorite` touches the favorites store. Cards that do not
    /// render ignore every activation.
    pub fn activate(
        &mut self,
        index: usize,
        control: CardControl,
        layout: CardLayout,
    ) -> Result<CardOutcome, AppError> {
        let link = self
            .directory
            .links()
            .get(index)
            .ok_or(AppError::InvalidCardIndex(index))?;
        if !LinkCard::is_renderable(link) {
            debug!(index, "ignoring activation on hidden card");
            return Ok(CardOutcome::none());
        }

        let outcome = self.cards[index].activate(link, control, layout);

        if let Some(CardIntent::ToggleFavorite { .. }) = &outcome.intent {
            let starred = self.favorites.toggle_favorite(FavoriteTarget::Record(link))?;
            debug!(link_id = %link.id, starred, "toggled favorite");
        }
        Ok(outcome)
    }

    /// View of the card at `index`.
    pub fn view(&self, index: usize) -> Result<CardView, AppError> {
        let state = self.cards.get(index).ok_or(AppError::InvalidCardIndex(index))?;
        Ok(self.card(index).view(self.favorites.as_ref(), state))
    }

    /// All visible cards in directory order.
    pub fn render_page(&self, layout: CardLayout) -> String {
        (0..self.directory.len())
            .map(|index| {
                let view = self.card(index).view(self.favorites.as_ref(), &self.cards[index]);
                html::render_card(&view, layout)
            })
            .filter(|markup| !markup.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Placeholder cards shown while links are loading.
    pub fn render_loading(&self, count: usize) -> String {
        let state = CardState::new();
        (0..count)
            .map(|_| {
                let view = LinkCard::new(None, &self.catalog)
                    .loading(true)
                    .view(self.favorites.as_ref(), &state);
                html::render_card(&view, CardLayout::Standalone)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cards for every favorite, oldest first. Favorites toggled by bare id
    /// are resolved through the directory; unresolvable ones are skipped.
    pub fn render_favorites(&self) -> String {
        let state = CardState::new();
        let entries = self.favorites.list_favorites();
        entries
            .iter()
            .filter_map(|entry| {
                entry
                    .record
                    .as_ref()
                    .or_else(|| self.directory.get(&entry.link_id))
            })
            .map(|link| {
                let view = LinkCard::new(Some(link), &self.catalog)
                    .date_format(&self.date_format)
                    .view(self.favorites.as_ref(), &state);
                html::render_card(&view, CardLayout::Standalone)
            })
            .filter(|markup| !markup.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Session teardown: closes every detail view and clears in-memory favorites.
    ///
    /// SQLite favorites survive shutdown.
    pub fn shutdown(&mut self) -> Result<(), FavoritesError> {
        self.cards.iter_mut().for_each(|state| *state = CardState::new());
        if self.backend == FavoritesBackend::Memory {
            self.favorites.reset()?;
        }
        info!("shutdown complete");
        Ok(())
    }
}
