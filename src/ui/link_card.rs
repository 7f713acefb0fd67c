//! Link card: the summary tile for one link.
//!
//! A card is a pure function of its link record, the favorites membership of
//! that record and its own [`CardState`]. It never mutates favorites; a click
//! on the star only produces a `CardIntent::ToggleFavorite` for the owner to
//! apply.

use tracing::debug;

use crate::managers::favorites_manager::{FavoriteQuery, FavoritesStoreTrait};
use crate::services::category_catalog::CategoryCatalogTrait;
use crate::services::display_format;
use crate::types::card::{
    CardContent, CardControl, CardIntent, CardLayout, CardOutcome, CardView, Navigation,
};
use crate::types::category::Category;
use crate::types::link::LinkRecord;
use crate::ui::details_modal::DetailsModal;

/// Transient per-card UI state. Never persisted or shared between cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    detail_open: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    /// Reacts to one activation of `control` on the card for `link`.
    pub fn activate(
        &mut self,
        link: &LinkRecord,
        control: CardControl,
        layout: CardLayout,
    ) -> CardOutcome {
        match control {
            CardControl::FavoriteStar => CardOutcome {
                intent: Some(CardIntent::ToggleFavorite {
                    link_id: link.id.clone(),
                }),
                navigation: None,
                default_prevented: true,
                propagation_stopped: true,
            },
            CardControl::VisitResource => CardOutcome {
                navigation: external(link),
                propagation_stopped: true,
                ..CardOutcome::none()
            },
            CardControl::ViewDetails => {
                self.detail_open = true;
                CardOutcome {
                    intent: Some(CardIntent::OpenDetail),
                    navigation: None,
                    default_prevented: true,
                    propagation_stopped: true,
                }
            }
            CardControl::DetailVisitWebsite if self.detail_open => CardOutcome {
                navigation: external(link),
                propagation_stopped: true,
                ..CardOutcome::none()
            },
            CardControl::DetailCloseButton | CardControl::DetailBackdrop if self.detail_open => {
                self.detail_open = false;
                CardOutcome {
                    intent: Some(CardIntent::CloseDetail),
                    propagation_stopped: true,
                    ..CardOutcome::none()
                }
            }
            CardControl::Body if layout == CardLayout::LinkWrapped => CardOutcome {
                navigation: external(link),
                ..CardOutcome::none()
            },
            // Detail controls are not on screen while the detail view is closed.
            _ => CardOutcome::none(),
        }
    }
}

/// Only `http`/`https` URLs are navigable.
fn external(link: &LinkRecord) -> Option<Navigation> {
    if !display_format::is_web_url(&link.url) {
        debug!(link_id = %link.id, "refusing navigation to non-web url");
        return None;
    }
    Some(Navigation::External {
        url: link.url.clone(),
    })
}

/// Builder for a card's view.
pub struct LinkCard<'a> {
    link: Option<&'a LinkRecord>,
    loading: bool,
    catalog: &'a dyn CategoryCatalogTrait,
    date_format: &'a str,
}

impl<'a> LinkCard<'a> {
    pub fn new(link: Option<&'a LinkRecord>, catalog: &'a dyn CategoryCatalogTrait) -> Self {
        Self {
            link,
            loading: false,
            catalog,
            date_format: "%-m/%-d/%Y",
        }
    }

    /// Renders the placeholder instead of any link content.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn date_format(mut self, pattern: &'a str) -> Self {
        self.date_format = pattern;
        self
    }

    /// Whether `link` has everything a card needs.
    pub fn is_renderable(link: &LinkRecord) -> bool {
        link.missing_display_fields().is_empty()
    }

    pub fn view(&self, favorites: &dyn FavoritesStoreTrait, state: &CardState) -> CardView {
        if self.loading {
            return CardView::Placeholder;
        }

        let Some(link) = self.link else {
            return CardView::Hidden;
        };

        let missing = link.missing_display_fields();
        if !missing.is_empty() {
            debug!(link_id = %link.id, ?missing, "skipping card with missing fields");
            return CardView::Hidden;
        }

        let query = FavoriteQuery::new(favorites, &link.id);
        let category = Category::from_label(&link.category);

        let detail = state
            .is_detail_open()
            .then(|| DetailsModal::new(self.catalog, self.date_format).build(link));

        CardView::Card(CardContent {
            link_id: link.id.clone(),
            title: link.title.clone(),
            category: link.category.clone(),
            description: link.description.clone(),
            url: link.url.clone(),
            icon: self.catalog.icon_for(&category),
            color: self.catalog.accent_for(link),
            starred: query.is_favorite(),
            detail,
        })
    }
}
