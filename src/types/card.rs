use serde::{Deserialize, Serialize};

use super::category::Icon;

/// How a card sits in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardLayout {
    /// Only the controls are interactive.
    #[default]
    Standalone,
    /// The whole card is wrapped in an anchor to the link's URL.
    LinkWrapped,
}

/// The interactive regions of a card and its detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    /// Anywhere on the card outside the controls.
    Body,
    VisitResource,
    ViewDetails,
    FavoriteStar,
    DetailVisitWebsite,
    DetailCloseButton,
    DetailBackdrop,
}

/// Requests a card hands upward. Only `ToggleFavorite` reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    ToggleFavorite { link_id: String },
    OpenDetail,
    CloseDetail,
}

/// Outbound browser navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Opens `url` in a new browsing context without referrer or opener.
    External { url: String },
}

/// The result of activating one control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardOutcome {
    pub intent: Option<CardIntent>,
    pub navigation: Option<Navigation>,
    /// The control cancelled the click's default action.
    pub default_prevented: bool,
    /// The click did not bubble to enclosing regions.
    pub propagation_stopped: bool,
}

impl CardOutcome {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Content of a rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub link_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub icon: Icon,
    pub color: String,
    pub starred: bool,
    pub detail: Option<DetailView>,
}

/// What a card renders to.
#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Hidden,
    Placeholder,
    Card(CardContent),
}

/// The expanded view of a single link.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub category: String,
    pub description: String,
    pub icon: Icon,
    pub color: String,
    pub use_case: Option<String>,
    pub comments: Option<String>,
    pub added_on: String,
    pub website: String,
    pub url: String,
}
