// LinkDeck services
// Stateless lookups and formatting plus the settings engine.

pub mod category_catalog;
pub mod display_format;
pub mod settings_engine;
