// LinkDeck state managers
// Managers own the stateful pieces: the link directory and the favorites stores.

pub mod favorites_manager;
pub mod link_directory;
pub mod sqlite_favorites;
