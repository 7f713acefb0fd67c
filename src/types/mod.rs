// LinkDeck shared type definitions
// Each submodule defines types used across the crate.

pub mod card;
pub mod category;
pub mod errors;
pub mod link;
pub mod settings;
