// LinkDeck presentation layer
// Cards, the details modal and their HTML rendering.

pub mod details_modal;
pub mod html;
pub mod link_card;
