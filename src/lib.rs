//! LinkDeck: a link directory rendered as cards with a details view, backed
//! by a favorites store.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
