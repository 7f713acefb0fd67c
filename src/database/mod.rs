//! LinkDeck database layer.
//!
//! SQLite connection and schema migrations for the persistent favorites
//! backend.
//!
//! ```no_run
//! use linkdeck::database::Database;
//!
//! // Creates `state/` if needed.
//! let db = Database::open("state/favorites.db").expect("failed to open database");
//! assert_eq!(db.favorites_count().expect("count"), 0);
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
