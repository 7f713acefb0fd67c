//! Unit tests for the favorites stores.
//!
//! Every behavioral test runs against both the in-memory and the SQLite
//! backend through `FavoritesStoreTrait`.

use std::sync::Arc;

use linkdeck::database::Database;
use linkdeck::managers::favorites_manager::{
    FavoriteQuery, FavoritesStoreTrait, InMemoryFavorites,
};
use linkdeck::managers::sqlite_favorites::SqliteFavorites;
use linkdeck::types::errors::FavoritesError;
use linkdeck::types::link::{FavoriteTarget, LinkRecord};
use rstest::rstest;
use tempfile::TempDir;

#[derive(Debug, Clone, Copy)]
enum Backend {
    Memory,
    Sqlite,
}

fn store(backend: Backend) -> Box<dyn FavoritesStoreTrait> {
    match backend {
        Backend::Memory => Box::new(InMemoryFavorites::new()),
        Backend::Sqlite => {
            let db = Arc::new(Database::open_in_memory().expect("in-memory database"));
            Box::new(SqliteFavorites::new(db).expect("sqlite favorites"))
        }
    }
}

fn link(id: &str) -> LinkRecord {
    LinkRecord::new(id, "Title", "https://example.com", "AI", "desc")
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_starts_empty(#[case] backend: Backend) {
    let store = store(backend);
    assert_eq!(store.count(), 0);
    assert!(!store.is_favorite("1"));
    assert!(store.list_favorites().is_empty());
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_toggle_flips_membership_and_reports_it(#[case] backend: Backend) {
    let mut store = store(backend);
    let l = link("1");

    assert!(store.toggle_favorite((&l).into()).unwrap());
    assert!(store.is_favorite("1"));
    assert!(!store.toggle_favorite((&l).into()).unwrap());
    assert!(!store.is_favorite("1"));
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_record_and_bare_id_share_identity(#[case] backend: Backend) {
    let mut store = store(backend);
    let l = link("42");

    store.toggle_favorite(FavoriteTarget::Record(&l)).unwrap();
    assert!(store.is_favorite("42"));
    store.toggle_favorite(FavoriteTarget::Id("42")).unwrap();
    assert!(!store.is_favorite("42"));
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_missing_id_is_rejected(#[case] backend: Backend) {
    let mut store = store(backend);
    let mut anonymous = link("");
    anonymous.title = "No id".to_string();

    assert!(matches!(
        store.toggle_favorite((&anonymous).into()),
        Err(FavoritesError::MissingId)
    ));
    assert!(matches!(
        store.toggle_favorite(FavoriteTarget::Id("   ")),
        Err(FavoritesError::MissingId)
    ));
    assert_eq!(store.count(), 0);
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_listing_keeps_full_records(#[case] backend: Backend) {
    let mut store = store(backend);
    let a = link("a");
    store.toggle_favorite((&a).into()).unwrap();
    store.toggle_favorite(FavoriteTarget::Id("b")).unwrap();

    let entries = store.list_favorites();
    assert_eq!(entries.len(), 2);
    let a_entry = entries.iter().find(|e| e.link_id == "a").unwrap();
    assert_eq!(a_entry.record.as_ref(), Some(&a));
    let b_entry = entries.iter().find(|e| e.link_id == "b").unwrap();
    assert!(b_entry.record.is_none());
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Sqlite)]
fn test_reset_clears_everything(#[case] backend: Backend) {
    let mut store = store(backend);
    for id in ["1", "2", "3"] {
        store.toggle_favorite(FavoriteTarget::Id(id)).unwrap();
    }
    assert_eq!(store.count(), 3);

    store.reset().unwrap();
    assert_eq!(store.count(), 0);
    assert!(!store.is_favorite("2"));
}

#[test]
fn test_query_sees_mutation_immediately() {
    let mut store = InMemoryFavorites::new();
    assert!(!FavoriteQuery::new(&store, "1").is_favorite());
    store.toggle_favorite(FavoriteTarget::Id("1")).unwrap();
    assert!(FavoriteQuery::new(&store, "1").is_favorite());
}

#[test]
fn test_sqlite_favorites_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.db");
    let l = link("keep");

    {
        let db = Arc::new(Database::open(&path).unwrap());
        let mut store = SqliteFavorites::new(db).unwrap();
        store.toggle_favorite((&l).into()).unwrap();
        store.toggle_favorite(FavoriteTarget::Id("drop")).unwrap();
        store.toggle_favorite(FavoriteTarget::Id("drop")).unwrap();
    }

    let db = Arc::new(Database::open(&path).unwrap());
    let store = SqliteFavorites::new(db).unwrap();
    assert!(store.is_favorite("keep"));
    assert!(!store.is_favorite("drop"));
    assert_eq!(store.list_favorites()[0].record.as_ref(), Some(&l));
}

/// SQLite store whose `favorites` table is dropped after `seed` is favorited.
fn broken_sqlite_store(seed: &str) -> SqliteFavorites {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut store = SqliteFavorites::new(Arc::clone(&db)).unwrap();
    store.toggle_favorite(FavoriteTarget::Id(seed)).unwrap();
    db.connection().execute_batch("DROP TABLE favorites").unwrap();
    store
}

#[test]
fn test_sqlite_failed_add_leaves_membership_unchanged() {
    let mut store = broken_sqlite_store("kept");
    let l = link("new");

    assert!(matches!(
        store.toggle_favorite((&l).into()),
        Err(FavoritesError::DatabaseError(_))
    ));
    assert!(!store.is_favorite("new"));
    assert!(store.is_favorite("kept"));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_sqlite_failed_remove_leaves_membership_unchanged() {
    let mut store = broken_sqlite_store("kept");

    assert!(matches!(
        store.toggle_favorite(FavoriteTarget::Id("kept")),
        Err(FavoritesError::DatabaseError(_))
    ));
    assert!(store.is_favorite("kept"));
    assert_eq!(store.count(), 1);
    assert_eq!(store.list_favorites()[0].link_id, "kept");
}

#[test]
fn test_sqlite_failed_reset_keeps_favorites() {
    let mut store = broken_sqlite_store("kept");

    assert!(matches!(store.reset(), Err(FavoritesError::DatabaseError(_))));
    assert!(store.is_favorite("kept"));
}
