//! Unit tests for loading and querying the link directory.

use linkdeck::managers::link_directory::LinkDirectory;
use linkdeck::types::category::Category;
use linkdeck::types::errors::DirectoryError;
use tempfile::TempDir;

const LINKS: &str = r#"[
    {"id": "1", "title": "Rust Book", "description": "The Rust programming language", "url": "https://doc.rust-lang.org/book", "category": "Documentation", "dateAdded": "2024-01-01"},
    {"id": "2", "title": "Zed", "description": "Fast editor", "url": "https://zed.dev", "category": "Development", "dateAdded": "2024-01-02"},
    {"id": "3", "title": "Docs.rs", "description": "Crate docs", "url": "https://docs.rs", "category": "Documentation", "dateAdded": "2024-01-03"},
    {"title": "Anonymous", "description": "No id here", "url": "https://a.example", "category": "Cloud", "dateAdded": "2024-01-04"}
]"#;

#[test]
fn test_parse_preserves_order_and_indexes_by_id() {
    let directory = LinkDirectory::from_json_str(LINKS).unwrap();
    assert_eq!(directory.len(), 4);

    let titles: Vec<&str> = directory.links().iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust Book", "Zed", "Docs.rs", "Anonymous"]);
    assert_eq!(directory.get("2").unwrap().title, "Zed");
    assert!(directory.get("").is_none());
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let json = r#"[
        {"id": "1", "title": "A"},
        {"id": "1", "title": "B"}
    ]"#;
    assert!(matches!(
        LinkDirectory::from_json_str(json),
        Err(DirectoryError::DuplicateId(id)) if id == "1"
    ));
}

#[test]
fn test_non_array_is_a_parse_error() {
    assert!(matches!(
        LinkDirectory::from_json_str(r#"{"id": "1"}"#),
        Err(DirectoryError::ParseError(_))
    ));
}

#[test]
fn test_by_category_uses_canonical_labels() {
    let directory = LinkDirectory::from_json_str(LINKS).unwrap();
    let docs = directory.by_category(&Category::Documentation);
    assert_eq!(docs.len(), 2);
    assert!(directory.by_category(&Category::Design).is_empty());
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let directory = LinkDirectory::from_json_str(LINKS).unwrap();

    let results = directory.search("RUST");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "1");

    assert_eq!(directory.search("documentation").len(), 2);
    assert_eq!(directory.search("  ").len(), 4);
    assert!(directory.search("nothing matches").is_empty());
}

#[test]
fn test_load_reads_file_and_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");
    std::fs::write(&path, LINKS).unwrap();

    let directory = LinkDirectory::load(&path).unwrap();
    assert_eq!(directory.len(), 4);

    assert!(matches!(
        LinkDirectory::load(dir.path().join("missing.json")),
        Err(DirectoryError::IoError(_))
    ));
}
