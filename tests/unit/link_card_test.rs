//! Unit tests for the card presentation contract: skip-render, loading
//! placeholder, favorite star and control interception.

use linkdeck::managers::favorites_manager::{FavoritesStoreTrait, InMemoryFavorites};
use linkdeck::services::category_catalog::{CategoryCatalog, FALLBACK_COLOR};
use linkdeck::types::card::{CardControl, CardIntent, CardLayout, CardView, Navigation};
use linkdeck::types::category::Icon;
use linkdeck::types::link::LinkRecord;
use linkdeck::ui::html;
use linkdeck::ui::link_card::{CardState, LinkCard};
use rstest::rstest;

fn example() -> LinkRecord {
    LinkRecord::new("1", "Example", "https://example.com", "Unknown", "desc")
}

fn card_view(link: Option<&LinkRecord>, loading: bool, store: &dyn FavoritesStoreTrait) -> CardView {
    let catalog = CategoryCatalog::new();
    LinkCard::new(link, &catalog)
        .loading(loading)
        .view(store, &CardState::new())
}

#[test]
fn test_unknown_category_renders_with_fallback_icon_and_color() {
    let store = InMemoryFavorites::new();
    let link = example();

    let CardView::Card(content) = card_view(Some(&link), false, &store) else {
        panic!("expected a rendered card");
    };
    assert_eq!(content.title, "Example");
    assert_eq!(content.icon, Icon::Globe);
    assert_eq!(content.color, FALLBACK_COLOR);
    assert!(!content.starred);
    assert!(content.detail.is_none());

    let markup = html::render_card(&CardView::Card(content), CardLayout::Standalone);
    assert!(markup.contains("Example"));
    assert!(markup.contains(r#"data-icon="globe""#));
}

#[test]
fn test_loading_renders_placeholder_with_or_without_link() {
    let store = InMemoryFavorites::new();
    let link = example();
    assert_eq!(card_view(Some(&link), true, &store), CardView::Placeholder);
    assert_eq!(card_view(None, true, &store), CardView::Placeholder);

    let mut broken = example();
    broken.title.clear();
    assert_eq!(card_view(Some(&broken), true, &store), CardView::Placeholder);
}

#[test]
fn test_absent_link_renders_nothing() {
    let store = InMemoryFavorites::new();
    assert_eq!(card_view(None, false, &store), CardView::Hidden);
}

#[rstest]
#[case("title")]
#[case("url")]
#[case("category")]
#[case("description")]
fn test_missing_required_field_renders_nothing(#[case] field: &str) {
    let store = InMemoryFavorites::new();
    let mut link = example();
    match field {
        "title" => link.title.clear(),
        "url" => link.url.clear(),
        "category" => link.category = "  ".to_string(),
        _ => link.description.clear(),
    }
    assert_eq!(card_view(Some(&link), false, &store), CardView::Hidden);
}

#[test]
fn test_star_reflects_store_membership() {
    let mut store = InMemoryFavorites::new();
    let link = example();
    store.toggle_favorite((&link).into()).unwrap();

    let CardView::Card(content) = card_view(Some(&link), false, &store) else {
        panic!("expected a rendered card");
    };
    assert!(content.starred);

    let markup = html::render_card(&CardView::Card(content), CardLayout::Standalone);
    assert!(markup.contains(r#"data-starred="true""#));
    assert!(markup.contains("icon--fill"));
}

#[test]
fn test_favorite_click_in_wrapped_card_suppresses_navigation() {
    let mut state = CardState::new();
    let link = example();

    let outcome = state.activate(&link, CardControl::FavoriteStar, CardLayout::LinkWrapped);

    assert_eq!(
        outcome.intent,
        Some(CardIntent::ToggleFavorite {
            link_id: "1".to_string()
        })
    );
    assert!(outcome.navigation.is_none());
    assert!(outcome.default_prevented);
    assert!(outcome.propagation_stopped);
    assert!(!state.is_detail_open());
}

#[test]
fn test_favorite_click_leaves_open_detail_open() {
    let mut state = CardState::new();
    let link = example();
    state.activate(&link, CardControl::ViewDetails, CardLayout::Standalone);

    state.activate(&link, CardControl::FavoriteStar, CardLayout::Standalone);
    assert!(state.is_detail_open());
}

#[rstest]
#[case(CardControl::DetailCloseButton)]
#[case(CardControl::DetailBackdrop)]
fn test_detail_opens_on_request_and_closes_on_dismissal(#[case] dismiss: CardControl) {
    let mut state = CardState::new();
    let link = example();

    let opened = state.activate(&link, CardControl::ViewDetails, CardLayout::Standalone);
    assert_eq!(opened.intent, Some(CardIntent::OpenDetail));
    assert!(state.is_detail_open());

    let closed = state.activate(&link, dismiss, CardLayout::Standalone);
    assert_eq!(closed.intent, Some(CardIntent::CloseDetail));
    assert!(!state.is_detail_open());
}

#[test]
fn test_visit_navigates_without_state_change() {
    let mut state = CardState::new();
    let link = example();

    let outcome = state.activate(&link, CardControl::VisitResource, CardLayout::Standalone);
    assert_eq!(
        outcome.navigation,
        Some(Navigation::External {
            url: "https://example.com".to_string()
        })
    );
    assert!(outcome.intent.is_none());
    assert!(!state.is_detail_open());
}

#[test]
fn test_detail_state_is_per_card() {
    let link = example();
    let mut first = CardState::new();
    let second = CardState::new();

    first.activate(&link, CardControl::ViewDetails, CardLayout::Standalone);
    assert!(first.is_detail_open());
    assert!(!second.is_detail_open());
}

#[test]
fn test_rendered_links_do_not_leak_opener() {
    let store = InMemoryFavorites::new();
    let link = example();
    let view = card_view(Some(&link), false, &store);

    for layout in [CardLayout::Standalone, CardLayout::LinkWrapped] {
        let markup = html::render_card(&view, layout);
        assert!(markup.contains(r#"href="https://example.com""#));
        assert_eq!(
            markup.matches("<a ").count(),
            markup.matches(r#"rel="noopener noreferrer""#).count()
        );
        assert!(markup.contains(r#"target="_blank""#));
    }
}

#[test]
fn test_record_text_is_escaped() {
    let store = InMemoryFavorites::new();
    let mut link = example();
    link.title = "<script>alert(1)</script>".to_string();

    let markup = html::render_card(&card_view(Some(&link), false, &store), CardLayout::Standalone);
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
}

#[test]
fn test_script_url_renders_without_a_live_link() {
    let store = InMemoryFavorites::new();
    let mut link = example();
    link.url = "javascript:alert(1)".to_string();
    let view = card_view(Some(&link), false, &store);

    for layout in [CardLayout::Standalone, CardLayout::LinkWrapped] {
        let markup = html::render_card(&view, layout);
        assert!(!markup.contains("javascript:"));
        assert!(!markup.contains("<a "));
    }

    let mut state = CardState::new();
    let outcome = state.activate(&link, CardControl::Body, CardLayout::LinkWrapped);
    assert!(outcome.navigation.is_none());
}
