//! LinkDeck console demo.
//!
//! Loads settings and the link directory, then walks through the card,
//! details and favorites flows, printing the rendered HTML.
//!
//! Usage: `linkdeck [links.json]`

use linkdeck::app::App;
use linkdeck::logging;
use linkdeck::managers::link_directory::LinkDirectory;
use linkdeck::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkdeck::types::card::{CardControl, CardLayout};

const DEMO_LINKS: &str = include_str!("../demos/links.json");

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn main() {
    let mut settings_engine = SettingsEngine::new(None);
    let settings = match settings_engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("settings unavailable, using defaults: {}", e);
            Default::default()
        }
    };
    logging::init_tracing(&settings.logging);

    let links_path = std::env::args()
        .nth(1)
        .or_else(|| settings.general.links_path.clone());
    let directory = match &links_path {
        Some(path) => LinkDirectory::load(path),
        None => LinkDirectory::from_json_str(DEMO_LINKS),
    };
    let directory = match directory {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("failed to load links: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = match App::new(&settings, directory) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to start: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("  LinkDeck v{}", env!("CARGO_PKG_VERSION"));
    println!();

    section("Loading");
    println!("{}", app.render_loading(2));

    section("Directory");
    println!("{}", app.render_page(CardLayout::Standalone));

    if let Err(e) = demo_interactions(&mut app) {
        eprintln!("interaction failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = app.shutdown() {
        eprintln!("shutdown failed: {}", e);
        std::process::exit(1);
    }
}

fn demo_interactions(app: &mut App) -> Result<(), linkdeck::types::errors::AppError> {
    let renderable = app.renderable_indices();
    let Some(&first) = renderable.first() else {
        println!("  no renderable links");
        return Ok(());
    };
    let detail = renderable.get(1).copied().unwrap_or(first);

    section("Favorite the first card (link-wrapped)");
    let outcome = app.activate(first, CardControl::FavoriteStar, CardLayout::LinkWrapped)?;
    println!(
        "  navigation: {:?}, default prevented: {}",
        outcome.navigation, outcome.default_prevented
    );
    println!("  favorites: {}", app.favorites().count());

    section("Open details for another card");
    app.activate(detail, CardControl::ViewDetails, CardLayout::Standalone)?;
    println!(
        "{}",
        linkdeck::ui::html::render_card(&app.view(detail)?, CardLayout::Standalone)
    );
    app.activate(detail, CardControl::DetailBackdrop, CardLayout::Standalone)?;

    section("Favorites");
    println!("{}", app.render_favorites());
    Ok(())
}
