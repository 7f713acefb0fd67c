//! Category Catalog: the one canonical category → icon/color table.

use crate::types::category::{Category, Icon};
use crate::types::link::LinkRecord;

/// Trait defining category lookups used by cards and detail views.
pub trait CategoryCatalogTrait {
    fn icon_for(&self, category: &Category) -> Icon;
    fn color_for(&self, category: &Category) -> &str;
    /// Accent color for a link: its own valid `color`, else the category color.
    fn accent_for(&self, link: &LinkRecord) -> String;
}

/// Category colors.
struct Palette;
impl Palette {
    const BROWSER: &'static str = "#8BC34A";
    const ESSENTIALS: &'static str = "#F46B6C";
    const DEVELOPMENT: &'static str = "#4ECDC5";
    const DESIGN: &'static str = "#F7AA80";
    const PRODUCTIVITY: &'static str = "#34A85A";
    const RESOURCES: &'static str = "#292F37";
    const AI: &'static str = "#9B59B6";
    const PROJECT_MANAGEMENT: &'static str = "#F7B4B4";
    const TERMINAL: &'static str = "#2D3436";
    const UI: &'static str = "#E17055";
    const DATABASE: &'static str = "#0984E3";
    const CLOUD: &'static str = "#74B9FF";
    const DOCUMENTATION: &'static str = "#3498DB";
    const NOTE_TAKING: &'static str = "#FFC107";
    const INSPIRATION: &'static str = "#FDCB6E";
    const VERSION_CONTROL: &'static str = "#3498DB";
    const FALLBACK: &'static str = "#71717A";
}

pub const FALLBACK_ICON: Icon = Icon::Globe;
pub const FALLBACK_COLOR: &str = Palette::FALLBACK;

/// Validates a hex color string (e.g. "#2ea44f" or "#fff").
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Static catalog; every category resolves to exactly one icon and color.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryCatalog;

impl CategoryCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CategoryCatalogTrait for CategoryCatalog {
    fn icon_for(&self, category: &Category) -> Icon {
        match category {
            Category::Browser => Icon::Browsers,
            Category::Essentials => Icon::Star,
            Category::Development => Icon::Code,
            Category::Design => Icon::PaintBrush,
            Category::Productivity => Icon::Lightning,
            Category::Resources => Icon::Archive,
            Category::AI => Icon::Robot,
            Category::ProjectManagement => Icon::Rocket,
            Category::Terminal => Icon::Terminal,
            Category::UI => Icon::Layout,
            Category::Database => Icon::Database,
            Category::Cloud => Icon::Cloud,
            Category::Documentation => Icon::Book,
            Category::NoteTaking => Icon::Pencil,
            Category::Inspiration => Icon::Lightbulb,
            Category::VersionControl => Icon::GitBranch,
            Category::Other(_) => FALLBACK_ICON,
        }
    }

    fn color_for(&self, category: &Category) -> &str {
        match category {
            Category::Browser => Palette::BROWSER,
            Category::Essentials => Palette::ESSENTIALS,
            Category::Development => Palette::DEVELOPMENT,
            Category::Design => Palette::DESIGN,
            Category::Productivity => Palette::PRODUCTIVITY,
            Category::Resources => Palette::RESOURCES,
            Category::AI => Palette::AI,
            Category::ProjectManagement => Palette::PROJECT_MANAGEMENT,
            Category::Terminal => Palette::TERMINAL,
            Category::UI => Palette::UI,
            Category::Database => Palette::DATABASE,
            Category::Cloud => Palette::CLOUD,
            Category::Documentation => Palette::DOCUMENTATION,
            Category::NoteTaking => Palette::NOTE_TAKING,
            Category::Inspiration => Palette::INSPIRATION,
            Category::VersionControl => Palette::VERSION_CONTROL,
            Category::Other(_) => FALLBACK_COLOR,
        }
    }

    fn accent_for(&self, link: &LinkRecord) -> String {
        match link.color.as_deref() {
            Some(color) if is_valid_hex_color(color) => color.to_string(),
            _ => self
                .color_for(&Category::from_label(&link.category))
                .to_string(),
        }
    }
}
