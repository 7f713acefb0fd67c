use serde::{Deserialize, Serialize};

/// The canonical category taxonomy. Labels outside it are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Browser,
    Essentials,
    Development,
    Design,
    Productivity,
    Resources,
    AI,
    ProjectManagement,
    Terminal,
    UI,
    Database,
    Cloud,
    Documentation,
    NoteTaking,
    Inspiration,
    VersionControl,
    Other(String),
}

impl Category {
    /// Every known category, in display order.
    pub const KNOWN: [Category; 16] = [
        Category::Browser,
        Category::Essentials,
        Category::Development,
        Category::Design,
        Category::Productivity,
        Category::Resources,
        Category::AI,
        Category::ProjectManagement,
        Category::Terminal,
        Category::UI,
        Category::Database,
        Category::Cloud,
        Category::Documentation,
        Category::NoteTaking,
        Category::Inspiration,
        Category::VersionControl,
    ];

    /// Parses a display label. Matching is exact, as labels come from curated data.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Browser" => Category::Browser,
            "Essentials" => Category::Essentials,
            "Development" => Category::Development,
            "Design" => Category::Design,
            "Productivity" => Category::Productivity,
            "Resources" => Category::Resources,
            "AI" => Category::AI,
            "Project Management" => Category::ProjectManagement,
            "Terminal" => Category::Terminal,
            "UI" => Category::UI,
            "Database" => Category::Database,
            "Cloud" => Category::Cloud,
            "Documentation" => Category::Documentation,
            "Note Taking" => Category::NoteTaking,
            "Inspiration" => Category::Inspiration,
            "Version Control" => Category::VersionControl,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Browser => "Browser",
            Category::Essentials => "Essentials",
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Productivity => "Productivity",
            Category::Resources => "Resources",
            Category::AI => "AI",
            Category::ProjectManagement => "Project Management",
            Category::Terminal => "Terminal",
            Category::UI => "UI",
            Category::Database => "Database",
            Category::Cloud => "Cloud",
            Category::Documentation => "Documentation",
            Category::NoteTaking => "Note Taking",
            Category::Inspiration => "Inspiration",
            Category::VersionControl => "Version Control",
            Category::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

/// Icon glyphs a card or detail header can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Browsers,
    Code,
    PaintBrush,
    Lightning,
    Robot,
    Rocket,
    Terminal,
    Layout,
    Database,
    Cloud,
    Book,
    Pencil,
    Lightbulb,
    Star,
    Archive,
    GitBranch,
    Globe,
}

impl Icon {
    /// Stable identifier emitted into markup as `data-icon`.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Browsers => "browsers",
            Icon::Code => "code",
            Icon::PaintBrush => "paint-brush",
            Icon::Lightning => "lightning",
            Icon::Robot => "robot",
            Icon::Rocket => "rocket",
            Icon::Terminal => "terminal",
            Icon::Layout => "layout",
            Icon::Database => "database",
            Icon::Cloud => "cloud",
            Icon::Book => "book",
            Icon::Pencil => "pencil",
            Icon::Lightbulb => "lightbulb",
            Icon::Star => "star",
            Icon::Archive => "archive",
            Icon::GitBranch => "git-branch",
            Icon::Globe => "globe",
        }
    }
}
