use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub favorites: FavoritesSettings,
    pub logging: LoggingSettings,
}

/// Directory and display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// JSON file holding the link records. The bundled demo list is used when unset.
    pub links_path: Option<String>,
    /// chrono format pattern for the "Added On" field.
    pub date_format: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            links_path: None,
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

/// Where favorites live.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FavoritesBackend {
    /// Session-scoped, cleared on exit.
    #[default]
    Memory,
    /// Written through to a SQLite file.
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FavoritesSettings {
    pub backend: FavoritesBackend,
    /// Defaults to `favorites.db` in the platform data directory.
    pub database_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
