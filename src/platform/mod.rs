// LinkDeck platform abstraction
// Provides platform-specific config and data paths for Windows, macOS, and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for LinkDeck.
///
/// - **Linux**: `~/.config/linkdeck` (or `$XDG_CONFIG_HOME/linkdeck`)
/// - **macOS**: `~/Library/Application Support/LinkDeck`
/// - **Windows**: `%APPDATA%/LinkDeck`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory, home of `favorites.db`.
///
/// - **Linux**: `~/.local/share/linkdeck` (or `$XDG_DATA_HOME/linkdeck`)
/// - **macOS**: `~/Library/Application Support/LinkDeck`
/// - **Windows**: `%APPDATA%/LinkDeck`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default location of the favorites database.
pub fn default_favorites_db_path() -> PathBuf {
    get_data_dir().join("favorites.db")
}
