// LinkDeck platform paths for Linux
// Config: ~/.config/linkdeck
// Data:   ~/.local/share/linkdeck

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/linkdeck` if set, otherwise `~/.config/linkdeck`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("linkdeck"),
        _ => home_dir().join(".config").join("linkdeck"),
    }
}

/// Uses `$XDG_DATA_HOME/linkdeck` if set, otherwise `~/.local/share/linkdeck`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("linkdeck"),
        _ => home_dir().join(".local").join("share").join("linkdeck"),
    }
}
