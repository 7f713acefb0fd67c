use std::fmt;

// === FavoritesError ===

/// Errors related to the favorites store.
#[derive(Debug)]
pub enum FavoritesError {
    /// The toggle target carried no usable link id.
    MissingId,
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a stored record.
    SerializationError(String),
}

impl fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoritesError::MissingId => write!(f, "Favorite target has no link id"),
            FavoritesError::DatabaseError(msg) => {
                write!(f, "Favorites database error: {}", msg)
            }
            FavoritesError::SerializationError(msg) => {
                write!(f, "Favorites serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FavoritesError {}

// === DatabaseError ===

/// Errors opening the favorites database.
#[derive(Debug)]
pub enum DatabaseError {
    /// The database directory could not be created.
    IoError(String),
    /// SQLite rejected the connection or a migration.
    SqliteError(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::IoError(msg) => write!(f, "Database I/O error: {}", msg),
            DatabaseError::SqliteError(msg) => write!(f, "SQLite error: {}", msg),
        }
    }
}

impl std::error::Error for DatabaseError {}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::SqliteError(err.to_string())
    }
}

// === DirectoryError ===

/// Errors related to loading the link directory.
#[derive(Debug)]
pub enum DirectoryError {
    /// An I/O error occurred while reading the links file.
    IoError(String),
    /// The links file is not a JSON array of link records.
    ParseError(String),
    /// Two records share the same id.
    DuplicateId(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::IoError(msg) => write!(f, "Links file I/O error: {}", msg),
            DirectoryError::ParseError(msg) => write!(f, "Links file parse error: {}", msg),
            DirectoryError::DuplicateId(id) => write!(f, "Duplicate link id: {}", id),
        }
    }
}

impl std::error::Error for DirectoryError {}

// === DetailFieldError ===

/// A detail-view field that could not be formatted.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailFieldError {
    /// The date string matched none of the accepted formats.
    InvalidDate(String),
    /// The URL could not be parsed or has no host.
    InvalidUrl(String),
}

impl fmt::Display for DetailFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailFieldError::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
            DetailFieldError::InvalidUrl(raw) => write!(f, "Invalid URL: {}", raw),
        }
    }
}

impl std::error::Error for DetailFieldError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors surfaced by the app core.
#[derive(Debug)]
pub enum AppError {
    /// No card exists at the given directory position.
    InvalidCardIndex(usize),
    /// The favorites store rejected an operation.
    Favorites(FavoritesError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCardIndex(index) => write!(f, "Invalid card index: {}", index),
            AppError::Favorites(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Favorites(err) => Some(err),
            AppError::InvalidCardIndex(_) => None,
        }
    }
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        AppError::Favorites(err)
    }
}
