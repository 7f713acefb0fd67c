use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single directory entry as supplied by the links file.
///
/// String fields default to empty when absent from the source JSON; an empty
/// or whitespace-only value is treated as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
}

impl LinkRecord {
    /// Builds a record with the fields every card needs.
    pub fn new(id: &str, title: &str, url: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// Returns the id if it is present.
    pub fn link_id(&self) -> Option<&str> {
        present(&self.id)
    }

    /// Names of the display fields a card cannot render without.
    pub fn missing_display_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if present(&self.title).is_none() {
            missing.push("title");
        }
        if present(&self.url).is_none() {
            missing.push("url");
        }
        if present(&self.category).is_none() {
            missing.push("category");
        }
        if present(&self.description).is_none() {
            missing.push("description");
        }
        missing
    }

    pub fn use_case(&self) -> Option<&str> {
        self.use_case.as_deref().and_then(present)
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref().and_then(present)
    }
}

/// Treats empty and whitespace-only strings as absent.
pub(crate) fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// What a toggle is applied to: a full record or a bare identity.
#[derive(Debug, Clone, Copy)]
pub enum FavoriteTarget<'a> {
    Record(&'a LinkRecord),
    Id(&'a str),
}

impl<'a> FavoriteTarget<'a> {
    /// The identity the store keys on, if one is present.
    pub fn link_id(&self) -> Option<&'a str> {
        match self {
            FavoriteTarget::Record(record) => present(&record.id),
            FavoriteTarget::Id(id) => present(id),
        }
    }

    pub fn record(&self) -> Option<&'a LinkRecord> {
        match self {
            FavoriteTarget::Record(record) => Some(record),
            FavoriteTarget::Id(_) => None,
        }
    }
}

impl<'a> From<&'a LinkRecord> for FavoriteTarget<'a> {
    fn from(record: &'a LinkRecord) -> Self {
        FavoriteTarget::Record(record)
    }
}

impl<'a> From<&'a str> for FavoriteTarget<'a> {
    fn from(id: &'a str) -> Self {
        FavoriteTarget::Id(id)
    }
}

/// One member of the favorites set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    pub link_id: String,
    /// Retained when the toggle was given a full record.
    pub record: Option<LinkRecord>,
    pub favorited_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(link_id: &str, record: Option<LinkRecord>) -> Self {
        Self {
            link_id: link_id.to_string(),
            record,
            favorited_at: Utc::now(),
        }
    }
}
