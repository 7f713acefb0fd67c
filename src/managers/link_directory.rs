//! Link Directory for LinkDeck.
//!
//! Holds the ordered link records supplied by the links file and indexes them
//! by id. Records are never modified after loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::types::category::Category;
use crate::types::errors::DirectoryError;
use crate::types::link::LinkRecord;

/// Ordered, id-indexed collection of link records.
#[derive(Debug, Default)]
pub struct LinkDirectory {
    links: Vec<LinkRecord>,
    index: HashMap<String, usize>,
}

impl LinkDirectory {
    /// Builds a directory from records in display order.
    ///
    /// Records without an id are kept but are not indexed.
    pub fn new(links: Vec<LinkRecord>) -> Result<Self, DirectoryError> {
        let mut index = HashMap::with_capacity(links.len());
        let mut unidentified = 0usize;

        for (position, link) in links.iter().enumerate() {
            match link.link_id() {
                Some(id) => {
                    if index.insert(id.to_string(), position).is_some() {
                        return Err(DirectoryError::DuplicateId(id.to_string()));
                    }
                }
                None => unidentified += 1,
            }
        }

        if unidentified > 0 {
            warn!(count = unidentified, "links without an id cannot be favorited");
        }

        Ok(Self { links, index })
    }

    /// Parses a JSON array of link records.
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let links: Vec<LinkRecord> =
            serde_json::from_str(json).map_err(|e| DirectoryError::ParseError(e.to_string()))?;
        Self::new(links)
    }

    /// Reads and parses a links file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DirectoryError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let directory = Self::from_json_str(&content)?;
        info!(path = %path.display(), count = directory.len(), "loaded link directory");
        Ok(directory)
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LinkRecord> {
        self.index.get(id).map(|&position| &self.links[position])
    }

    /// Links in the given category, in directory order.
    pub fn by_category(&self, category: &Category) -> Vec<&LinkRecord> {
        self.links
            .iter()
            .filter(|link| Category::from_label(&link.category) == *category)
            .collect()
    }

    /// Case-insensitive substring search over title, description and category.
    pub fn search(&self, query: &str) -> Vec<&LinkRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.links.iter().collect();
        }
        self.links
            .iter()
            .filter(|link| {
                link.title.to_lowercase().contains(&needle)
                    || link.description.to_lowercase().contains(&needle)
                    || link.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
