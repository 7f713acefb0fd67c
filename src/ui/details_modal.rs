//! Details modal: the expanded view of a single link.

use tracing::warn;

use crate::services::category_catalog::CategoryCatalogTrait;
use crate::services::display_format::{self, UNKNOWN_DATE, UNKNOWN_WEBSITE};
use crate::types::card::DetailView;
use crate::types::category::Category;
use crate::types::link::LinkRecord;

pub struct DetailsModal<'a> {
    catalog: &'a dyn CategoryCatalogTrait,
    date_format: &'a str,
}

impl<'a> DetailsModal<'a> {
    pub fn new(catalog: &'a dyn CategoryCatalogTrait, date_format: &'a str) -> Self {
        Self {
            catalog,
            date_format,
        }
    }

    /// Builds the detail view. A bad date or URL only replaces that field.
    pub fn build(&self, link: &LinkRecord) -> DetailView {
        let category = Category::from_label(&link.category);

        let added_on = display_format::format_added_on(&link.date_added, self.date_format)
            .unwrap_or_else(|err| {
                warn!(link_id = %link.id, %err, "falling back for added-on date");
                UNKNOWN_DATE.to_string()
            });

        let website = display_format::website_host(&link.url).unwrap_or_else(|err| {
            warn!(link_id = %link.id, %err, "falling back for website");
            UNKNOWN_WEBSITE.to_string()
        });

        DetailView {
            title: link.title.clone(),
            category: link.category.clone(),
            description: link.description.clone(),
            icon: self.catalog.icon_for(&category),
            color: self.catalog.accent_for(link),
            use_case: link.use_case().map(str::to_string),
            comments: link.comments().map(str::to_string),
            added_on,
            website,
            url: link.url.clone(),
        }
    }
}
