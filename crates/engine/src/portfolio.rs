//! Portfolio grid: category filter and "load more" paging.

use std::collections::BTreeSet;

use serde_json::Value;
use sitenav_api::FetchError;
use sitenav_types::{PortfolioItem, RawPortfolioItem};
use sitenav_util::extract_list_items;
use tracing::debug;

use crate::source::ContentSource;

/// Filter entry that shows every project.
pub const ALL_PROJECTS: &str = "All Projects";

/// Number of cards revealed per page.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioGrid {
    items: Vec<PortfolioItem>,
    active_filter: String,
    visible_count: usize,
}

impl PortfolioGrid {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self {
            items,
            active_filter: ALL_PROJECTS.to_string(),
            visible_count: PAGE_SIZE,
        }
    }

    /// Fetch the project list from `source`.
    pub async fn load(source: &dyn ContentSource) -> Result<Self, FetchError> {
        let payload = source.fetch_portfolio().await?;
        Ok(Self::from_payload(payload))
    }

    /// Build a grid from a raw payload, skipping entries that do not decode.
    pub fn from_payload(payload: Value) -> Self {
        let items = extract_list_items(payload)
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<RawPortfolioItem>(entry) {
                Ok(raw) => Some(PortfolioItem::from(raw)),
                Err(error) => {
                    debug!(%error, "skipping undecodable portfolio entry");
                    None
                }
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// `All Projects` followed by the distinct categories in sorted order.
    pub fn filter_categories(&self) -> Vec<String> {
        let categories: BTreeSet<&str> = self.items.iter().map(|item| item.category.as_str()).collect();
        std::iter::once(ALL_PROJECTS)
            .chain(categories)
            .map(str::to_string)
            .collect()
    }

    pub fn set_filter(&mut self, category: &str) {
        self.active_filter = category.to_string();
    }

    /// Items matching the active filter.
    pub fn filtered(&self) -> Vec<&PortfolioItem> {
        self.items
            .iter()
            .filter(|item| self.active_filter == ALL_PROJECTS || item.category == self.active_filter)
            .collect()
    }

    /// The revealed slice of the filtered items.
    pub fn visible_items(&self) -> Vec<&PortfolioItem> {
        let mut filtered = self.filtered();
        filtered.truncate(self.visible_count);
        filtered
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.visible_count += PAGE_SIZE;
    }

    /// Whether filtered items remain hidden.
    pub fn has_more(&self) -> bool {
        self.filtered().len() > self.visible_count
    }
}
