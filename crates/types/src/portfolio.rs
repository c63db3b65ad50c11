use serde::{Deserialize, Serialize};

use crate::lenient::null_as_default;

/// A portfolio project as returned by `GET /portfolio/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPortfolioItem {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub project_link: Option<String>,
}

/// A portfolio card shown in the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub excerpt: String,
    /// Route of the project detail page, `/portfolio/{id}`.
    pub path: String,
    pub project_url: Option<String>,
}

impl From<RawPortfolioItem> for PortfolioItem {
    fn from(raw: RawPortfolioItem) -> Self {
        Self {
            path: format!("/portfolio/{}", raw.id),
            id: raw.id,
            title: raw.title,
            category: raw.category,
            image_url: raw.image_url,
            excerpt: raw.description,
            project_url: raw.project_link.filter(|link| !link.is_empty()),
        }
    }
}
