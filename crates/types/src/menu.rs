use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icons::{CategoryIcon, SubItemIcon};
use crate::lenient::{null_as_default, timestamp};

/// A service category exactly as the remote API returns it.
///
/// Every field is optional on the wire; missing or `null` values fall back
/// to their defaults so a sparsely populated record still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCategory {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Absolute URL or a path relative to the API origin.
    pub main_image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_services: Vec<RawSubItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A nested offering within a [`RawCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSubItem {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub image_url: Option<String>,
}

/// A category ready to render in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    /// Display label (the category name).
    pub label: String,
    /// Route of the category page, e.g. `/services/web-design`.
    pub path: String,
    pub description: String,
    pub icon: CategoryIcon,
    /// Absolute image URL, if the category has one.
    pub image_url: Option<String>,
    pub items: Vec<MenuSubItem>,
}

/// A sub-item listed in the detail panel of a highlighted category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSubItem {
    pub id: String,
    pub label: String,
    /// Route of the sub-item page, e.g. `/services/web-design/ui-ux`.
    pub path: String,
    pub icon: SubItemIcon,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_category_decodes_backend_record() {
        let value = json!({
            "_id": "65f0",
            "name": "Web Development",
            "slug": "web-development",
            "description": "Sites and apps",
            "mainImage": "uploads/web.png",
            "subServices": [
                { "_id": "s1", "name": "Frontend", "slug": "frontend", "description": "", "imageUrl": "" }
            ],
            "isActive": true,
            "createdAt": "2024-03-12T10:00:00.000Z",
            "updatedAt": "2024-03-13T10:00:00.000Z",
            "__v": 0
        });

        let category: RawCategory = serde_json::from_value(value).expect("decode category");
        assert_eq!(category.id, "65f0");
        assert!(category.is_active);
        assert_eq!(category.main_image.as_deref(), Some("uploads/web.png"));
        assert_eq!(category.sub_services.len(), 1);
        assert_eq!(category.sub_services[0].slug, "frontend");
        assert!(category.created_at.is_some());
    }

    #[test]
    fn raw_category_tolerates_missing_fields() {
        let category: RawCategory = serde_json::from_value(json!({ "_id": "x", "name": "Bare" })).expect("decode sparse category");
        assert!(!category.is_active);
        assert!(category.sub_services.is_empty());
        assert_eq!(category.main_image, None);
    }

    #[test]
    fn raw_category_tolerates_null_fields_and_epoch_timestamps() {
        let value = json!({
            "_id": "c9",
            "name": "Cloud",
            "slug": null,
            "description": null,
            "mainImage": null,
            "subServices": [
                { "_id": "s1", "name": "Hosting", "slug": "hosting", "description": null, "imageUrl": null }
            ],
            "isActive": true,
            "createdAt": 1_710_000_000_000_i64,
            "updatedAt": "not a date"
        });

        let category: RawCategory = serde_json::from_value(value).expect("decode category with nulls");
        assert_eq!(category.slug, "");
        assert_eq!(category.description, "");
        assert_eq!(category.sub_services[0].description, "");
        assert_eq!(category.sub_services[0].image_url, None);
        assert!(category.created_at.is_some());
        assert_eq!(category.updated_at, None);
    }

    #[test]
    fn raw_category_still_rejects_mistyped_flags() {
        assert!(serde_json::from_value::<RawCategory>(json!({ "_id": "x", "isActive": "yes" })).is_err());
    }
}
