//! Backend service list to navigation menu transformation.

use std::collections::HashSet;

use serde_json::Value;
use sitenav_types::{MenuCategory, MenuSubItem, RawCategory, RawSubItem};
use sitenav_util::{extract_list_items, join_route, resolve_image_url};
use tracing::debug;

use crate::icons::{category_icon, icon_key, sub_item_icon};

/// Route prefix for service pages.
const SERVICES_ROUTE: &str = "/services";

/// Transform a raw response payload into menu categories.
///
/// The payload may be a bare array or `{ "data": [...] }`; any other shape
/// produces an empty menu. Entries that do not decode as a category are
/// skipped, inactive categories are dropped, and a repeated identifier keeps
/// only its first occurrence. Source order is preserved.
pub fn transform_categories(payload: Value, asset_origin: &str) -> Vec<MenuCategory> {
    let mut seen_ids = HashSet::new();

    extract_list_items(payload)
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawCategory>(entry) {
            Ok(category) => Some(category),
            Err(error) => {
                debug!(%error, "skipping undecodable category entry");
                None
            }
        })
        .filter(|category| category.is_active)
        .filter(|category| {
            let first_occurrence = seen_ids.insert(category.id.clone());
            if !first_occurrence {
                debug!(id = %category.id, "dropping duplicate category");
            }
            first_occurrence
        })
        .map(|category| to_menu_category(category, asset_origin))
        .collect()
}

fn to_menu_category(category: RawCategory, asset_origin: &str) -> MenuCategory {
    let items = category
        .sub_services
        .into_iter()
        .map(|sub_item| to_menu_sub_item(sub_item, &category.slug))
        .collect();

    MenuCategory {
        path: join_route(SERVICES_ROUTE, &[&category.slug]),
        icon: category_icon(icon_key(&category.slug, &category.name)),
        image_url: resolve_image_url(category.main_image.as_deref(), asset_origin),
        id: category.id,
        label: category.name,
        description: category.description,
        items,
    }
}

fn to_menu_sub_item(sub_item: RawSubItem, parent_slug: &str) -> MenuSubItem {
    MenuSubItem {
        path: join_route(SERVICES_ROUTE, &[parent_slug, &sub_item.slug]),
        icon: sub_item_icon(icon_key(&sub_item.slug, &sub_item.name)),
        id: sub_item.id,
        label: sub_item.name,
    }
}
