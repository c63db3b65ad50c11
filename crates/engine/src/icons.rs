//! Icon derivation for menu entries.
//!
//! Icons are chosen by case-insensitive substring matching against ordered
//! keyword groups. Rules are evaluated top to bottom and the first group with
//! a matching keyword wins, so a slug such as `app-design` resolves to the
//! design icon.

use sitenav_types::{CategoryIcon, SubItemIcon};

type IconRule<T> = (&'static [&'static str], T);

const CATEGORY_ICON_RULES: &[IconRule<CategoryIcon>] = &[
    (&["design", "graphic"], CategoryIcon::Palette),
    (&["develop", "dev"], CategoryIcon::Chip),
    (&["mobile", "app"], CategoryIcon::Phone),
    (&["marketing", "seo"], CategoryIcon::Trend),
];

const SUB_ITEM_ICON_RULES: &[IconRule<SubItemIcon>] = &[
    (&["ui", "ux"], SubItemIcon::Filter),
    (&["responsive"], SubItemIcon::Phone),
    (&["brand"], SubItemIcon::Users),
    (&["frontend"], SubItemIcon::Palette),
    (&["backend"], SubItemIcon::Server),
    (&["ecom", "shop"], SubItemIcon::Cart),
    (&["cms", "wordpress"], SubItemIcon::Document),
    (&["domain"], SubItemIcon::Cloud),
];

/// Icon for a top-level category, keyed by its slug or name.
pub fn category_icon(slug_or_name: &str) -> CategoryIcon {
    first_match(CATEGORY_ICON_RULES, slug_or_name).unwrap_or(CategoryIcon::Layers)
}

/// Icon for a sub-item, keyed by its slug or name.
pub fn sub_item_icon(slug_or_name: &str) -> SubItemIcon {
    first_match(SUB_ITEM_ICON_RULES, slug_or_name).unwrap_or(SubItemIcon::Chevron)
}

/// The key used for icon matching: the slug, or the name when the slug is blank.
pub fn icon_key<'a>(slug: &'a str, name: &'a str) -> &'a str {
    if slug.trim().is_empty() { name } else { slug }
}

fn first_match<T: Copy>(rules: &[IconRule<T>], key: &str) -> Option<T> {
    let lowered = key.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, icon)| *icon)
}
