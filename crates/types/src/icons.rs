//! Icon tags attached to menu entries.
//!
//! The presentation layer maps these tags to concrete glyphs. The terminal
//! front-end uses [`CategoryIcon::symbol`] and [`SubItemIcon::symbol`].

use serde::{Deserialize, Serialize};

/// Icon shown next to a top-level service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    /// Design and graphics offerings.
    Palette,
    /// Software development offerings.
    Chip,
    /// Mobile and app offerings.
    Phone,
    /// Marketing and SEO offerings.
    Trend,
    /// Fallback for anything unmatched.
    Layers,
}

impl CategoryIcon {
    /// Short text glyph used when rendering in a terminal.
    pub fn symbol(self) -> &'static str {
        match self {
            CategoryIcon::Palette => "[Dsn]",
            CategoryIcon::Chip => "[Dev]",
            CategoryIcon::Phone => "[App]",
            CategoryIcon::Trend => "[Mkt]",
            CategoryIcon::Layers => "[Svc]",
        }
    }
}

/// Icon shown next to a nested sub-item in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubItemIcon {
    Filter,
    Phone,
    Users,
    Palette,
    Server,
    Cart,
    Document,
    Cloud,
    Chevron,
}

impl SubItemIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            SubItemIcon::Filter => "~",
            SubItemIcon::Phone => "#",
            SubItemIcon::Users => "@",
            SubItemIcon::Palette => "*",
            SubItemIcon::Server => "=",
            SubItemIcon::Cart => "$",
            SubItemIcon::Document => "%",
            SubItemIcon::Cloud => "&",
            SubItemIcon::Chevron => ">",
        }
    }
}
