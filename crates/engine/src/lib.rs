//! # Sitenav Engine
//!
//! The engine turns the content API's service list into the navigation menu
//! of the website and keeps it cached for the lifetime of the navbar.
//!
//! ## Key Features
//!
//! - **Menu store**: [`NavMenuStore`] fetches categories when the services menu
//!   opens, keeps at most one request in flight and tracks the highlighted
//!   category shown in the detail panel
//! - **Transformation**: backend records become [`MenuCategory`] values with
//!   derived routes, icons and absolute image URLs
//! - **Portfolio grid**: category filtering and paging for the project showcase
//! - **Admin**: validated multipart writes for services and portfolio projects
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use sitenav_engine::{HttpContentSource, NavMenuStore, SiteConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = SiteConfig::load();
//! let source = Arc::new(HttpContentSource::from_config(&config)?);
//! let store = NavMenuStore::new(source);
//! let mut updates = store.subscribe();
//! store.open();
//! let snapshot = updates.wait_for(|snapshot| !snapshot.loading).await?.clone();
//! println!("{} categories", snapshot.categories.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`icons`**: ordered keyword rules mapping slugs to icon tags
//! - **`transform`**: backend payload to menu categories
//! - **`source`**: the [`ContentSource`] seam and its HTTP implementation
//! - **`store`**: the navigation menu store and its snapshots
//! - **`navbar`**: static links and mobile menu toggles
//! - **`portfolio`**: the portfolio grid model
//! - **`config`**: layered site configuration
//! - **`admin`**: create, update and delete operations for editors

pub mod admin;
pub mod config;
pub mod icons;
pub mod navbar;
pub mod portfolio;
pub mod source;
pub mod store;
pub mod transform;

pub use admin::{AdminError, AdminOutcome, ContentAdmin};
pub use config::SiteConfig;
pub use icons::{category_icon, sub_item_icon};
pub use navbar::{Dropdown, MobileMenuState, NavLink};
pub use portfolio::PortfolioGrid;
pub use sitenav_api::FetchError;
pub use sitenav_types::{
    CategoryIcon, ImageUpload, MenuCategory, MenuSubItem, PortfolioDraft, PortfolioItem, ServiceDraft, SubItemIcon,
    SubServiceDraft,
};
pub use source::{ContentSource, HttpContentSource};
pub use store::{LoadPhase, NavMenuSnapshot, NavMenuStore, SERVICES_ERROR_MESSAGE};
pub use transform::transform_categories;
