pub mod admin;
pub mod icons;
pub mod lenient;
pub mod menu;
pub mod portfolio;

pub use admin::{ImageUpload, PortfolioDraft, ServiceDraft, SubServiceDraft, SubServiceFields};
pub use icons::{CategoryIcon, SubItemIcon};
pub use menu::{MenuCategory, MenuSubItem, RawCategory, RawSubItem};
pub use portfolio::{PortfolioItem, RawPortfolioItem};
