//! Static navbar links and the mobile menu toggles.
//!
//! The desktop services menu drives [`NavMenuStore`] directly through
//! `open`/`close` on hover. On small screens the same menu lives in a
//! collapsible dropdown inside the mobile menu; [`MobileMenuState`] forwards
//! its expand/collapse transitions to the store.

use crate::store::NavMenuStore;

/// A fixed navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

/// Links rendered around the services menu, in display order.
pub const STATIC_LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("About JIS", "/company"),
    NavLink::new("Industries", "/industries"),
    NavLink::new("Hire Us", "/hire-us"),
    NavLink::new("Portfolio", "/portfolio"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Contact", "/contact"),
    NavLink::new("Career", "/career"),
];

/// Footer link of the services menu.
pub const ALL_SERVICES_LINK: NavLink = NavLink::new("All Services", "/services");

/// Collapsible sections of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    Services,
    Admin,
}

/// Open/closed state of the mobile menu and its active dropdown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MobileMenuState {
    pub menu_open: bool,
    pub active_dropdown: Option<Dropdown>,
}

impl MobileMenuState {
    /// Flip the hamburger menu. Closing it also collapses any dropdown.
    pub fn toggle_menu(&mut self, store: &NavMenuStore) {
        if self.menu_open {
            self.close(store);
        } else {
            self.menu_open = true;
        }
    }

    /// Expand `dropdown`, or collapse it when it is already the active one.
    ///
    /// Only one dropdown is expanded at a time.
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown, store: &NavMenuStore) {
        let next = if self.active_dropdown == Some(dropdown) { None } else { Some(dropdown) };
        self.set_dropdown(next, store);
    }

    /// Collapse everything, e.g. after a link was followed.
    pub fn close(&mut self, store: &NavMenuStore) {
        self.menu_open = false;
        self.set_dropdown(None, store);
    }

    fn set_dropdown(&mut self, next: Option<Dropdown>, store: &NavMenuStore) {
        let was_services = self.active_dropdown == Some(Dropdown::Services);
        let is_services = next == Some(Dropdown::Services);
        self.active_dropdown = next;

        match (was_services, is_services) {
            (false, true) => store.open(),
            (true, false) => store.close(),
            _ => {}
        }
    }
}
