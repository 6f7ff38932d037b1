use crate::collaborators::Router;
use crate::presentation::Icon;
use crate::routes::RouteTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

const fn link(label: &'static str, href: &'static str, icon: Icon) -> NavLink {
    NavLink { label, href, icon }
}

/// Every first-class page destination, in menu order.
pub const SERVICE_LINKS: [NavLink; 8] = [
    link("Home", "/", Icon::Home),
    link("Live Dashboard", "/dashboard", Icon::MapPin),
    link("Analytics", "/analytics", Icon::BarChart),
    link("Organizations", "/organizations", Icon::Users),
    link("Donations", "/donations", Icon::Heart),
    link("Gov Resources", "/government", Icon::FileText),
    link("Safety Guide", "/safety", Icon::Shield),
    link("Emergency", "/emergency", Icon::Phone),
];

/// Standalone links. No routes are registered for these; they land on the
/// catch-all view.
pub const INFO_LINKS: [NavLink; 2] = [
    link("Contact Us", "/contact", Icon::Mail),
    link("About Us", "/about", Icon::Info),
];

pub const LOGIN_LINK: NavLink = link("Login", "/login", Icon::LogIn);

pub const BRAND_LINK: NavLink = link("GLOF Tracker", "/", Icon::Mountain);

/// How the mobile menu and the services dropdown interact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPolicy {
    /// Flags are independent; responsive layout hides whichever menu does
    /// not apply at the current width.
    #[default]
    Independent,
    /// Opening one menu closes the other.
    Exclusive,
}

/// Request to move to another path, produced when a menu item is activated.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    mobile_menu_open: bool,
    services_menu_open: bool,
    policy: MenuPolicy,
}

impl NavigationState {
    pub fn new(policy: MenuPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn services_menu_open(&self) -> bool {
        self.services_menu_open
    }

    pub fn policy(&self) -> MenuPolicy {
        self.policy
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        if self.mobile_menu_open && self.policy == MenuPolicy::Exclusive {
            self.services_menu_open = false;
        }
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
    }

    pub fn toggle_services_menu(&mut self) {
        self.services_menu_open = !self.services_menu_open;
        if self.services_menu_open && self.policy == MenuPolicy::Exclusive {
            self.mobile_menu_open = false;
        }
        debug!(open = self.services_menu_open, "services menu toggled");
    }

    pub fn close_services_menu(&mut self) {
        self.services_menu_open = false;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Pointer interaction outside the services dropdown.
    pub fn dismiss_outside(&mut self) {
        if self.services_menu_open {
            debug!("services menu dismissed by outside click");
            self.close_services_menu();
        }
    }

    /// Item picked from the services dropdown. The dropdown is always closed
    /// afterwards, whichever item it was.
    pub fn activate_service(&mut self, link: &NavLink) -> Navigation {
        self.close_services_menu();
        Navigation { to: link.href }
    }

    /// Item picked from the mobile menu.
    pub fn activate_mobile(&mut self, link: &NavLink) -> Navigation {
        self.close_mobile_menu();
        Navigation { to: link.href }
    }
}

/// Header chrome bound to an explicit router handle.
#[derive(Clone, Copy, Debug)]
pub struct NavigationShell<R> {
    router: R,
}

impl<R: Router> NavigationShell<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Exact comparison against the router's current path. Only drives
    /// highlighting.
    pub fn is_active(&self, path: &str) -> bool {
        self.router.current_path() == path
    }

    /// The current path when `table` has no literal route for it.
    pub fn unmatched_path(&self, table: &RouteTable) -> Option<String> {
        let path = self.router.current_path();
        table.is_unmatched(&path).then_some(path)
    }

    pub fn follow(&self, navigation: Navigation) {
        debug!(to = navigation.to, "navigating");
        self.router.navigate(navigation.to);
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_policy_closes_the_other_menu() {
        let mut state = NavigationState::new(MenuPolicy::Exclusive);
        state.toggle_mobile_menu();
        state.toggle_services_menu();
        assert!(state.services_menu_open());
        assert!(!state.mobile_menu_open());

        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open());
        assert!(!state.services_menu_open());
    }

    #[test]
    fn independent_policy_allows_both_open() {
        let mut state = NavigationState::default();
        state.toggle_mobile_menu();
        state.toggle_services_menu();
        assert!(state.mobile_menu_open());
        assert!(state.services_menu_open());
    }

    #[test]
    fn dismiss_outside_only_touches_services() {
        let mut state = NavigationState::default();
        state.toggle_mobile_menu();
        state.toggle_services_menu();
        state.dismiss_outside();
        assert!(!state.services_menu_open());
        assert!(state.mobile_menu_open());
    }

    #[test]
    fn mobile_activation_closes_mobile_menu() {
        let mut state = NavigationState::default();
        state.toggle_mobile_menu();
        let nav = state.activate_mobile(&LOGIN_LINK);
        assert_eq!(nav.to, "/login");
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn service_links_are_unique() {
        for (i, a) in SERVICE_LINKS.iter().enumerate() {
            for b in &SERVICE_LINKS[i + 1..] {
                assert_ne!(a.href, b.href);
            }
        }
    }
}
