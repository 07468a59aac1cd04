//! Site Map
//!
//! The three routed pages and the navigation state shared by the nav bar.

use serde::Serialize;

/// A routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    Dashboard,
    Developer,
}

impl Route {
    /// Nav bar order
    pub const ALL: [Route; 3] = [Route::Landing, Route::Dashboard, Route::Developer];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/dashboard",
            Route::Developer => "/developer",
        }
    }

    /// Nav bar label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::Developer => "Developer Portal",
        }
    }

    /// Exact path lookup; a single trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Whether `route` is the page at `current_path`
pub fn is_active(route: Route, current_path: &str) -> bool {
    Route::from_path(current_path) == Some(route)
}

/// Open/closed state of the small-screen menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called when a link in the menu is followed
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let paths: Vec<_> = Route::ALL.iter().map(Route::path).collect();
        assert_eq!(paths, vec!["/", "/dashboard", "/developer"]);
        assert_eq!(Route::Developer.label(), "Developer Portal");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/developer"), Some(Route::Developer));
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path("/dashboard/extra"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_is_active_is_exact() {
        assert!(is_active(Route::Landing, "/"));
        assert!(!is_active(Route::Landing, "/dashboard"));
        assert!(is_active(Route::Dashboard, "/dashboard"));
        assert!(!is_active(Route::Developer, "/developer/keys"));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
