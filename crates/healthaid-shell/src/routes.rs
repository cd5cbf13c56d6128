//! Static routing table: URL path -> shell + page.
//!
//! A route path is either exact (`/login`) or a prefix wildcard (`/app/*`,
//! which also matches `/app` itself). Exact routes always win; among
//! wildcards the longest prefix wins. A miss is not an error.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

/// Layout wrapper around a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShellKind {
    /// No shell (landing).
    Bare,
    /// Login/signup chrome with a cross-link between the two.
    Auth,
    /// Authenticated chrome: sidebar + content region.
    App,
}

impl ShellKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Auth => "auth",
            Self::App => "app",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a route renders inside its shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Landing,
    Login,
    Signup,
    /// Role-resolved dashboard.
    Dashboard,
    /// Opaque app screen rendered by the host (journal, meds, ...).
    Screen { name: &'static str },
    /// App shell with an empty content region.
    Blank,
}

impl Page {
    /// The shell a page is always mounted in.
    #[must_use]
    pub const fn shell(self) -> ShellKind {
        match self {
            Self::Landing => ShellKind::Bare,
            Self::Login | Self::Signup => ShellKind::Auth,
            Self::Dashboard | Self::Screen { .. } | Self::Blank => ShellKind::App,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

impl Route {
    #[must_use]
    pub const fn new(path: &'static str, page: Page) -> Self {
        Self { path, page }
    }

    #[must_use]
    pub const fn shell(&self) -> ShellKind {
        self.page.shell()
    }

    fn wildcard_prefix(&self) -> Option<&'static str> {
        self.path.strip_suffix("/*")
    }

    fn matches(&self, path: &str) -> bool {
        match self.wildcard_prefix() {
            Some(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            None => self.path == path,
        }
    }
}

/// App screens behind the sidebar links, rendered as opaque pages.
const SCREENS: &[(&str, &str)] = &[
    ("/app/journal", "Journal"),
    ("/app/meds", "Meds"),
    ("/app/inventory", "Inventory"),
    ("/app/symptom-checker", "SymptomChecker"),
    ("/app/drug-checker", "DrugChecker"),
    ("/app/first-aid", "FirstAid"),
    ("/app/settings", "Settings"),
    ("/app/users", "Users"),
    ("/app/organizations", "Organizations"),
    ("/app/reports", "Reports"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub const fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a route. A later route with the same path replaces the earlier one.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.retain(|existing| existing.path != route.path);
        self.routes.push(route);
        self
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for `path` after normalization.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        let path = normalize_path(path);

        let exact = self
            .routes
            .iter()
            .find(|route| route.wildcard_prefix().is_none() && route.matches(&path));
        if exact.is_some() {
            return exact;
        }

        self.routes
            .iter()
            .filter(|route| route.wildcard_prefix().is_some() && route.matches(&path))
            .max_by_key(|route| route.path.len())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        let table = Self::empty()
            .with_route(Route::new("/", Page::Landing))
            .with_route(Route::new("/login", Page::Login))
            .with_route(Route::new("/signup", Page::Signup))
            .with_route(Route::new("/app/*", Page::Blank))
            .with_route(Route::new("/app/dashboard", Page::Dashboard));

        SCREENS.iter().fold(table, |table, &(path, name)| {
            table.with_route(Route::new(path, Page::Screen { name }))
        })
    }
}

/// Strip query and fragment, drop trailing slashes, and ensure a leading slash.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
