//! Nested composition: route -> shell -> role-specific regions.
//!
//! Every render takes one [`RenderPass`]: a snapshot of the store resolved
//! once. The sidebar, dashboard and signup slots all select from that pass,
//! so sites rendered together cannot disagree even if the store changes
//! while the render is in flight.

use healthaid_core::navigation::NavItem;
use healthaid_core::{DashboardVariant, Identity, SidebarVariant, SignupVariant, ViewSelector};
use schemars::JsonSchema;
use serde::Serialize;

use crate::chrome::{SidebarAction, SidebarState};
use crate::error::ShellError;
use crate::resolver::Resolver;
use crate::routes::{Page, RouteTable};
use crate::store::{IdentityScope, IdentityStore};

// ---------------------------------------------------------------------------
// RenderPass
// ---------------------------------------------------------------------------

/// One store read, resolved once, shared by every site of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPass {
    identity: Identity,
    selector: ViewSelector,
    forced: bool,
    revision: u64,
}

impl RenderPass {
    /// Snapshot the store behind `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::StoreNotInitialized`] if `scope` is detached.
    pub fn begin(
        scope: IdentityScope<'_>,
        resolver: &Resolver,
        site: &'static str,
    ) -> Result<Self, ShellError> {
        let store = scope.store(site)?;
        let mut pass = Self::from_snapshot(store.identity(), resolver);
        pass.revision = store.revision();
        Ok(pass)
    }

    /// Pass over a fixed identity, detached from any store.
    #[must_use]
    pub fn from_snapshot(identity: Identity, resolver: &Resolver) -> Self {
        Self {
            identity,
            selector: resolver.resolve(&identity),
            forced: resolver.forced_selector().is_some(),
            revision: 0,
        }
    }

    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    #[must_use]
    pub const fn selector(&self) -> ViewSelector {
        self.selector
    }

    /// Store revision the snapshot was taken at.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// True once the store has moved past this snapshot; the caller must re-render.
    #[must_use]
    pub fn is_stale(&self, store: &IdentityStore) -> bool {
        store.revision() != self.revision
    }
}

// ---------------------------------------------------------------------------
// Composition sites
// ---------------------------------------------------------------------------

/// A region of the UI tree that picks a role-specific variant.
pub trait CompositionSite {
    type Variant;

    /// Name used in diagnostics, e.g. the uninitialized-store error.
    const NAME: &'static str;

    fn select(pass: &RenderPass) -> Self::Variant;
}

/// App-shell sidebar region.
pub struct SidebarSlot;

/// Page body at `/app/dashboard`.
pub struct DashboardSlot;

/// Page body at `/signup`.
pub struct SignupSlot;

impl CompositionSite for SidebarSlot {
    type Variant = SidebarVariant;
    const NAME: &'static str = "sidebar";

    fn select(pass: &RenderPass) -> SidebarVariant {
        SidebarVariant::from(pass.selector)
    }
}

impl CompositionSite for DashboardSlot {
    type Variant = DashboardVariant;
    const NAME: &'static str = "dashboard";

    fn select(pass: &RenderPass) -> DashboardVariant {
        DashboardVariant::from(pass.selector)
    }
}

impl CompositionSite for SignupSlot {
    type Variant = SignupVariant;
    const NAME: &'static str = "signup";

    // Signup keys on the user type; only an explicit override changes that.
    fn select(pass: &RenderPass) -> SignupVariant {
        if pass.forced {
            SignupVariant::from(pass.selector.family())
        } else {
            SignupVariant::for_user_type(pass.identity.user_type())
        }
    }
}

// ---------------------------------------------------------------------------
// RenderTree
// ---------------------------------------------------------------------------

/// Output of one composition pass. Carries component names, not pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "shell", rename_all = "snake_case")]
pub enum RenderTree {
    /// No route matched.
    Empty,
    Landing {
        component: &'static str,
    },
    Auth {
        content: AuthContent,
        cross_link: CrossLink,
    },
    App {
        sidebar: SidebarRegion,
        content: ContentRegion,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum AuthContent {
    Login {
        component: &'static str,
    },
    Signup {
        variant: SignupVariant,
        component: &'static str,
    },
}

/// Link at the bottom of the auth shell pointing at the other auth page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CrossLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

impl CrossLink {
    const TO_LOGIN: Self = Self {
        prompt: "Already have an account?",
        label: "Login",
        href: "/login",
    };

    const TO_SIGNUP: Self = Self {
        prompt: "Need an account?",
        label: "Sign Up",
        href: "/signup",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SidebarRegion {
    pub variant: SidebarVariant,
    pub component: &'static str,
    pub state: SidebarState,
    pub nav: &'static [NavItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "content", rename_all = "snake_case")]
pub enum ContentRegion {
    Dashboard {
        variant: DashboardVariant,
        component: &'static str,
    },
    Screen {
        name: &'static str,
    },
    Empty,
}

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

/// Render `path` against the store lent through `scope`.
///
/// Routes that never read identity (landing, login, misses) render even
/// with a detached scope.
///
/// # Errors
///
/// Returns [`ShellError::StoreNotInitialized`] when a role-resolved region is
/// mounted through a detached scope.
pub fn compose(
    path: &str,
    routes: &RouteTable,
    scope: IdentityScope<'_>,
    resolver: &Resolver,
    sidebar: SidebarState,
) -> Result<RenderTree, ShellError> {
    let Some(route) = routes.lookup(path) else {
        tracing::debug!(path, "no route matched; rendering nothing");
        return Ok(RenderTree::Empty);
    };

    tracing::debug!(path, route = route.path, shell = %route.shell(), "route matched");

    let tree = match route.page {
        Page::Landing => RenderTree::Landing {
            component: "Landing",
        },
        Page::Login => RenderTree::Auth {
            content: AuthContent::Login { component: "Login" },
            cross_link: CrossLink::TO_SIGNUP,
        },
        Page::Signup => {
            let pass = RenderPass::begin(scope, resolver, SignupSlot::NAME)?;
            let variant = SignupSlot::select(&pass);
            RenderTree::Auth {
                content: AuthContent::Signup {
                    variant,
                    component: variant.component_name(),
                },
                cross_link: CrossLink::TO_LOGIN,
            }
        }
        Page::Dashboard | Page::Screen { .. } | Page::Blank => {
            let pass = RenderPass::begin(scope, resolver, SidebarSlot::NAME)?;
            render_app_shell(&pass, route.page, sidebar)
        }
    };

    Ok(tree)
}

fn render_app_shell(pass: &RenderPass, page: Page, sidebar: SidebarState) -> RenderTree {
    let variant = SidebarSlot::select(pass);
    let content = match page {
        Page::Dashboard => {
            let variant = DashboardSlot::select(pass);
            ContentRegion::Dashboard {
                variant,
                component: variant.component_name(),
            }
        }
        Page::Screen { name } => ContentRegion::Screen { name },
        _ => ContentRegion::Empty,
    };

    RenderTree::App {
        sidebar: SidebarRegion {
            variant,
            component: variant.component_name(),
            state: sidebar,
            nav: variant.nav_items(),
        },
        content,
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Application root: owns the session's identity store and the shell-local state.
#[derive(Debug)]
pub struct App {
    store: IdentityStore,
    routes: RouteTable,
    resolver: Resolver,
    sidebar: SidebarState,
}

impl App {
    #[must_use]
    pub fn new(store: IdentityStore) -> Self {
        Self {
            store,
            routes: RouteTable::default(),
            resolver: Resolver::new(),
            sidebar: SidebarState::default(),
        }
    }

    #[must_use]
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn with_sidebar(mut self, sidebar: SidebarState) -> Self {
        self.sidebar = sidebar;
        self
    }

    /// The store, lent for reads and setter calls.
    #[must_use]
    pub const fn store(&self) -> &IdentityStore {
        &self.store
    }

    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub const fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn dispatch_sidebar(&mut self, action: SidebarAction) -> SidebarState {
        self.sidebar = self.sidebar.apply(action);
        tracing::debug!(?action, state = %self.sidebar, "sidebar state changed");
        self.sidebar
    }

    /// Render `path` with the store in scope.
    ///
    /// # Errors
    ///
    /// Never fails for an `App`-owned store; the error type is shared with [`compose`].
    pub fn render(&self, path: &str) -> Result<RenderTree, ShellError> {
        compose(
            path,
            &self.routes,
            self.store.scope(),
            &self.resolver,
            self.sidebar,
        )
    }
}

#[cfg(test)]
mod tests {
    use healthaid_core::{OrgRole, UserType, ViewFamily};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn sidebar_of(tree: &RenderTree) -> SidebarVariant {
        match tree {
            RenderTree::App { sidebar, .. } => sidebar.variant,
            other => panic!("expected app shell, got {other:?}"),
        }
    }

    fn dashboard_of(tree: &RenderTree) -> DashboardVariant {
        match tree {
            RenderTree::App {
                content: ContentRegion::Dashboard { variant, .. },
                ..
            } => *variant,
            other => panic!("expected dashboard, got {other:?}"),
        }
    }

    #[rstest]
    #[case(Identity::admin())]
    #[case(Identity::user())]
    #[case(Identity::organization(Some(OrgRole::OrgAdmin)))]
    #[case(Identity::organization(Some(OrgRole::Doctor)))]
    #[case(Identity::organization(None))]
    #[case(Identity::new(UserType::Unrecognized, None))]
    fn sites_agree_on_family(#[case] identity: Identity) {
        let pass = RenderPass::from_snapshot(identity, &Resolver::new());
        let sidebar: ViewFamily = SidebarSlot::select(&pass).family();
        let dashboard: ViewFamily = DashboardSlot::select(&pass).family();
        let signup: ViewFamily = SignupSlot::select(&pass).family();
        assert_eq!(sidebar, dashboard);
        assert_eq!(sidebar, signup);
    }

    #[test]
    fn pass_is_a_snapshot() {
        let store = IdentityStore::with_identity(Identity::admin());
        let pass = RenderPass::begin(store.scope(), &Resolver::new(), "test").unwrap();

        store.set_user_type(UserType::Organization);

        assert!(pass.is_stale(&store));
        assert_eq!(SidebarSlot::select(&pass), SidebarVariant::Admin);
        assert_eq!(DashboardSlot::select(&pass), DashboardVariant::Admin);
    }

    #[test]
    fn fresh_pass_is_not_stale() {
        let store = IdentityStore::new();
        store.set_user_type(UserType::Admin);
        let pass = RenderPass::begin(store.scope(), &Resolver::new(), "test").unwrap();
        assert_eq!(pass.revision(), 1);
        assert!(!pass.is_stale(&store));
    }

    #[test]
    fn forced_signup_follows_forced_family() {
        let pass = RenderPass::from_snapshot(
            Identity::user(),
            &Resolver::forced(ViewSelector::OrgStaffView),
        );
        assert_eq!(SignupSlot::select(&pass), SignupVariant::Organization);
    }

    #[test]
    fn detached_scope_fails_for_role_resolved_routes() {
        let routes = RouteTable::default();
        let resolver = Resolver::new();
        for path in ["/app/dashboard", "/app/journal", "/app", "/signup"] {
            let result = compose(
                path,
                &routes,
                IdentityScope::detached(),
                &resolver,
                SidebarState::Expanded,
            );
            assert!(
                matches!(result, Err(ShellError::StoreNotInitialized { .. })),
                "{path}: {result:?}"
            );
        }
    }

    #[test]
    fn detached_scope_still_renders_identity_free_routes() {
        let routes = RouteTable::default();
        let resolver = Resolver::new();
        let render = |path| {
            compose(
                path,
                &routes,
                IdentityScope::detached(),
                &resolver,
                SidebarState::Expanded,
            )
        };
        assert_eq!(
            render("/").unwrap(),
            RenderTree::Landing {
                component: "Landing"
            }
        );
        assert!(matches!(render("/login"), Ok(RenderTree::Auth { .. })));
        assert_eq!(render("/missing").unwrap(), RenderTree::Empty);
    }

    #[test]
    fn routing_miss_renders_empty() {
        let app = App::new(IdentityStore::new());
        assert_eq!(app.render("/definitely/not/here").unwrap(), RenderTree::Empty);
    }

    #[test]
    fn auth_shell_cross_links() {
        let app = App::new(IdentityStore::new());

        let RenderTree::Auth { cross_link, .. } = app.render("/login").unwrap() else {
            panic!("login should render in the auth shell");
        };
        assert_eq!(cross_link.href, "/signup");

        let RenderTree::Auth {
            content,
            cross_link,
        } = app.render("/signup").unwrap()
        else {
            panic!("signup should render in the auth shell");
        };
        assert_eq!(cross_link.href, "/login");
        assert_eq!(
            content,
            AuthContent::Signup {
                variant: SignupVariant::CommonUser,
                component: "CommonUserSignup",
            }
        );
    }

    #[test]
    fn app_render_tracks_store_mutations() {
        let app = App::new(IdentityStore::new());
        assert_eq!(sidebar_of(&app.render("/app/dashboard").unwrap()), SidebarVariant::Common);

        app.store().set_user_type(UserType::Organization);
        app.store().set_org_role(Some(OrgRole::OrgAdmin));
        let tree = app.render("/app/dashboard").unwrap();
        assert_eq!(sidebar_of(&tree), SidebarVariant::Org);
        assert_eq!(dashboard_of(&tree), DashboardVariant::Org);
    }

    #[test]
    fn screens_keep_role_sidebar() {
        let app = App::new(IdentityStore::with_identity(Identity::admin()));
        let tree = app.render("/app/reports").unwrap();
        assert_eq!(sidebar_of(&tree), SidebarVariant::Admin);
        assert!(matches!(
            tree,
            RenderTree::App {
                content: ContentRegion::Screen { name: "Reports" },
                ..
            }
        ));
    }

    #[test]
    fn sidebar_state_is_independent_of_identity() {
        let mut app = App::new(IdentityStore::new()).with_sidebar(SidebarState::Collapsed);
        assert_eq!(app.dispatch_sidebar(SidebarAction::Toggle), SidebarState::Expanded);

        app.store().set_user_type(UserType::Admin);
        assert_eq!(app.sidebar(), SidebarState::Expanded);

        let RenderTree::App { sidebar, .. } = app.render("/app").unwrap() else {
            panic!("expected app shell");
        };
        assert_eq!(sidebar.state, SidebarState::Expanded);
        assert_eq!(sidebar.nav, healthaid_core::navigation::ADMIN);
    }
}
