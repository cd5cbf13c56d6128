//! # healthaid-shell
//!
//! Role-based view composition for the HealthAid application shell.
//!
//! The [`App`] root owns the one [`IdentityStore`] of a session and lends it
//! to every composition site through an [`IdentityScope`]. A render takes a
//! single [`RenderPass`] snapshot of the store, resolves it once with the
//! [`Resolver`], and lets the sidebar, dashboard and signup slots pick their
//! variants from that same pass. The [`RouteTable`] decides which shell (if
//! any) wraps a path.
//!
//! Everything here is single-threaded and synchronous; the store is `!Sync`.

pub mod chrome;
pub mod compose;
pub mod error;
pub mod resolver;
pub mod routes;
pub mod store;

pub use chrome::{SidebarAction, SidebarState};
pub use compose::{
    compose, App, AuthContent, CompositionSite, ContentRegion, CrossLink, DashboardSlot,
    RenderPass, RenderTree, SidebarRegion, SidebarSlot, SignupSlot,
};
pub use error::ShellError;
pub use resolver::{resolve, Resolver};
pub use routes::{Page, Route, RouteTable, ShellKind};
pub use store::{IdentityScope, IdentityStore, SubscriptionId};
