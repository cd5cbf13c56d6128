//! # healthaid-core
//!
//! Foundational types shared across the HealthAid shell crates:
//! - The identity model (user type + optional organization sub-role)
//! - View selector tags and the presentational variants they map to
//! - Sidebar navigation entries per variant
//! - Cross-cutting error types
//!
//! Nothing in this crate holds state or performs I/O. The store and the
//! resolver live in `healthaid-shell`.

pub mod errors;
pub mod identity;
pub mod navigation;
pub mod view;

pub use errors::CoreError;
pub use identity::{Identity, OrgRole, UserType};
pub use view::{DashboardVariant, SidebarVariant, SignupVariant, ViewFamily, ViewSelector};
