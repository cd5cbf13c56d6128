//! Role resolution: identity in, view selector out.

use healthaid_core::{Identity, OrgRole, UserType, ViewSelector};

/// Map an identity to its view selector.
///
/// Total and pure. Organization members without the org-admin role (including
/// unknown or missing roles) get the staff view; anything that is neither an
/// admin nor an organization gets the common-user view.
#[must_use]
pub const fn resolve(identity: &Identity) -> ViewSelector {
    match identity.user_type() {
        UserType::Admin => ViewSelector::AdminView,
        UserType::Organization => match identity.org_role() {
            Some(OrgRole::OrgAdmin) => ViewSelector::OrgAdminView,
            Some(OrgRole::Doctor | OrgRole::Nurse | OrgRole::Staff | OrgRole::Unrecognized)
            | None => ViewSelector::OrgStaffView,
        },
        UserType::User | UserType::Unrecognized => ViewSelector::CommonUserView,
    }
}

/// The resolver handed to composition sites.
///
/// Wraps [`resolve`] with an optional forced selector for development and
/// test harnesses. The override is always injected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    forced: Option<ViewSelector>,
}

impl Resolver {
    #[must_use]
    pub const fn new() -> Self {
        Self { forced: None }
    }

    /// Resolver that returns `selector` for every identity.
    #[must_use]
    pub const fn forced(selector: ViewSelector) -> Self {
        Self {
            forced: Some(selector),
        }
    }

    #[must_use]
    pub const fn forced_selector(&self) -> Option<ViewSelector> {
        self.forced
    }

    #[must_use]
    pub fn resolve(&self, identity: &Identity) -> ViewSelector {
        match self.forced {
            Some(selector) => {
                tracing::debug!(%identity, %selector, "forced view selector in effect");
                selector
            }
            None => resolve(identity),
        }
    }
}
