//! Initial session identity.
//!
//! Stands in for the auth collaborator: whatever identity it verified is
//! handed to the identity store at startup through this section.

use healthaid_core::{Identity, OrgRole, UserType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// `admin`, `user` or `organization`. Unknown values fall back at resolution time.
    #[serde(default)]
    pub user_type: UserType,

    /// `org_admin`, `doctor`, `nurse` or `staff`; `none` clears it. Ignored unless
    /// `user_type` is `organization`.
    #[serde(default, deserialize_with = "OrgRole::deserialize_optional")]
    pub org_role: Option<OrgRole>,
}

impl SessionConfig {
    /// The identity to seed the store with.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        Identity::new(self.user_type, self.org_role)
    }
}
