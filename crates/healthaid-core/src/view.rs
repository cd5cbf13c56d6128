//! View selector tags and the presentational variants they select.
//!
//! A [`ViewSelector`] is derived from an identity and never stored. Each
//! composition site maps it onto its own variant enum; all variants map 1:1
//! onto an opaque component name that the host renders.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::identity::UserType;
use crate::navigation::{self, NavItem};

// ---------------------------------------------------------------------------
// ViewSelector
// ---------------------------------------------------------------------------

/// Resolved role-specific experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewSelector {
    AdminView,
    CommonUserView,
    OrgAdminView,
    OrgStaffView,
}

impl ViewSelector {
    pub const ALL: [Self; 4] = [
        Self::AdminView,
        Self::CommonUserView,
        Self::OrgAdminView,
        Self::OrgStaffView,
    ];

    const KNOWN: &'static str = "admin_view, common_user_view, org_admin_view, org_staff_view";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdminView => "admin_view",
            Self::CommonUserView => "common_user_view",
            Self::OrgAdminView => "org_admin_view",
            Self::OrgStaffView => "org_staff_view",
        }
    }

    #[must_use]
    pub const fn family(self) -> ViewFamily {
        match self {
            Self::AdminView => ViewFamily::Admin,
            Self::CommonUserView => ViewFamily::CommonUser,
            Self::OrgAdminView | Self::OrgStaffView => ViewFamily::Organization,
        }
    }
}

impl FromStr for ViewSelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|selector| selector.as_str() == wanted)
            .ok_or_else(|| CoreError::unknown("view selector", s, Self::KNOWN))
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ViewFamily
// ---------------------------------------------------------------------------

/// Coarse grouping of selectors. Sites rendered from one snapshot always agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewFamily {
    Admin,
    CommonUser,
    Organization,
}

impl ViewFamily {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::CommonUser => "common_user",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for ViewFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SidebarVariant
// ---------------------------------------------------------------------------

/// Sidebar chrome rendered by the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SidebarVariant {
    Admin,
    Common,
    Org,
    Staff,
}

impl SidebarVariant {
    #[must_use]
    pub const fn component_name(self) -> &'static str {
        match self {
            Self::Admin => "AdminSidebar",
            Self::Common => "CommonUserSidebar",
            Self::Org => "OrgSidebar",
            Self::Staff => "StaffSidebar",
        }
    }

    /// Navigation entries shown by this sidebar, top to bottom.
    #[must_use]
    pub const fn nav_items(self) -> &'static [NavItem] {
        match self {
            Self::Admin => navigation::ADMIN,
            Self::Common => navigation::COMMON_USER,
            Self::Org => navigation::ORG_ADMIN,
            Self::Staff => navigation::ORG_STAFF,
        }
    }

    #[must_use]
    pub const fn selector(self) -> ViewSelector {
        match self {
            Self::Admin => ViewSelector::AdminView,
            Self::Common => ViewSelector::CommonUserView,
            Self::Org => ViewSelector::OrgAdminView,
            Self::Staff => ViewSelector::OrgStaffView,
        }
    }

    #[must_use]
    pub const fn family(self) -> ViewFamily {
        self.selector().family()
    }
}

impl From<ViewSelector> for SidebarVariant {
    fn from(selector: ViewSelector) -> Self {
        match selector {
            ViewSelector::AdminView => Self::Admin,
            ViewSelector::CommonUserView => Self::Common,
            ViewSelector::OrgAdminView => Self::Org,
            ViewSelector::OrgStaffView => Self::Staff,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardVariant
// ---------------------------------------------------------------------------

/// Page body rendered at `/app/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Admin,
    Common,
    Org,
    Staff,
}

impl DashboardVariant {
    #[must_use]
    pub const fn component_name(self) -> &'static str {
        match self {
            Self::Admin => "AdminDashboard",
            Self::Common => "CommonUserDashboard",
            Self::Org => "OrgDashboard",
            Self::Staff => "StaffDashboard",
        }
    }

    #[must_use]
    pub const fn selector(self) -> ViewSelector {
        match self {
            Self::Admin => ViewSelector::AdminView,
            Self::Common => ViewSelector::CommonUserView,
            Self::Org => ViewSelector::OrgAdminView,
            Self::Staff => ViewSelector::OrgStaffView,
        }
    }

    #[must_use]
    pub const fn family(self) -> ViewFamily {
        self.selector().family()
    }
}

impl From<ViewSelector> for DashboardVariant {
    fn from(selector: ViewSelector) -> Self {
        match selector {
            ViewSelector::AdminView => Self::Admin,
            ViewSelector::CommonUserView => Self::Common,
            ViewSelector::OrgAdminView => Self::Org,
            ViewSelector::OrgStaffView => Self::Staff,
        }
    }
}

// ---------------------------------------------------------------------------
// SignupVariant
// ---------------------------------------------------------------------------

/// Signup form shown at `/signup`. Organization admins and staff share one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignupVariant {
    AppAdmin,
    CommonUser,
    Organization,
}

impl SignupVariant {
    /// Pick the form from the user type alone; unknown types get the common form.
    #[must_use]
    pub const fn for_user_type(user_type: UserType) -> Self {
        match user_type {
            UserType::Admin => Self::AppAdmin,
            UserType::Organization => Self::Organization,
            UserType::User | UserType::Unrecognized => Self::CommonUser,
        }
    }

    #[must_use]
    pub const fn component_name(self) -> &'static str {
        match self {
            Self::AppAdmin => "AppAdminSignup",
            Self::CommonUser => "CommonUserSignup",
            Self::Organization => "OrgSignup",
        }
    }

    #[must_use]
    pub const fn family(self) -> ViewFamily {
        match self {
            Self::AppAdmin => ViewFamily::Admin,
            Self::CommonUser => ViewFamily::CommonUser,
            Self::Organization => ViewFamily::Organization,
        }
    }
}

impl From<ViewFamily> for SignupVariant {
    fn from(family: ViewFamily) -> Self {
        match family {
            ViewFamily::Admin => Self::AppAdmin,
            ViewFamily::CommonUser => Self::CommonUser,
            ViewFamily::Organization => Self::Organization,
        }
    }
}
