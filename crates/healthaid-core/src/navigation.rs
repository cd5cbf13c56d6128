//! Static sidebar navigation entries.

use schemars::JsonSchema;
use serde::Serialize;

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

pub const DASHBOARD_PATH: &str = "/app/dashboard";

pub const COMMON_USER: &[NavItem] = &[
    item("Dashboard", DASHBOARD_PATH),
    item("Journal", "/app/journal"),
    item("Meds", "/app/meds"),
    item("Inventory", "/app/inventory"),
    item("Symptom Checker", "/app/symptom-checker"),
    item("Drug Checker", "/app/drug-checker"),
    item("First Aid", "/app/first-aid"),
    item("Settings", "/app/settings"),
];

pub const ORG_ADMIN: &[NavItem] = &[
    item("Dashboard", DASHBOARD_PATH),
    item("Users", "/app/users"),
    item("Reports", "/app/reports"),
];

// Staff see the same pages as the org admin under clinical labels.
pub const ORG_STAFF: &[NavItem] = &[
    item("Dashboard", DASHBOARD_PATH),
    item("Patients", "/app/users"),
    item("Appointments", "/app/reports"),
];

pub const ADMIN: &[NavItem] = &[
    item("Dashboard", DASHBOARD_PATH),
    item("Users", "/app/users"),
    item("Organizations", "/app/organizations"),
    item("Reports", "/app/reports"),
    item("Settings", "/app/settings"),
];

/// Every entry of every sidebar, in declaration order.
pub fn all() -> impl Iterator<Item = &'static NavItem> {
    [COMMON_USER, ORG_ADMIN, ORG_STAFF, ADMIN]
        .into_iter()
        .flat_map(|items| items.iter())
}
