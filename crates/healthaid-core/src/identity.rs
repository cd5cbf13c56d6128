//! The identity model: who is logged in, for UI purposes.
//!
//! Both enums serialize as lowercase `snake_case` strings. Deserialization is
//! lenient: a value outside the known set becomes `Unrecognized` (and is
//! logged) rather than an error, so that role resolution can apply its
//! fallback. Strict parsing is available through [`std::str::FromStr`].

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// UserType
// ---------------------------------------------------------------------------

/// Top-level kind of principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Admin,
    #[default]
    User,
    Organization,
    /// A value this build does not know about.
    Unrecognized,
}

impl UserType {
    pub const KNOWN: &'static str = "admin, user, organization";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Organization => "organization",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Parse without failing. Unknown input maps to [`UserType::Unrecognized`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "unrecognized user type; treating as unrecognized");
            Self::Unrecognized
        })
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "organization" => Ok(Self::Organization),
            _ => Err(CoreError::unknown("user type", s, Self::KNOWN)),
        }
    }
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<UserType> for String {
    fn from(value: UserType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrgRole
// ---------------------------------------------------------------------------

/// Role of a member inside an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrgRole {
    OrgAdmin,
    Doctor,
    Nurse,
    Staff,
    /// A value this build does not know about.
    Unrecognized,
}

impl OrgRole {
    pub const KNOWN: &'static str = "org_admin, doctor, nurse, staff";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrgAdmin => "org_admin",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Staff => "staff",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Parse without failing. Unknown input maps to [`OrgRole::Unrecognized`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "unrecognized organization role; treating as unrecognized");
            Self::Unrecognized
        })
    }

    /// Lenient parse where empty input or `none` (any case) means no role.
    #[must_use]
    pub fn parse_optional(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(Self::parse_lenient(trimmed))
        }
    }

    /// `deserialize_with` helper for optional role fields, see [`OrgRole::parse_optional`].
    pub fn deserialize_optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse_optional))
    }
}

impl FromStr for OrgRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "org_admin" => Ok(Self::OrgAdmin),
            "doctor" => Ok(Self::Doctor),
            "nurse" => Ok(Self::Nurse),
            "staff" => Ok(Self::Staff),
            _ => Err(CoreError::unknown("organization role", s, Self::KNOWN)),
        }
    }
}

impl From<String> for OrgRole {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<OrgRole> for String {
    fn from(value: OrgRole) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Snapshot of the logged-in principal.
///
/// `org_role` is always `None` unless `user_type` is
/// [`UserType::Organization`]; every constructor normalizes to keep that
/// true, including deserialization. The value is `Copy`, so a store hands
/// out whole snapshots and is never field-mutated from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema)]
pub struct Identity {
    #[schemars(with = "String")]
    user_type: UserType,
    #[schemars(with = "Option<String>")]
    org_role: Option<OrgRole>,
}

impl Identity {
    /// Build an identity, dropping `org_role` unless `user_type` is an organization.
    #[must_use]
    pub const fn new(user_type: UserType, org_role: Option<OrgRole>) -> Self {
        let org_role = match user_type {
            UserType::Organization => org_role,
            _ => None,
        };
        Self {
            user_type,
            org_role,
        }
    }

    #[must_use]
    pub const fn admin() -> Self {
        Self::new(UserType::Admin, None)
    }

    #[must_use]
    pub const fn user() -> Self {
        Self::new(UserType::User, None)
    }

    #[must_use]
    pub const fn organization(org_role: Option<OrgRole>) -> Self {
        Self::new(UserType::Organization, org_role)
    }

    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }

    #[must_use]
    pub const fn org_role(&self) -> Option<OrgRole> {
        self.org_role
    }

    #[must_use]
    pub const fn is_organization(&self) -> bool {
        matches!(self.user_type, UserType::Organization)
    }

    /// Same identity with a new user type. Leaving the organization clears the role.
    #[must_use]
    pub const fn with_user_type(self, user_type: UserType) -> Self {
        Self::new(user_type, self.org_role)
    }

    /// Same identity with a new org role. Inert unless this is an organization.
    #[must_use]
    pub const fn with_org_role(self, org_role: Option<OrgRole>) -> Self {
        Self::new(self.user_type, org_role)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            user_type: UserType,
            #[serde(default, deserialize_with = "OrgRole::deserialize_optional")]
            org_role: Option<OrgRole>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.user_type, raw.org_role))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.org_role {
            Some(role) => write!(f, "{}/{}", self.user_type, role),
            None => write!(f, "{}", self.user_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_identity_is_plain_user() {
        let identity = Identity::default();
        assert_eq!(identity.user_type(), UserType::User);
        assert_eq!(identity.org_role(), None);
    }

    #[rstest]
    #[case(UserType::Admin)]
    #[case(UserType::User)]
    #[case(UserType::Unrecognized)]
    fn non_organization_drops_role(#[case] user_type: UserType) {
        let identity = Identity::new(user_type, Some(OrgRole::OrgAdmin));
        assert_eq!(identity.org_role(), None);
    }

    #[test]
    fn organization_keeps_role() {
        let identity = Identity::organization(Some(OrgRole::Nurse));
        assert!(identity.is_organization());
        assert_eq!(identity.org_role(), Some(OrgRole::Nurse));
    }

    #[test]
    fn leaving_organization_clears_role() {
        let identity = Identity::organization(Some(OrgRole::OrgAdmin)).with_user_type(UserType::User);
        assert_eq!(identity, Identity::user());
    }

    #[test]
    fn org_role_is_inert_outside_organization() {
        let identity = Identity::admin().with_org_role(Some(OrgRole::Doctor));
        assert_eq!(identity, Identity::admin());
    }

    #[rstest]
    #[case("admin", UserType::Admin)]
    #[case("User", UserType::User)]
    #[case(" organization ", UserType::Organization)]
    fn user_type_parses_strictly(#[case] input: &str, #[case] expected: UserType) {
        assert_eq!(input.parse::<UserType>().unwrap(), expected);
    }

    #[test]
    fn strict_parse_rejects_unknown_user_type() {
        let err = "superuser".parse::<UserType>().unwrap_err();
        assert!(err.to_string().contains("superuser"));
    }

    #[test]
    fn lenient_parse_never_fails() {
        assert_eq!(UserType::parse_lenient("superuser"), UserType::Unrecognized);
        assert_eq!(OrgRole::parse_lenient("janitor"), OrgRole::Unrecognized);
        assert_eq!(OrgRole::parse_lenient("org_admin"), OrgRole::OrgAdmin);
    }

    #[rstest]
    #[case("none", None)]
    #[case(" NONE ", None)]
    #[case("", None)]
    #[case("nurse", Some(OrgRole::Nurse))]
    #[case("janitor", Some(OrgRole::Unrecognized))]
    fn optional_role_treats_none_as_absent(
        #[case] input: &str,
        #[case] expected: Option<OrgRole>,
    ) {
        assert_eq!(OrgRole::parse_optional(input), expected);
    }

    #[test]
    fn deserialization_reads_none_as_no_role() {
        let identity: Identity =
            serde_json::from_str(r#"{ "user_type": "organization", "org_role": "none" }"#).unwrap();
        assert_eq!(identity, Identity::organization(None));
    }

    #[test]
    fn serializes_as_snake_case_strings() {
        let json = serde_json::to_value(Identity::organization(Some(OrgRole::OrgAdmin))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user_type": "organization", "org_role": "org_admin" })
        );
    }

    #[test]
    fn deserialization_normalizes_stale_role() {
        let identity: Identity =
            serde_json::from_str(r#"{ "user_type": "user", "org_role": "doctor" }"#).unwrap();
        assert_eq!(identity, Identity::user());
    }

    #[test]
    fn deserialization_tolerates_unknown_values() {
        let identity: Identity =
            serde_json::from_str(r#"{ "user_type": "organization", "org_role": "janitor" }"#)
                .unwrap();
        assert_eq!(identity.org_role(), Some(OrgRole::Unrecognized));

        let identity: Identity = serde_json::from_str(r#"{ "user_type": "robot" }"#).unwrap();
        assert_eq!(identity.user_type(), UserType::Unrecognized);
    }

    #[test]
    fn display_includes_role_only_for_organizations() {
        assert_eq!(Identity::user().to_string(), "user");
        assert_eq!(
            Identity::organization(Some(OrgRole::Staff)).to_string(),
            "organization/staff"
        );
    }
}
