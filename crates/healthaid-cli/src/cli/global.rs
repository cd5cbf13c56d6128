use clap::{Args, ValueEnum};
use healthaid_core::{Identity, OrgRole, UserType};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to JSON.
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or_else(|_| {
            tracing::warn!(value, "unknown general.default_format; using json");
            Self::Json
        })
    }
}

/// Identity flags: stand-ins for what the auth collaborator would report.
#[derive(Clone, Debug, Default, Args)]
pub struct IdentityArgs {
    /// User type: admin, user, organization (unknown values fall back to the common view)
    #[arg(long, global = true)]
    pub user_type: Option<String>,

    /// Organization role: org_admin, doctor, nurse, staff, or none
    #[arg(long, global = true)]
    pub org_role: Option<String>,
}

impl IdentityArgs {
    /// Apply the flags on top of a base identity, user type first.
    pub fn apply(&self, base: Identity) -> Identity {
        let mut identity = base;
        if let Some(user_type) = &self.user_type {
            identity = identity.with_user_type(UserType::parse_lenient(user_type));
        }
        if let Some(org_role) = &self.org_role {
            identity = identity.with_org_role(parse_org_role(org_role));
        }
        identity
    }
}

/// `none` (any case) or empty clears the role.
pub fn parse_org_role(value: &str) -> Option<OrgRole> {
    OrgRole::parse_optional(value)
}

/// Global flags available before or after subcommands, resolved against config.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub identity: IdentityArgs,
}
