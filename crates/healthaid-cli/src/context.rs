use std::ffi::OsString;

use healthaid_config::HealthaidConfig;
use healthaid_shell::{App, IdentityStore, SidebarState};

use crate::cli::IdentityArgs;

/// Session state shared by every command: the configured app root.
pub struct AppContext {
    pub app: App,
    pub config: HealthaidConfig,
}

impl AppContext {
    /// Seed the store from `[session]`, then apply identity flags on top.
    pub fn init(config: HealthaidConfig, identity: &IdentityArgs) -> Self {
        let seeded = identity.apply(config.session.identity());
        tracing::debug!(identity = %seeded, "identity store seeded");

        let sidebar = initial_sidebar(&config, None, false);
        let app = App::new(IdentityStore::with_identity(seeded)).with_sidebar(sidebar);

        Self { app, config }
    }
}

/// Sidebar state at mount time: collapsed below the breakpoint or when asked.
pub fn initial_sidebar(
    config: &HealthaidConfig,
    viewport_width: Option<u32>,
    collapsed: bool,
) -> SidebarState {
    if collapsed || config.shell.sidebar_collapsed {
        return SidebarState::Collapsed;
    }
    let width = viewport_width.unwrap_or(config.shell.viewport_width);
    SidebarState::for_viewport(width, config.shell.desktop_breakpoint)
}

/// Warn about environment variables that look like settings but never reach figment.
pub fn warn_unconfigured(config: &HealthaidConfig) {
    for (key, hint) in unconfigured_hints(std::env::vars_os().map(|(key, _)| key)) {
        tracing::warn!(variable = %key, expected = %hint, "ignored: nested settings use a double underscore");
    }

    if config.session.org_role.is_some() && !config.session.identity().is_organization() {
        tracing::warn!(
            user_type = %config.session.user_type,
            "session.org_role is set but ignored for non-organization users"
        );
    }
}

/// Non-UTF-8 names are skipped; they can never match a setting.
fn unconfigured_hints(keys: impl IntoIterator<Item = OsString>) -> Vec<(String, String)> {
    keys.into_iter()
        .filter_map(|key| key.into_string().ok())
        .filter_map(|key| single_underscore_hint(&key).map(|hint| (key, hint)))
        .collect()
}

fn single_underscore_hint(key: &str) -> Option<String> {
    let rest = key.strip_prefix(healthaid_config::ENV_PREFIX)?;
    if rest.contains("__") {
        return None;
    }
    ["SESSION_", "SHELL_", "GENERAL_"].iter().find_map(|section| {
        rest.strip_prefix(section).map(|field| {
            let section = section.trim_end_matches('_');
            format!("{}{section}__{field}", healthaid_config::ENV_PREFIX)
        })
    })
}
