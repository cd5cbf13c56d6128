use healthaid_shell::{Page, Route, ShellKind};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteRow {
    path: &'static str,
    shell: ShellKind,
    page: &'static str,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        let page = match route.page {
            Page::Landing => "Landing",
            Page::Login => "Login",
            Page::Signup => "Signup (role-resolved)",
            Page::Dashboard => "Dashboard (role-resolved)",
            Page::Screen { name } => name,
            Page::Blank => "(empty)",
        };
        Self {
            path: route.path,
            shell: route.shell(),
            page,
        }
    }
}

/// Handle `haid routes`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx
        .app
        .routes()
        .routes()
        .iter()
        .map(RouteRow::from)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
