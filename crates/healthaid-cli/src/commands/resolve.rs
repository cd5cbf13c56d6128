use healthaid_core::{
    DashboardVariant, Identity, SidebarVariant, SignupVariant, ViewFamily, ViewSelector,
};
use healthaid_shell::{CompositionSite, DashboardSlot, RenderPass, Resolver, SidebarSlot, SignupSlot};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ResolveResponse {
    identity: Identity,
    selector: ViewSelector,
    family: ViewFamily,
    sidebar: &'static str,
    dashboard: &'static str,
    signup: &'static str,
    revision: u64,
}

impl ResolveResponse {
    fn from_pass(pass: &RenderPass) -> Self {
        let sidebar: SidebarVariant = SidebarSlot::select(pass);
        let dashboard: DashboardVariant = DashboardSlot::select(pass);
        let signup: SignupVariant = SignupSlot::select(pass);
        Self {
            identity: pass.identity(),
            selector: pass.selector(),
            family: pass.selector().family(),
            sidebar: sidebar.component_name(),
            dashboard: dashboard.component_name(),
            signup: signup.component_name(),
            revision: pass.revision(),
        }
    }
}

/// Handle `haid resolve`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pass = RenderPass::begin(ctx.app.store().scope(), &Resolver::new(), "resolve")?;
    output(&ResolveResponse::from_pass(&pass), flags.format)
}
