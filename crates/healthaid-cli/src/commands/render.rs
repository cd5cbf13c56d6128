use anyhow::Context;
use healthaid_core::ViewSelector;
use healthaid_shell::{Resolver, compose};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::context::{AppContext, initial_sidebar};
use crate::output::output;

/// Handle `haid render`.
pub fn handle(args: &RenderArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resolver = resolver_for(args.force_view.as_deref())?;
    let sidebar = initial_sidebar(&ctx.config, args.viewport_width, args.collapsed);

    let app = &ctx.app;
    let tree = compose(&args.path, app.routes(), app.store().scope(), &resolver, sidebar)
        .with_context(|| format!("failed to render {}", args.path))?;

    output(&tree, flags.format)
}

/// Build the resolver, honoring an explicit `--force-view`.
fn resolver_for(force_view: Option<&str>) -> anyhow::Result<Resolver> {
    let Some(raw) = force_view else {
        return Ok(Resolver::new());
    };

    let selector: ViewSelector = raw.parse().context("invalid --force-view")?;
    tracing::warn!(%selector, "view selector forced; role resolution is bypassed");
    Ok(Resolver::forced(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_force_view_uses_role_resolution() {
        assert_eq!(resolver_for(None).unwrap(), Resolver::new());
    }

    #[test]
    fn force_view_parses_selector_names() {
        let resolver = resolver_for(Some("org_staff_view")).unwrap();
        assert_eq!(resolver.forced_selector(), Some(ViewSelector::OrgStaffView));
    }

    #[test]
    fn unknown_force_view_is_an_error() {
        let error = resolver_for(Some("superuser_view")).unwrap_err();
        assert!(format!("{error:#}").contains("--force-view"));
    }
}
