use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve the session identity to its view selector and variants.
    Resolve,
    /// Run one composition pass for a path and print the render tree.
    Render(RenderArgs),
    /// List the route table.
    Routes,
    /// Apply identity mutations in order and report what subscribers observe.
    Replay(ReplayArgs),
    /// Print the JSON Schema of a public type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Path to render, e.g. /app/dashboard
    pub path: String,

    /// Render every role-resolved site as this selector (admin_view, common_user_view, org_admin_view, org_staff_view)
    #[arg(long)]
    pub force_view: Option<String>,

    /// Viewport width (px); overrides shell.viewport_width
    #[arg(long)]
    pub viewport_width: Option<u32>,

    /// Start with the sidebar collapsed
    #[arg(long)]
    pub collapsed: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ReplayArgs {
    /// Steps: user_type=<type> or org_role=<role|none>
    #[arg(required = true)]
    pub steps: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    Identity,
    RenderTree,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe
    pub kind: SchemaKind,
}
