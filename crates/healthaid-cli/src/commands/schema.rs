use healthaid_core::Identity;
use healthaid_shell::RenderTree;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `haid schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.kind), flags.format)
}

fn schema(kind: SchemaKind) -> schemars::Schema {
    match kind {
        SchemaKind::Identity => schema_for!(Identity),
        SchemaKind::RenderTree => schema_for!(RenderTree),
    }
}
