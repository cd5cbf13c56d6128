use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Resolve => commands::resolve::handle(ctx, flags),
        Commands::Render(args) => commands::render::handle(args, ctx, flags),
        Commands::Routes => commands::routes::handle(ctx, flags),
        Commands::Replay(args) => commands::replay::handle(args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
