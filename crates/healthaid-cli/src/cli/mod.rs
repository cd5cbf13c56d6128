use clap::Parser;
use healthaid_config::HealthaidConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, IdentityArgs, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `haid` binary.
#[derive(Debug, Parser)]
#[command(
    name = "haid",
    version,
    about = "HealthAid - role-based view composition for the application shell"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub identity: IdentityArgs,
}

impl Cli {
    /// Extract global flags, filling gaps from configuration.
    #[must_use]
    pub fn global_flags(&self, config: &HealthaidConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&config.general.default_format)),
            quiet: self.quiet,
            identity: self.identity.clone(),
        }
    }
}
