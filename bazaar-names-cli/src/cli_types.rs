//! CLI type definitions: command enum and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bazaar-names")]
#[command(
    about = "Generate the Bazaar product ID to display name table",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Defaults to generating the table when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to read from and write to. Every flag falls back to the config file,
/// then to the built-in defaults.
#[derive(Args, Clone, Default)]
pub(crate) struct GenerateArgs {
    /// Output file (default: ./bazaar-conversions.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// SkyBlock items endpoint
    #[arg(long)]
    pub items_url: Option<String>,

    /// Bazaar endpoint
    #[arg(long)]
    pub bazaar_url: Option<String>,

    /// TOML file with items_url, bazaar_url, output and user_agent keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the display name for one product ID without fetching anything
    Format {
        /// Bazaar product ID (e.g., ENCHANTMENT_TURBO_WHEAT_3)
        id: String,

        /// Catalog name to format, as the items API would return it
        #[arg(short, long)]
        name: Option<String>,
    },
}
