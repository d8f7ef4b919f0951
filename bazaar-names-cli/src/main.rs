//! bazaar-names CLI
//!
//! Builds `bazaar-conversions.json`, the table mapping SkyBlock Bazaar product
//! IDs to display names.

mod cli_types;
mod commands;
mod error;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(Commands::Format { id, name }) => {
            commands::format::run_format(&id, name.as_deref());
            Ok(())
        }
        None => commands::generate::run_generate(cli.generate, cli.quiet),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the flags when set.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = format!(
        "warn,bazaar_names={level},bazaar_names_lib={level},bazaar_names_api={level}"
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(if verbose {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .format_target(false)
        .init();
}
