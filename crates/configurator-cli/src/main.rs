//! Configurator CLI: the `configurator` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.log_filter.as_deref());

    match cli.command {
        Commands::Resolve {
            manifest,
            modules,
            strategy,
            no_memo,
            json,
        } => commands::resolve::run(manifest, modules, strategy, no_memo, json),

        Commands::Check { manifest, json } => commands::check::run(manifest, json),
    }
}
