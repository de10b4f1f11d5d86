use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "configurator",
    about = "Configurator: resolve module attributes through their dependency graph",
    version
)]
pub struct Cli {
    /// Log filter directive (RUST_LOG takes precedence), e.g. `debug`
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every module's full attribute list
    Resolve {
        /// Path to the module manifest (.toml or .json)
        #[arg(long, default_value = "configurator.toml")]
        manifest: String,

        /// Only print these modules (repeatable); the whole graph is still resolved
        #[arg(long = "module")]
        modules: Vec<String>,

        /// Closure strategy
        #[arg(long, value_enum, default_value = "recursive")]
        strategy: StrategyArg,

        /// Disable per-call memoization (recursive strategy only)
        #[arg(long)]
        no_memo: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the declared modules resolve without a cycle
    Check {
        /// Path to the module manifest (.toml or .json)
        #[arg(long, default_value = "configurator.toml")]
        manifest: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    #[value(name = "recursive")]
    Recursive,
    #[value(name = "work-stack")]
    WorkStack,
}
