use crate::cli::StrategyArg;
use configurator_kernel::{ModuleSet, ResolveOptions, ResolveStrategy};
use configurator_manifest::load_module_set;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `filter`; with neither set only warnings are shown,
/// so stdout stays clean for `--json` consumers.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(filter.unwrap_or(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .init();
}

pub fn load_set_or_exit(manifest_arg: &str) -> (ModuleSet, PathBuf) {
    let path = PathBuf::from(manifest_arg);
    if !path.exists() {
        eprintln!("error: manifest not found: {}", path.display());
        std::process::exit(1);
    }

    let set = load_module_set(&path).unwrap_or_else(|e| {
        eprintln!("error: failed to load {}: {e}", path.display());
        std::process::exit(1);
    });
    (set, path)
}

pub fn resolve_options(strategy: StrategyArg, no_memo: bool) -> ResolveOptions {
    let strategy = match strategy {
        StrategyArg::Recursive => ResolveStrategy::Recursive,
        StrategyArg::WorkStack => ResolveStrategy::WorkStack,
    };
    ResolveOptions::default()
        .with_strategy(strategy)
        .with_memoize(!no_memo)
}

pub fn print_json(payload: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
