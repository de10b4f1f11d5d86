use crate::cli::StrategyArg;
use crate::support::{load_set_or_exit, print_json, resolve_options};
use configurator_kernel::build_resolution_report;

pub fn run(
    manifest: String,
    modules: Vec<String>,
    strategy: StrategyArg,
    no_memo: bool,
    json_output: bool,
) {
    let (set, manifest_path) = load_set_or_exit(&manifest);

    let declared = set.module_ids();
    if let Some(unknown) = modules.iter().find(|id| !declared.contains(id.as_str())) {
        eprintln!(
            "error: module `{unknown}` is not declared in {}",
            manifest_path.display()
        );
        std::process::exit(1);
    }

    let options = resolve_options(strategy, no_memo);
    tracing::info!(
        manifest = %manifest_path.display(),
        modules = declared.len(),
        ?options,
        "resolving module set"
    );
    let mut report = build_resolution_report(&set, options);

    if !report.accepted() {
        if json_output {
            print_json(&report);
        } else {
            let cycle = report.cycle.as_deref().unwrap_or_default();
            eprintln!("error: circular dependency: {}", cycle.join(" -> "));
        }
        std::process::exit(1);
    }

    if !modules.is_empty() {
        report.resolved.retain(|id, _| modules.contains(id));
    }

    if json_output {
        print_json(&report);
    } else {
        println!("configurator resolve");
        println!("  Source: {}", manifest_path.display());
        println!("  Modules: {}", report.summary.module_count);
        for (id, attributes) in &report.resolved {
            println!("  {id}: [{}]", attributes.join(", "));
        }
    }
}
