use crate::support::{load_set_or_exit, yes_no};
use configurator_kernel::{ResolveOptions, build_resolution_report};
use serde_json::json;

pub fn run(manifest: String, json_output: bool) {
    let (set, manifest_path) = load_set_or_exit(&manifest);
    let report = build_resolution_report(&set, ResolveOptions::default());

    if json_output {
        let payload = json!({
            "checkKind": report.check_kind,
            "result": report.result,
            "manifestPath": manifest_path.display().to_string(),
            "failureClasses": report.failure_classes,
            "cycle": report.cycle,
            "summary": report.summary,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("configurator check");
        println!("  Source: {}", manifest_path.display());
        println!("  Modules: {}", report.summary.module_count);
        println!("  Referenced only: {}", report.summary.referenced_only_count);
        println!("  Acyclic: {}", yes_no(report.accepted()));
        if let Some(cycle) = &report.cycle {
            println!("  Cycle: {}", cycle.join(" -> "));
        }
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}
