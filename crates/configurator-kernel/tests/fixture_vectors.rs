//! Integration tests: resolve the fixture vectors under every strategy.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the `attributes` and `graph` maps
//! - expect.json: either the accepted `resolved` map, or the rejected
//!   `failureClass` and `cycle`

use configurator_kernel::{
    DependencyGraph, ModuleAttributeMap, ResolveOptions, ResolveStrategy, Resolver,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct Case {
    #[serde(default)]
    attributes: ModuleAttributeMap,
    #[serde(default)]
    graph: DependencyGraph,
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

fn all_options() -> [ResolveOptions; 3] {
    [
        ResolveOptions::default(),
        ResolveOptions::default().with_memoize(false),
        ResolveOptions::default().with_strategy(ResolveStrategy::WorkStack),
    ]
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);
    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case: Case = serde_json::from_value(read_json(&case_path))
        .unwrap_or_else(|e| panic!("malformed case {}: {e}", case_path.display()));
    let expected = read_json(&expect_path);

    for options in all_options() {
        let outcome = Resolver::new(options).resolve(&case.attributes, &case.graph);
        let got = match outcome {
            Ok(resolved) => serde_json::json!({
                "result": "accepted",
                "resolved": resolved,
            }),
            Err(err) => serde_json::json!({
                "result": "rejected",
                "failureClass": err.kind().failure_class(),
                "cycle": err.cycle(),
            }),
        };

        assert_eq!(
            got,
            expected,
            "\n\nFixture: {name}\nOptions: {options:?}\n\nGot:\n{}\n\nExpected:\n{}\n",
            serde_json::to_string_pretty(&got).unwrap(),
            serde_json::to_string_pretty(&expected).unwrap(),
        );
    }
}

#[test]
fn linear() {
    run_fixture("linear");
}

#[test]
fn dependants() {
    run_fixture("dependants");
}

#[test]
fn diamond() {
    run_fixture("diamond");
}

#[test]
fn disjoint_keys() {
    run_fixture("disjoint_keys");
}

#[test]
fn circular_direct() {
    run_fixture("circular_direct");
}

#[test]
fn circular_high_level_separation() {
    run_fixture("circular_high_level_separation");
}

#[test]
fn circular_self_loop() {
    run_fixture("circular_self_loop");
}
