//! Serializable resolution report.
//!
//! Wraps one resolution call into a stable JSON shape: an accepted report
//! carries the resolved map, a rejected one carries the failure class and
//! the detected cycle.

use crate::module::{ModuleId, ModuleSet, ResolvedAttributeMap};
use crate::resolve::ResolveOptions;
use serde::{Deserialize, Serialize};

pub const RESOLUTION_REPORT_KIND: &str = "configurator.resolve.v1";

const RESULT_ACCEPTED: &str = "accepted";
const RESULT_REJECTED: &str = "rejected";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub module_count: usize,
    pub referenced_only_count: usize,
    pub attribute_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub check_kind: String,
    pub result: String,
    pub failure_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<ModuleId>>,
    pub resolved: ResolvedAttributeMap,
    pub summary: ResolutionSummary,
}

impl ResolutionReport {
    pub fn accepted(&self) -> bool {
        self.result == RESULT_ACCEPTED
    }
}

/// Resolve `set` and fold the outcome into a report. Never fails.
pub fn build_resolution_report(set: &ModuleSet, options: ResolveOptions) -> ResolutionReport {
    let module_count = set.len();
    let referenced_only_count = set.referenced_ids().len();

    match set.resolve_with(options) {
        Ok(resolved) => {
            let attribute_count = resolved.values().map(Vec::len).sum();
            ResolutionReport {
                check_kind: RESOLUTION_REPORT_KIND.to_string(),
                result: RESULT_ACCEPTED.to_string(),
                failure_classes: Vec::new(),
                cycle: None,
                resolved,
                summary: ResolutionSummary {
                    module_count,
                    referenced_only_count,
                    attribute_count,
                },
            }
        }
        Err(err) => ResolutionReport {
            check_kind: RESOLUTION_REPORT_KIND.to_string(),
            result: RESULT_REJECTED.to_string(),
            failure_classes: vec![err.kind().failure_class().to_string()],
            cycle: Some(err.cycle().to_vec()),
            resolved: ResolvedAttributeMap::new(),
            summary: ResolutionSummary {
                module_count,
                referenced_only_count,
                attribute_count: 0,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FAILURE_CLASS_CIRCULAR_DEPENDENCY;

    fn worked_example() -> ModuleSet {
        let mut set = ModuleSet::new();
        set.declare("1", ["a", "b"], ["6"])
            .declare("2", ["c"], Vec::<String>::new())
            .declare("3", ["d"], ["4"])
            .declare("4", ["e"], ["1", "2"])
            .declare("5", ["f"], ["6"])
            .declare("6", ["g"], Vec::<String>::new());
        set
    }

    #[test]
    fn accepted_report_snapshot() {
        let report = build_resolution_report(&worked_example(), ResolveOptions::default());
        assert!(report.accepted());
        insta::assert_json_snapshot!(report, @r#"
        {
          "checkKind": "configurator.resolve.v1",
          "result": "accepted",
          "failureClasses": [],
          "resolved": {
            "1": [
              "a",
              "b",
              "g"
            ],
            "2": [
              "c"
            ],
            "3": [
              "d",
              "e",
              "a",
              "b",
              "g",
              "c"
            ],
            "4": [
              "e",
              "a",
              "b",
              "g",
              "c"
            ],
            "5": [
              "f",
              "g"
            ],
            "6": [
              "g"
            ]
          },
          "summary": {
            "moduleCount": 6,
            "referencedOnlyCount": 0,
            "attributeCount": 18
          }
        }
        "#);
    }

    #[test]
    fn rejected_report_carries_cycle() {
        let mut set = ModuleSet::new();
        set.declare("mod:1", ["dep:1"], ["mod:2"])
            .declare("mod:2", ["dep:2"], ["mod:1", "mod:ghost"]);

        let report = build_resolution_report(&set, ResolveOptions::default());
        assert!(!report.accepted());
        assert_eq!(
            report.failure_classes,
            vec![FAILURE_CLASS_CIRCULAR_DEPENDENCY.to_string()]
        );
        assert_eq!(
            report.cycle.as_deref(),
            Some(&["mod:1".to_string(), "mod:2".to_string(), "mod:1".to_string()][..])
        );
        assert!(report.resolved.is_empty());
        assert_eq!(report.summary.module_count, 2);
        assert_eq!(report.summary.referenced_only_count, 1);
    }
}
