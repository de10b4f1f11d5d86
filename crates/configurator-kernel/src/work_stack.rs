//! Iterative dependency closure over an explicit frame stack.
//!
//! Produces exactly what the recursive resolver produces, including the
//! reported cycle, without growing the call stack with graph depth.

use crate::error::ResolveError;
use crate::module::{
    DependencyGraph, ModuleAttributeMap, ResolvedAttributeMap, declared_ids, dependencies_of,
    own_attributes,
};
use crate::resolve::cycle_error;
use std::collections::{HashMap, HashSet};

/// One module under expansion.
struct Frame<'a> {
    module: &'a str,
    deps: &'a [String],
    next_dep: usize,
    acc: Vec<String>,
}

impl<'a> Frame<'a> {
    fn open(
        attributes: &'a ModuleAttributeMap,
        graph: &'a DependencyGraph,
        module: &'a str,
    ) -> Self {
        Self {
            module,
            deps: dependencies_of(graph, module),
            next_dep: 0,
            acc: own_attributes(attributes, module).to_vec(),
        }
    }
}

/// Resolve every declared module without recursion.
pub fn resolve_dependants_iterative(
    attributes: &ModuleAttributeMap,
    graph: &DependencyGraph,
) -> Result<ResolvedAttributeMap, ResolveError> {
    let mut done: HashMap<&str, Vec<String>> = HashMap::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut on_path: HashSet<&str> = HashSet::new();

    for root in declared_ids(attributes, graph) {
        if !done.contains_key(root) {
            stack.push(Frame::open(attributes, graph, root));
            on_path.insert(root);
        }

        while let Some(top) = stack.last_mut() {
            let deps = top.deps;
            if let Some(dep) = deps.get(top.next_dep) {
                top.next_dep += 1;
                let dep = dep.as_str();

                if on_path.contains(dep) {
                    let path: Vec<&str> = stack.iter().map(|frame| frame.module).collect();
                    return Err(cycle_error(&path, dep));
                }
                if let Some(list) = done.get(dep) {
                    top.acc.extend_from_slice(list);
                    continue;
                }

                stack.push(Frame::open(attributes, graph, dep));
                on_path.insert(dep);
                continue;
            }

            let Some(finished) = stack.pop() else {
                break;
            };
            on_path.remove(finished.module);
            if let Some(parent) = stack.last_mut() {
                parent.acc.extend_from_slice(&finished.acc);
            }
            done.insert(finished.module, finished.acc);
        }

        let list = done.get(root).cloned().unwrap_or_default();
        tracing::debug!(module = root, attributes = list.len(), "module resolved");
    }

    Ok(declared_ids(attributes, graph)
        .into_iter()
        .map(|id| (id.to_string(), done.remove(id).unwrap_or_default()))
        .collect())
}
