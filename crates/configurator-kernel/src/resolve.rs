//! Recursive dependency closure.
//!
//! A module's resolved list is its own attributes followed by, for each
//! dependency in declared order, that dependency's complete resolved list.
//! This is a pre-order, depth-first flattening with no deduplication.
//!
//! Cycle detection uses the active expansion path only. Shared
//! dependencies (diamonds) are revisited freely; a module reappearing on
//! its own path aborts the whole call.

use crate::error::ResolveError;
use crate::module::{
    DependencyGraph, ModuleAttributeMap, ResolvedAttributeMap, declared_ids, dependencies_of,
    own_attributes,
};
use crate::work_stack::resolve_dependants_iterative;
use std::collections::{HashMap, HashSet};

/// How the closure is computed. Both strategies are observably identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveStrategy {
    /// Call-stack recursion; depth bounded by the longest chain.
    #[default]
    Recursive,
    /// Explicit frame stack; safe for arbitrarily deep chains.
    WorkStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    pub strategy: ResolveStrategy,
    /// Cache completed modules within one call. Only honored by
    /// [`ResolveStrategy::Recursive`]; the work stack always caches.
    pub memoize: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            strategy: ResolveStrategy::Recursive,
            memoize: true,
        }
    }
}

impl ResolveOptions {
    pub fn with_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

/// Stateless resolver; all transient state lives in a single call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve every module keyed in either map.
    pub fn resolve(
        &self,
        attributes: &ModuleAttributeMap,
        graph: &DependencyGraph,
    ) -> Result<ResolvedAttributeMap, ResolveError> {
        let result = match self.options.strategy {
            ResolveStrategy::Recursive => {
                resolve_recursive(attributes, graph, self.options.memoize)
            }
            ResolveStrategy::WorkStack => resolve_dependants_iterative(attributes, graph),
        };

        match &result {
            Ok(resolved) => tracing::debug!(
                strategy = ?self.options.strategy,
                modules = resolved.len(),
                "dependency closure resolved"
            ),
            Err(err) => tracing::warn!(
                strategy = ?self.options.strategy,
                cycle = ?err.cycle(),
                "dependency closure aborted"
            ),
        }

        result
    }
}

/// Resolve the full attribute closure of every declared module.
///
/// The output key set is the union of the key sets of `attributes` and
/// `graph`. Modules referenced only inside dependency lists are valid
/// targets with an empty attribute list but are not reported.
pub fn resolve_dependants(
    attributes: &ModuleAttributeMap,
    graph: &DependencyGraph,
) -> Result<ResolvedAttributeMap, ResolveError> {
    Resolver::default().resolve(attributes, graph)
}

fn resolve_recursive(
    attributes: &ModuleAttributeMap,
    graph: &DependencyGraph,
    memoize: bool,
) -> Result<ResolvedAttributeMap, ResolveError> {
    let mut walk = Walk {
        attributes,
        graph,
        path: Vec::new(),
        on_path: HashSet::new(),
        memo: memoize.then(HashMap::new),
    };

    let mut resolved = ResolvedAttributeMap::new();
    for id in declared_ids(attributes, graph) {
        let list = walk.resolve(id)?;
        tracing::debug!(module = id, attributes = list.len(), "module resolved");
        resolved.insert(id.to_string(), list);
    }
    Ok(resolved)
}

struct Walk<'a> {
    attributes: &'a ModuleAttributeMap,
    graph: &'a DependencyGraph,
    /// Active expansion path, outermost first.
    path: Vec<&'a str>,
    on_path: HashSet<&'a str>,
    /// Completed modules. Never holds a module that is on the path.
    memo: Option<HashMap<&'a str, Vec<String>>>,
}

impl<'a> Walk<'a> {
    fn resolve(&mut self, id: &'a str) -> Result<Vec<String>, ResolveError> {
        if self.on_path.contains(id) {
            return Err(cycle_error(&self.path, id));
        }
        if let Some(done) = self.memo.as_ref().and_then(|memo| memo.get(id)) {
            return Ok(done.clone());
        }

        self.path.push(id);
        self.on_path.insert(id);

        let mut result = own_attributes(self.attributes, id).to_vec();
        for dep in dependencies_of(self.graph, id) {
            let dep_list = self.resolve(dep)?;
            result.extend(dep_list);
        }

        self.path.pop();
        self.on_path.remove(id);

        if let Some(memo) = self.memo.as_mut() {
            memo.insert(id, result.clone());
        }
        Ok(result)
    }
}

/// Build the cycle error from the active path and the module that repeated.
pub(crate) fn cycle_error(path: &[&str], repeated: &str) -> ResolveError {
    let start = path
        .iter()
        .position(|id| *id == repeated)
        .unwrap_or_default();
    ResolveError::circular(path[start..].iter().copied().chain([repeated]))
}
