//! Module data model: declared attributes and dependency edges.

use crate::error::ResolveError;
use crate::resolve::{ResolveOptions, Resolver};
use std::collections::{BTreeMap, BTreeSet};

/// Opaque module identifier.
pub type ModuleId = String;

/// Ordered attribute values declared by one module. Duplicates are kept.
pub type AttributeList = Vec<String>;

/// Module → own attributes. Absent keys mean an empty list.
pub type ModuleAttributeMap = BTreeMap<ModuleId, AttributeList>;

/// Module → dependency modules, in merge order. Absent keys mean no dependencies.
pub type DependencyGraph = BTreeMap<ModuleId, Vec<ModuleId>>;

/// Module → fully resolved attributes.
pub type ResolvedAttributeMap = BTreeMap<ModuleId, AttributeList>;

/// The complete declaration set handed to one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSet {
    attributes: ModuleAttributeMap,
    graph: DependencyGraph,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the two parallel maps.
    ///
    /// Key sets may be disjoint or overlapping.
    pub fn from_maps(attributes: ModuleAttributeMap, graph: DependencyGraph) -> Self {
        Self { attributes, graph }
    }

    /// Declare one module with its own attributes and dependencies.
    ///
    /// Re-declaring an ID replaces both of its entries.
    pub fn declare(
        &mut self,
        id: impl Into<ModuleId>,
        attributes: impl IntoIterator<Item = impl Into<String>>,
        depends_on: impl IntoIterator<Item = impl Into<ModuleId>>,
    ) -> &mut Self {
        let id = id.into();
        self.attributes
            .insert(id.clone(), attributes.into_iter().map(Into::into).collect());
        self.graph
            .insert(id, depends_on.into_iter().map(Into::into).collect());
        self
    }

    pub fn attributes(&self) -> &ModuleAttributeMap {
        &self.attributes
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Own attributes of `id`, empty when undeclared.
    pub fn own_attributes(&self, id: &str) -> &[String] {
        own_attributes(&self.attributes, id)
    }

    /// Declared dependencies of `id`, empty when undeclared.
    pub fn dependencies_of(&self, id: &str) -> &[ModuleId] {
        dependencies_of(&self.graph, id)
    }

    /// Every module that is a key of either map, ascending, each once.
    pub fn module_ids(&self) -> BTreeSet<&str> {
        declared_ids(&self.attributes, &self.graph)
    }

    /// IDs mentioned only inside dependency lists.
    pub fn referenced_ids(&self) -> BTreeSet<&str> {
        let declared = self.module_ids();
        self.graph
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|id| !declared.contains(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.module_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.graph.is_empty()
    }

    /// Resolve with the default options.
    pub fn resolve(&self) -> Result<ResolvedAttributeMap, ResolveError> {
        self.resolve_with(ResolveOptions::default())
    }

    pub fn resolve_with(
        &self,
        options: ResolveOptions,
    ) -> Result<ResolvedAttributeMap, ResolveError> {
        Resolver::new(options).resolve(&self.attributes, &self.graph)
    }
}

pub(crate) fn own_attributes<'a>(attributes: &'a ModuleAttributeMap, id: &str) -> &'a [String] {
    attributes.get(id).map(Vec::as_slice).unwrap_or_default()
}

pub(crate) fn dependencies_of<'a>(graph: &'a DependencyGraph, id: &str) -> &'a [ModuleId] {
    graph.get(id).map(Vec::as_slice).unwrap_or_default()
}

pub(crate) fn declared_ids<'a>(
    attributes: &'a ModuleAttributeMap,
    graph: &'a DependencyGraph,
) -> BTreeSet<&'a str> {
    attributes
        .keys()
        .chain(graph.keys())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_read_as_empty() {
        let set = ModuleSet::new();
        assert!(set.own_attributes("mod:missing").is_empty());
        assert!(set.dependencies_of("mod:missing").is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn module_ids_union_both_maps() {
        let attributes = ModuleAttributeMap::from([("mod:a".to_string(), vec!["x".to_string()])]);
        let graph = DependencyGraph::from([
            ("mod:b".to_string(), vec!["mod:a".to_string()]),
            ("mod:a".to_string(), Vec::new()),
        ]);
        let set = ModuleSet::from_maps(attributes, graph);

        assert_eq!(
            set.module_ids().into_iter().collect::<Vec<_>>(),
            vec!["mod:a", "mod:b"]
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn referenced_ids_excludes_declared_modules() {
        let mut set = ModuleSet::new();
        set.declare("mod:a", ["x"], ["mod:b", "mod:ghost"])
            .declare("mod:b", Vec::<String>::new(), Vec::<String>::new());

        assert_eq!(
            set.referenced_ids().into_iter().collect::<Vec<_>>(),
            vec!["mod:ghost"]
        );
    }

    #[test]
    fn declare_replaces_previous_entry() {
        let mut set = ModuleSet::new();
        set.declare("mod:a", ["x"], ["mod:b"]);
        set.declare("mod:a", ["y", "y"], Vec::<String>::new());

        assert_eq!(set.own_attributes("mod:a"), ["y", "y"]);
        assert!(set.dependencies_of("mod:a").is_empty());
    }
}
