//! Module declaration documents.
//!
//! A manifest lists modules either as `[[module]]` entries or as the two
//! parallel maps the kernel consumes, or both. Every module ID may be
//! declared at most once across the whole document.

use crate::format::ManifestFormat;
use configurator_kernel::{
    AttributeList, DependencyGraph, ModuleAttributeMap, ModuleId, ModuleSet,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while reading or validating a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported manifest format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid toml manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid json manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("module declared more than once: {0}")]
    DuplicateModule(ModuleId),

    #[error("module id must not be empty")]
    EmptyModuleId,
}

/// One module: its own attributes and the modules it depends on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub id: ModuleId,
    #[serde(default)]
    pub attributes: AttributeList,
    #[serde(default, alias = "dependsOn")]
    pub depends_on: Vec<ModuleId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(
        default,
        rename = "module",
        alias = "modules",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modules: Vec<ModuleDeclaration>,
    #[serde(default, skip_serializing_if = "ModuleAttributeMap::is_empty")]
    pub attributes: ModuleAttributeMap,
    #[serde(default, skip_serializing_if = "DependencyGraph::is_empty")]
    pub dependencies: DependencyGraph,
}

impl Manifest {
    /// Validate declarations and build the kernel input.
    pub fn into_module_set(self) -> Result<ModuleSet, ManifestError> {
        let Manifest {
            modules,
            mut attributes,
            mut dependencies,
        } = self;

        let mut seen: BTreeSet<ModuleId> = attributes
            .keys()
            .chain(dependencies.keys())
            .cloned()
            .collect();
        if seen.contains("") {
            return Err(ManifestError::EmptyModuleId);
        }

        for module in modules {
            if module.id.is_empty() {
                return Err(ManifestError::EmptyModuleId);
            }
            if !seen.insert(module.id.clone()) {
                return Err(ManifestError::DuplicateModule(module.id));
            }
            attributes.insert(module.id.clone(), module.attributes);
            dependencies.insert(module.id, module.depends_on);
        }

        if dependencies.values().flatten().any(String::is_empty) {
            return Err(ManifestError::EmptyModuleId);
        }

        Ok(ModuleSet::from_maps(attributes, dependencies))
    }
}

/// Parse a manifest from text in the given encoding.
pub fn parse_manifest(text: &str, format: ManifestFormat) -> Result<Manifest, ManifestError> {
    let manifest = match format {
        ManifestFormat::Toml => toml::from_str(text)?,
        ManifestFormat::Json => serde_json::from_str(text)?,
    };
    Ok(manifest)
}

/// Read a manifest from disk; the encoding follows the file extension.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    let format = ManifestFormat::from_path(path)
        .ok_or_else(|| ManifestError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_manifest(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        %format,
        modules = manifest.modules.len(),
        "manifest loaded"
    );
    Ok(manifest)
}

/// Read and validate a manifest in one step.
pub fn load_module_set(path: impl AsRef<Path>) -> Result<ModuleSet, ManifestError> {
    load_manifest(path)?.into_module_set()
}
