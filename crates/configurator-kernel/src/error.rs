//! Error types for dependency resolution.

use crate::module::ModuleId;

/// Failure class string for a dependency cycle.
pub const FAILURE_CLASS_CIRCULAR_DEPENDENCY: &str = "resolve.circular_dependency";

/// Errors arising from a resolution call.
///
/// The first failure aborts the whole call; no partial result exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A module reappeared on its own active expansion path.
    ///
    /// `path` starts at the first occurrence of the repeated module and
    /// ends with the repeat, so a self-loop is `[m, m]`.
    #[error("circular dependency: {}", path.join(" -> "))]
    CircularDependency { path: Vec<ModuleId> },
}

/// Classification of a [`ResolveError`], independent of diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveErrorKind {
    CircularDependency,
}

impl ResolveErrorKind {
    pub fn failure_class(self) -> &'static str {
        match self {
            Self::CircularDependency => FAILURE_CLASS_CIRCULAR_DEPENDENCY,
        }
    }
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::CircularDependency { .. } => ResolveErrorKind::CircularDependency,
        }
    }

    /// Modules forming the detected cycle, repeat included.
    pub fn cycle(&self) -> &[ModuleId] {
        match self {
            Self::CircularDependency { path } => path,
        }
    }

    pub(crate) fn circular<'a>(path: impl IntoIterator<Item = &'a str>) -> Self {
        Self::CircularDependency {
            path: path.into_iter().map(str::to_string).collect(),
        }
    }
}
