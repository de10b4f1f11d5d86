//! # configurator-kernel
//!
//! Dependency closure over declared modules: each module declares its own
//! attributes and the modules it depends on, and the kernel computes, for
//! every module, the full ordered list of attributes visible to it.
//!
//! The kernel is pure. It performs no I/O, never mutates its inputs, and
//! keeps no state between calls.
//!
//! ## Resolution
//!
//! ```text
//! resolved(m) = own(m) ++ resolved(d_1) ++ ... ++ resolved(d_n)
//!               where graph[m] = [d_1, ..., d_n]
//! ```
//!
//! Any module reappearing on its own expansion path fails the entire call
//! with [`ResolveError::CircularDependency`].

pub mod error;
pub mod module;
pub mod report;
pub mod resolve;
pub mod work_stack;

pub use error::{FAILURE_CLASS_CIRCULAR_DEPENDENCY, ResolveError, ResolveErrorKind};
pub use module::{
    AttributeList, DependencyGraph, ModuleAttributeMap, ModuleId, ModuleSet, ResolvedAttributeMap,
};
pub use report::{
    RESOLUTION_REPORT_KIND, ResolutionReport, ResolutionSummary, build_resolution_report,
};
pub use resolve::{ResolveOptions, ResolveStrategy, Resolver, resolve_dependants};
pub use work_stack::resolve_dependants_iterative;
