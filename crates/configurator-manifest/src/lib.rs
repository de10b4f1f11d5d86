//! # configurator-manifest
//!
//! Declaration layer for the configurator kernel.
//!
//! This crate provides:
//! - `ModuleDeclaration` and `Manifest` (per-module declarations)
//! - TOML/JSON parsing, with the encoding picked from the file extension
//! - validation into a kernel `ModuleSet`
//!
//! It does not resolve anything itself; resolution lives in
//! `configurator-kernel`.

pub mod format;
pub mod manifest;

pub use format::ManifestFormat;
pub use manifest::{
    Manifest, ManifestError, ModuleDeclaration, load_manifest, load_module_set, parse_manifest,
};
