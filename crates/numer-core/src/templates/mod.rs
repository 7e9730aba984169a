//! Template registry and manifest handling
//!
//! This module provides:
//! - The static template registry ([`Template`], [`BUILTIN`])
//! - Rewriting the template manifest with the chosen package name

pub mod manifest;
pub mod registry;

pub use manifest::rewrite_manifest;
pub use registry::{Template, BUILTIN};
