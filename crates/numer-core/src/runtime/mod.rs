//! Package manager detection and dependency installation
//!
//! This module provides:
//! - [`PackageManager`] detection from the `npm_config_user_agent` signal
//! - The [`Installer`] seam and its process-spawning implementation

pub mod installer;
pub mod package_manager;

pub use installer::{CommandInstaller, Installer};
pub use package_manager::PackageManager;
