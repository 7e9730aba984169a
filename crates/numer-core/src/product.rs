//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to tell the flow and the executor what
//! it is called, which templates it offers and where their files live.

use crate::templates::Template;
use std::path::PathBuf;

/// Configuration for a scaffolding product
pub trait ProductConfig {
    /// Internal product name, used in diagnostics
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Version shown in the intro banner
    fn version(&self) -> &'static str;

    /// Placeholder shown in the project name prompt
    fn default_project_name(&self) -> &'static str {
        "project-name"
    }

    /// Template registry, in menu order
    fn templates(&self) -> &'static [Template];

    /// Environment variable overriding the template root
    fn template_dir_env(&self) -> &'static str;

    /// Template root used when neither a flag nor the env var is set
    fn default_template_dir(&self) -> PathBuf;

    /// File name of the manifest rewritten during scaffolding
    fn manifest_file(&self) -> &'static str {
        "package.json"
    }

    /// Environment variable carrying the package manager user agent
    fn user_agent_env(&self) -> &'static str {
        "npm_config_user_agent"
    }

    /// Resolve the template root: explicit path, then env var, then default
    fn template_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os(self.template_dir_env()).map(PathBuf::from))
            .unwrap_or_else(|| self.default_template_dir())
    }
}
