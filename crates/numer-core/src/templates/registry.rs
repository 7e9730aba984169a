//! The static list of templates offered to the user

use crate::error::{Result, ScaffoldError};
use std::collections::HashSet;

/// A template entry in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Directory name under the template root
    pub id: &'static str,

    /// Name shown in the menu
    pub display_name: &'static str,

    pub description: &'static str,

    /// Unavailable templates are listed but cannot be generated yet
    pub available: bool,
}

/// Templates shipped with Numer, in menu order
pub const BUILTIN: &[Template] = &[
    Template {
        id: "react-ts-swc",
        display_name: "React",
        description: "(TypeScript + SWC)",
        available: true,
    },
    Template {
        id: "lib-ts",
        display_name: "Lib",
        description: "(TypeScript)",
        available: false,
    },
];

/// Reject registries that reuse an id
pub fn validate(templates: &[Template]) -> Result<()> {
    let mut seen = HashSet::new();
    for template in templates {
        if !seen.insert(template.id) {
            return Err(ScaffoldError::DuplicateTemplate(template.id.to_string()));
        }
    }
    Ok(())
}

/// Look a template up by id
pub fn find<'a>(templates: &'a [Template], id: &str) -> Option<&'a Template> {
    templates.iter().find(|t| t.id == id)
}
