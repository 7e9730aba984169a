//! Project and package naming rules
//!
//! - [`sanitize_directory_name`]: raw input to a target directory
//! - [`suggest_package_name`]: raw input to a package name candidate
//! - [`is_valid_package_name`]: the package name grammar

mod sanitize;
mod validate;

use std::path::{Component, Path, PathBuf};

pub use sanitize::{sanitize_directory_name, suggest_package_name};
pub use validate::is_valid_package_name;

/// Resolve `target` against `cwd` without touching the filesystem.
///
/// `.` is dropped and `..` pops the previous component, so the result is
/// the path the target will live at even if it does not exist yet.
pub fn resolve_target(cwd: &Path, target: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(target).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// The package name implied by the target directory: its final component
pub fn directory_package_name(cwd: &Path, target: &str) -> String {
    resolve_target(cwd, target)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        let cwd = Path::new("/work/projects");
        assert_eq!(resolve_target(cwd, "demo"), PathBuf::from("/work/projects/demo"));
        assert_eq!(resolve_target(cwd, "./a/../b"), PathBuf::from("/work/projects/b"));
        assert_eq!(resolve_target(cwd, "."), PathBuf::from("/work/projects"));
        assert_eq!(resolve_target(cwd, "/abs/app"), PathBuf::from("/abs/app"));
    }

    #[test]
    fn test_directory_package_name() {
        let cwd = Path::new("/work/projects");
        assert_eq!(directory_package_name(cwd, "demo"), "demo");
        assert_eq!(directory_package_name(cwd, "nested/My App"), "My App");
        assert_eq!(directory_package_name(cwd, "."), "projects");
        assert_eq!(directory_package_name(Path::new("/"), ".."), "");
    }
}
