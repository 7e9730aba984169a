use crate::runtime::PackageManager;
use crate::templates::Template;
use std::fmt;

/// Whether dependencies are installed after generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    GenerateOnly,
    GenerateAndInstall,
}

impl InstallMode {
    pub fn label(&self) -> &'static str {
        match self {
            InstallMode::GenerateOnly => "Generate only",
            InstallMode::GenerateAndInstall => "Generate and install",
        }
    }

    pub fn installs(&self) -> bool {
        matches!(self, InstallMode::GenerateAndInstall)
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the executor needs, collected by the prompt flow.
///
/// `target_dir` is non-empty and `package_name` satisfies the package
/// grammar by the time a request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Project name as typed
    pub raw_project_name: String,

    /// Sanitised directory, relative to the working directory unless absolute
    pub target_dir: String,

    pub package_name: String,

    pub template: Template,

    pub install_mode: InstallMode,

    pub package_manager: PackageManager,

    /// Set when the user agreed to overwrite a non-empty target
    pub clear_target: bool,
}

/// The accepted project name and where it will be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub raw_project_name: String,
    pub target_dir: String,
    pub clear_target: bool,
}

impl Target {
    pub fn into_request(
        self,
        package_name: String,
        template: Template,
        install_mode: InstallMode,
        package_manager: PackageManager,
    ) -> ScaffoldRequest {
        ScaffoldRequest {
            raw_project_name: self.raw_project_name,
            target_dir: self.target_dir,
            package_name,
            template,
            install_mode,
            package_manager,
            clear_target: self.clear_target,
        }
    }
}
