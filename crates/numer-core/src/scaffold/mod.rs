//! Generating a project from a completed [`ScaffoldRequest`]

pub mod summary;

use crate::error::{Result, ScaffoldError};
use crate::flow::ScaffoldRequest;
use crate::fs::{self, EntryKind, FileSystem};
use crate::naming;
use crate::product::ProductConfig;
use crate::runtime::Installer;
use crate::templates::rewrite_manifest;
use std::io;
use std::path::{Path, PathBuf};

pub use summary::{next_steps, NextStep};

/// What [`Scaffolder::execute`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Absolute project directory
    pub root: PathBuf,

    /// Top-level template entries copied, manifest excluded
    pub copied: usize,

    pub installed: bool,
}

/// Writes a project to disk and optionally installs its dependencies
pub struct Scaffolder<F, I> {
    fs: F,
    installer: I,
    template_root: PathBuf,
    manifest_file: String,
}

impl<F: FileSystem, I: Installer> Scaffolder<F, I> {
    pub fn new(
        fs: F,
        installer: I,
        template_root: impl Into<PathBuf>,
        manifest_file: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            installer,
            template_root: template_root.into(),
            manifest_file: manifest_file.into(),
        }
    }

    /// Build a scaffolder using the config's template root and manifest name.
    /// `template_dir` overrides the root when given.
    pub fn from_config<C: ProductConfig>(
        config: &C,
        fs: F,
        installer: I,
        template_dir: Option<PathBuf>,
    ) -> Self {
        Self::new(
            fs,
            installer,
            config.template_dir(template_dir),
            config.manifest_file(),
        )
    }

    /// Directory holding the files of `request`'s template
    pub fn template_dir(&self, request: &ScaffoldRequest) -> PathBuf {
        self.template_root.join(request.template.id)
    }

    /// Generate the project, then install dependencies if requested
    pub async fn execute(&self, request: &ScaffoldRequest, cwd: &Path) -> Result<ScaffoldReport> {
        let mut report = self.generate(request, cwd)?;
        report.installed = self.install(request, &report.root).await?;
        Ok(report)
    }

    /// Run the installer in `root` if the request asks for it.
    /// Returns whether it ran.
    pub async fn install(&self, request: &ScaffoldRequest, root: &Path) -> Result<bool> {
        if !request.install_mode.installs() {
            return Ok(false);
        }
        self.installer.install(request.package_manager, root).await?;
        Ok(true)
    }

    /// Write the project files without installing anything.
    ///
    /// Any I/O failure aborts immediately; files already written stay.
    pub fn generate(&self, request: &ScaffoldRequest, cwd: &Path) -> Result<ScaffoldReport> {
        let template_dir = self.template_dir(request);
        match self.fs.kind(&template_dir) {
            Ok(EntryKind::Dir) => {}
            Ok(_) => {
                return Err(ScaffoldError::fs(
                    "open template directory",
                    &template_dir,
                    io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                ))
            }
            Err(e) => return Err(ScaffoldError::fs("open template directory", &template_dir, e)),
        }

        let root = naming::resolve_target(cwd, &request.target_dir);

        if request.clear_target {
            tracing::debug!(root = %root.display(), "clearing target directory");
            fs::clear_directory(&self.fs, &root)?;
        }

        self.fs
            .create_dir_all(&root)
            .map_err(|e| ScaffoldError::fs("create directory", &root, e))?;

        let entries = self
            .fs
            .read_dir(&template_dir)
            .map_err(|e| ScaffoldError::fs("read directory", &template_dir, e))?;

        let mut copied = 0;
        for name in entries {
            if name == self.manifest_file.as_str() {
                continue;
            }
            fs::copy_tree(&self.fs, &template_dir.join(&name), &root.join(&name))?;
            copied += 1;
        }

        rewrite_manifest(
            &self.fs,
            &template_dir.join(&self.manifest_file),
            &root.join(&self.manifest_file),
            &request.package_name,
        )?;

        Ok(ScaffoldReport {
            root,
            copied,
            installed: false,
        })
    }
}
