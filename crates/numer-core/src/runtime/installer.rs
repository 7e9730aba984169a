//! Running the package manager's install step

use super::package_manager::PackageManager;
use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Installs a generated project's dependencies
#[allow(async_fn_in_trait)]
pub trait Installer {
    async fn install(&self, package_manager: PackageManager, project_dir: &Path) -> Result<()>;
}

impl<I: Installer> Installer for &I {
    async fn install(&self, package_manager: PackageManager, project_dir: &Path) -> Result<()> {
        (**self).install(package_manager, project_dir).await
    }
}

/// Spawns `<pm> install` in the project directory.
///
/// The child shares this process's terminal and runs to completion; there
/// is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInstaller;

impl Installer for CommandInstaller {
    async fn install(&self, package_manager: PackageManager, project_dir: &Path) -> Result<()> {
        let command = package_manager.install_command();
        tracing::debug!(%command, dir = %project_dir.display(), "spawning installer");

        let status = TokioCommand::new(package_manager.command())
            .arg("install")
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::InstallLaunch {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        // No code means the child was killed by a signal
        let code = status.code().filter(|c| *c != 0).unwrap_or(1);
        Err(ScaffoldError::InstallFailed { command, code })
    }
}
