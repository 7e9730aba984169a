//! Charm-style CLI prompts using cliclack

use crate::error::{PromptError, Result, ScaffoldError};
use crate::flow::{InstallMode, Outcome, PromptFlow, Prompter, ScaffoldRequest};
use crate::fs::NativeFs;
use crate::naming;
use crate::product::ProductConfig;
use crate::runtime::CommandInstaller;
use crate::scaffold::{self, Scaffolder};
use crate::templates::{registry, Template};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name answered up front
    pub project_name: Option<String>,

    /// Template id answered up front
    pub template: Option<String>,

    /// Install mode answered up front
    pub install_mode: Option<InstallMode>,

    /// Local directory to use for templates instead of the default
    pub template_dir: Option<PathBuf>,
}

/// [`Prompter`] backed by cliclack.
///
/// Answers passed on the command line are used once, in place of the
/// matching prompt. A rejected preset falls back to asking.
#[derive(Debug, Default)]
pub struct ClackPrompter {
    project_name: Option<String>,
    template: Option<String>,
    install_mode: Option<InstallMode>,
}

impl ClackPrompter {
    pub fn new(args: &CreateArgs) -> Self {
        Self {
            project_name: args.project_name.clone(),
            template: args.template.clone(),
            install_mode: args.install_mode,
        }
    }
}

impl Prompter for ClackPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, PromptError> {
        if let Some(name) = self.project_name.take() {
            cliclack::log::info(format!("Project name: {}", name.cyan()))?;
            return Ok(name);
        }

        let name: String = cliclack::input("Provide a name for your project")
            .placeholder(default)
            .validate(|value: &String| {
                if naming::sanitize_directory_name(value).is_empty() {
                    Err("Provide a valid project name")
                } else {
                    Ok(())
                }
            })
            .interact()?;
        Ok(name)
    }

    fn confirm_overwrite(&mut self, target_dir: &str) -> Result<bool, PromptError> {
        let overwrite = cliclack::confirm(format!(
            "Target directory {} is not empty. Overwrite?",
            target_dir.cyan()
        ))
        .initial_value(false)
        .interact()?;
        Ok(overwrite)
    }

    fn package_name(&mut self, suggestion: &str) -> Result<String, PromptError> {
        let name: String = cliclack::input("Provide a name for your package")
            .placeholder(suggestion)
            .default_input(suggestion)
            .validate(|value: &String| {
                if value.is_empty() || naming::is_valid_package_name(value) {
                    Ok(())
                } else {
                    Err("Invalid package name")
                }
            })
            .interact()?;
        Ok(name)
    }

    fn template(&mut self, templates: &[Template]) -> Result<Template, PromptError> {
        if let Some(id) = self.template.take() {
            match registry::find(templates, &id) {
                Some(template) => {
                    cliclack::log::info(format!("Template: {}", template.display_name))?;
                    return Ok(*template);
                }
                None => {
                    let available: Vec<&str> = templates.iter().map(|t| t.id).collect();
                    cliclack::log::warning(format!(
                        "Template '{}' not found. Available templates: {}",
                        id,
                        available.join(", ")
                    ))?;
                }
            }
        }

        if templates.is_empty() {
            return Err(PromptError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "No templates found.",
            )));
        }

        let mut select = cliclack::select("Choose a template");
        for template in templates {
            let label = format!(
                "{} {}",
                template.display_name.bold(),
                template.description.dimmed()
            );
            let hint = if template.available { "" } else { "coming soon" };
            select = select.item(*template, label, hint);
        }
        Ok(select.interact()?)
    }

    fn install_mode(&mut self) -> Result<InstallMode, PromptError> {
        if let Some(mode) = self.install_mode.take() {
            cliclack::log::info(format!("Install mode: {}", mode))?;
            return Ok(mode);
        }

        let mode = cliclack::select("Generate project and install dependencies?")
            .item(InstallMode::GenerateOnly, InstallMode::GenerateOnly.label(), "")
            .item(
                InstallMode::GenerateAndInstall,
                InstallMode::GenerateAndInstall.label(),
                "",
            )
            .interact()?;
        Ok(mode)
    }

    fn notice(&mut self, message: &str) -> Result<(), PromptError> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<Outcome> {
    term(cliclack::intro(
        format!(" {} v{} ", config.display_name(), config.version())
            .black()
            .on_cyan(),
    ))?;

    tracing::info!(product = config.name(), version = config.version(), "starting");

    let cwd = std::env::current_dir()
        .map_err(|e| ScaffoldError::fs("read current directory", ".", e))?;

    // Step 1: Ask every question; nothing is written yet
    let flow = PromptFlow::from_config(config, NativeFs, cwd.clone());
    let mut prompter = ClackPrompter::new(&args);
    let outcome = flow.run(&mut prompter)?;

    let request = match outcome {
        Outcome::Completed(request) => request,
        Outcome::Cancelled => {
            tracing::info!("cancelled by user");
            term(cliclack::outro_cancel("Cancelled"))?;
            return Ok(Outcome::Cancelled);
        }
        Outcome::Unavailable(template) => {
            tracing::info!(template = template.id, "template not available");
            term(cliclack::log::warning(format!(
                "🚧 Template {} is not available yet 🚧",
                template.display_name
            )))?;
            term(cliclack::outro_cancel("Cancelled"))?;
            return Ok(Outcome::Unavailable(template));
        }
    };

    // Step 2: Generate
    let scaffolder =
        Scaffolder::from_config(config, NativeFs, CommandInstaller, args.template_dir.clone());
    let root = naming::resolve_target(&cwd, &request.target_dir);
    term(cliclack::log::step(format!(
        "Scaffolding {} in {}",
        request.target_dir.cyan(),
        root.display().to_string().cyan()
    )))?;
    let report = scaffolder.generate(&request, &cwd)?;
    tracing::info!(root = %report.root.display(), copied = report.copied, "project generated");

    // Step 3: Install
    if request.install_mode.installs() {
        term(cliclack::log::step(format!(
            "Installing dependencies with {}...",
            request.package_manager.to_string().cyan()
        )))?;
        scaffolder.install(&request, &report.root).await?;
    }

    // Step 4: Show next steps
    print_next_steps(&request, &cwd, &report.root)?;

    Ok(Outcome::Completed(request))
}

fn print_next_steps(request: &ScaffoldRequest, cwd: &Path, root: &Path) -> Result<()> {
    term(cliclack::log::success(format!(
        "Project created {}!",
        "successfully".bright_green()
    )))?;

    let steps = scaffold::next_steps(request, cwd, root);
    let body = steps
        .iter()
        .map(|step| format!("{}\n  {}", step.command.blue(), step.description.dimmed()))
        .collect::<Vec<_>>()
        .join("\n");
    term(cliclack::note("Next steps", body))?;

    term(cliclack::outro("Happy coding!"))
}

fn term(result: io::Result<()>) -> Result<()> {
    result.map_err(ScaffoldError::Prompt)
}
