//! The interactive question sequence as a state machine
//!
//! ```text
//! AskProjectName ──(non-empty dir)──> AskOverwrite ──yes──┐
//!       │                                 └──no──> Cancelled
//!       └──(missing or empty dir)──> AskPackageName <─────┘
//!                                         │  (skipped when the directory
//!                                         │   name is already valid; it is
//!                                         │   still normalised)
//!                                         v
//!                                    AskTemplate ──(unavailable)──> Unavailable
//!                                         v
//!                                   AskInstallMode ──> Completed
//! ```
//!
//! Every prompt can be cancelled, which ends the flow in `Cancelled`.
//! The flow never writes to disk: agreeing to overwrite only marks the
//! request, and the executor clears the directory right before generating.

mod request;

use crate::error::{PromptError, Result, ScaffoldError};
use crate::fs::{self, FileSystem};
use crate::naming;
use crate::product::ProductConfig;
use crate::runtime::PackageManager;
use crate::templates::{registry, Template};
use request::Target;
use std::path::PathBuf;

pub use request::{InstallMode, ScaffoldRequest};

/// Source of answers for the flow
pub trait Prompter {
    /// Ask for the project name. `default` is only a placeholder; an empty
    /// answer is rejected like any other unusable name.
    fn project_name(&mut self, default: &str) -> Result<String, PromptError>;

    /// Ask whether the non-empty `target_dir` may be overwritten
    fn confirm_overwrite(&mut self, target_dir: &str) -> Result<bool, PromptError>;

    /// Ask for a package name; an empty answer means `suggestion`
    fn package_name(&mut self, suggestion: &str) -> Result<String, PromptError>;

    fn template(&mut self, templates: &[Template]) -> Result<Template, PromptError>;

    fn install_mode(&mut self) -> Result<InstallMode, PromptError>;

    /// Tell the user why an answer was rejected
    fn notice(&mut self, message: &str) -> Result<(), PromptError>;
}

/// How the flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(ScaffoldRequest),
    Cancelled,
    Unavailable(Template),
}

#[derive(Debug)]
enum State {
    AskProjectName,
    AskOverwrite(Target),
    AskPackageName(Target),
    AskTemplate(Target, String),
    AskInstallMode(Target, String, Template),
    Done(Outcome),
}

/// Drives a [`Prompter`] through the questions needed to scaffold
pub struct PromptFlow<'a, F> {
    fs: F,
    cwd: PathBuf,
    templates: &'a [Template],
    default_project_name: &'a str,
    package_manager: PackageManager,
}

impl<'a, F: FileSystem> PromptFlow<'a, F> {
    pub fn new(
        fs: F,
        cwd: PathBuf,
        templates: &'a [Template],
        default_project_name: &'a str,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            fs,
            cwd,
            templates,
            default_project_name,
            package_manager,
        }
    }

    /// Build a flow from a product config, detecting the package manager
    /// from the config's user agent variable
    pub fn from_config<C: ProductConfig>(config: &C, fs: F, cwd: PathBuf) -> Self {
        let user_agent = std::env::var(config.user_agent_env()).ok();
        Self::new(
            fs,
            cwd,
            config.templates(),
            config.default_project_name(),
            PackageManager::from_user_agent(user_agent.as_deref()),
        )
    }

    /// Ask every question in order until a terminal state is reached
    pub fn run<P: Prompter>(&self, prompter: &mut P) -> Result<Outcome> {
        registry::validate(self.templates)?;

        let mut state = State::AskProjectName;
        loop {
            tracing::debug!(?state, "prompt flow");
            state = match self.step(state, prompter)? {
                State::Done(outcome) => return Ok(outcome),
                next => next,
            };
        }
    }

    fn step<P: Prompter>(&self, state: State, prompter: &mut P) -> Result<State> {
        match state {
            State::AskProjectName => self.ask_project_name(prompter),

            State::AskOverwrite(mut target) => {
                let Some(overwrite) = answer(prompter.confirm_overwrite(&target.target_dir))?
                else {
                    return Ok(State::Done(Outcome::Cancelled));
                };
                if !overwrite {
                    return Ok(State::Done(Outcome::Cancelled));
                }
                target.clear_target = true;
                Ok(State::AskPackageName(target))
            }

            State::AskPackageName(target) => self.ask_package_name(target, prompter),

            State::AskTemplate(target, package_name) => {
                let Some(choice) = answer(prompter.template(self.templates))? else {
                    return Ok(State::Done(Outcome::Cancelled));
                };
                let template = *registry::find(self.templates, choice.id)
                    .ok_or_else(|| ScaffoldError::UnknownTemplate(choice.id.to_string()))?;
                if !template.available {
                    return Ok(State::Done(Outcome::Unavailable(template)));
                }
                Ok(State::AskInstallMode(target, package_name, template))
            }

            State::AskInstallMode(target, package_name, template) => {
                let Some(install_mode) = answer(prompter.install_mode())? else {
                    return Ok(State::Done(Outcome::Cancelled));
                };
                Ok(State::Done(Outcome::Completed(target.into_request(
                    package_name,
                    template,
                    install_mode,
                    self.package_manager,
                ))))
            }

            done @ State::Done(_) => Ok(done),
        }
    }

    fn ask_project_name<P: Prompter>(&self, prompter: &mut P) -> Result<State> {
        let Some(raw) = answer(prompter.project_name(self.default_project_name))? else {
            return Ok(State::Done(Outcome::Cancelled));
        };
        let target_dir = naming::sanitize_directory_name(&raw);
        if target_dir.is_empty() {
            return notify(prompter, "Provide a valid project name", State::AskProjectName);
        }

        let path = naming::resolve_target(&self.cwd, &target_dir);
        let needs_overwrite = if !self.fs.exists(&path) {
            false
        } else if !self.fs.is_dir(&path) {
            let message = format!("{} exists and is not a directory", target_dir);
            return notify(prompter, &message, State::AskProjectName);
        } else {
            !fs::is_empty(&self.fs, &path)?
        };

        let target = Target {
            raw_project_name: raw,
            target_dir,
            clear_target: false,
        };
        Ok(if needs_overwrite {
            State::AskOverwrite(target)
        } else {
            State::AskPackageName(target)
        })
    }

    fn ask_package_name<P: Prompter>(&self, target: Target, prompter: &mut P) -> Result<State> {
        let derived = naming::directory_package_name(&self.cwd, &target.target_dir);
        let suggestion = naming::suggest_package_name(&derived);
        // A valid directory name is still normalised (`my.lib` -> `my-lib`)
        if naming::is_valid_package_name(&derived) && naming::is_valid_package_name(&suggestion) {
            return Ok(State::AskTemplate(target, suggestion));
        }

        let Some(input) = answer(prompter.package_name(&suggestion))? else {
            return Ok(State::Done(Outcome::Cancelled));
        };
        let name = if input.is_empty() { suggestion } else { input };

        if !naming::is_valid_package_name(&name) {
            return notify(prompter, "Invalid package name", State::AskPackageName(target));
        }
        Ok(State::AskTemplate(target, name))
    }
}

/// Show a rejection notice, then move to `retry` unless the user cancelled
fn notify<P: Prompter>(prompter: &mut P, message: &str, retry: State) -> Result<State> {
    Ok(match answer(prompter.notice(message))? {
        Some(()) => retry,
        None => State::Done(Outcome::Cancelled),
    })
}

/// Split a prompt result into an answer, a cancellation (`None`) or a
/// fatal terminal error
fn answer<T>(result: Result<T, PromptError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PromptError::Cancelled) => Ok(None),
        Err(PromptError::Io(err)) => Err(ScaffoldError::Prompt(err)),
    }
}
