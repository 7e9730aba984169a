//! Shared helpers for numer-core integration tests

#![allow(dead_code)]

use numer_core::error::Result;
use numer_core::runtime::Installer;
use numer_core::{InstallMode, PackageManager, PromptError, Prompter, ScaffoldError, Template};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

pub const REACT: Template = Template {
    id: "react-ts-swc",
    display_name: "React",
    description: "(TypeScript + SWC)",
    available: true,
};

pub const LIB: Template = Template {
    id: "lib-ts",
    display_name: "Lib",
    description: "(TypeScript)",
    available: false,
};

pub const TEMPLATES: &[Template] = &[REACT, LIB];

/// Root of the templates shipped in this repository
pub fn repo_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}

/// One scripted reply
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Confirm(bool),
    Template(&'static str),
    Mode(InstallMode),
    Cancel,
    Fail,
}

/// Replays answers in order and records what was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<&'static str>,
    pub notices: Vec<String>,
    pub suggestions: Vec<String>,
    cancel_notices: bool,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    fn next(&mut self, question: &'static str) -> Result<Answer, PromptError> {
        self.asked.push(question);
        match self.answers.pop_front() {
            Some(Answer::Cancel) => Err(PromptError::Cancelled),
            Some(Answer::Fail) => Err(PromptError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal went away",
            ))),
            Some(answer) => Ok(answer),
            None => panic!("no scripted answer left for {question}"),
        }
    }

    /// Report a cancellation whenever a notice is shown
    pub fn cancelling_notices(mut self) -> Self {
        self.cancel_notices = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&mut self, _default: &str) -> Result<String, PromptError> {
        match self.next("project_name")? {
            Answer::Text(text) => Ok(text.to_string()),
            other => panic!("expected text for project_name, got {other:?}"),
        }
    }

    fn confirm_overwrite(&mut self, _target_dir: &str) -> Result<bool, PromptError> {
        match self.next("confirm_overwrite")? {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected confirm for confirm_overwrite, got {other:?}"),
        }
    }

    fn package_name(&mut self, suggestion: &str) -> Result<String, PromptError> {
        self.suggestions.push(suggestion.to_string());
        match self.next("package_name")? {
            Answer::Text(text) => Ok(text.to_string()),
            other => panic!("expected text for package_name, got {other:?}"),
        }
    }

    fn template(&mut self, templates: &[Template]) -> Result<Template, PromptError> {
        match self.next("template")? {
            Answer::Template(id) => Ok(templates
                .iter()
                .find(|t| t.id == id)
                .copied()
                .unwrap_or(Template {
                    id,
                    display_name: id,
                    description: "",
                    available: true,
                })),
            other => panic!("expected template, got {other:?}"),
        }
    }

    fn install_mode(&mut self) -> Result<InstallMode, PromptError> {
        match self.next("install_mode")? {
            Answer::Mode(mode) => Ok(mode),
            other => panic!("expected install mode, got {other:?}"),
        }
    }

    fn notice(&mut self, message: &str) -> Result<(), PromptError> {
        self.notices.push(message.to_string());
        if self.cancel_notices {
            return Err(PromptError::Cancelled);
        }
        Ok(())
    }
}

/// Records install invocations instead of spawning anything
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub calls: RefCell<Vec<(PackageManager, PathBuf)>>,
    pub fail_with: Option<i32>,
}

impl RecordingInstaller {
    pub fn failing(code: i32) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Installer for RecordingInstaller {
    async fn install(&self, package_manager: PackageManager, project_dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((package_manager, project_dir.to_path_buf()));
        match self.fail_with {
            Some(code) => Err(ScaffoldError::InstallFailed {
                command: package_manager.install_command(),
                code,
            }),
            None => Ok(()),
        }
    }
}
