//! Numer Core - project scaffolding for the `create-numer` CLI
//!
//! Asks for a project name, package name, template and install preference,
//! then writes a new project by copying the template's files and rewriting
//! its manifest.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - naming rules, the [`fs::FileSystem`] seam with
//!   recursive copy/clear, manifest rewriting, package manager detection
//! - **Layer 2: Workflow Orchestration** - the [`PromptFlow`] state machine behind a
//!   [`Prompter`] trait, and the [`Scaffolder`] that executes its result
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use numer_core::{fs::NativeFs, runtime::CommandInstaller, Outcome, PromptFlow, Scaffolder};
//!
//! let flow = PromptFlow::from_config(&MyConfig, NativeFs, cwd.clone());
//! if let Outcome::Completed(request) = flow.run(&mut my_prompter)? {
//!     let scaffolder = Scaffolder::from_config(&MyConfig, NativeFs, CommandInstaller, None);
//!     scaffolder.execute(&request, &cwd).await?;
//! }
//! ```

pub mod error;
pub mod flow;
pub mod fs;
pub mod naming;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{PromptError, ScaffoldError};
pub use flow::{InstallMode, Outcome, PromptFlow, Prompter, ScaffoldRequest};
pub use product::ProductConfig;
pub use runtime::PackageManager;
pub use scaffold::{ScaffoldReport, Scaffolder};
pub use templates::Template;

#[cfg(feature = "tui")]
pub use tui::run;
