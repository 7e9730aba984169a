//! create-numer - Project scaffolding for Numer

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use numer_core::templates::{Template, BUILTIN};
use numer_core::tui::CreateArgs;
use numer_core::{InstallMode, Outcome, ProductConfig, ScaffoldError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding `--log-level` with a full filter
const LOG_ENV: &str = "NUMER_LOG";

/// Numer product configuration
#[derive(Clone)]
pub struct NumerConfig;

impl ProductConfig for NumerConfig {
    fn name(&self) -> &'static str {
        "numer"
    }

    fn display_name(&self) -> &'static str {
        "Numer"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn templates(&self) -> &'static [Template] {
        BUILTIN
    }

    fn template_dir_env(&self) -> &'static str {
        "NUMER_TEMPLATE_DIR"
    }

    fn default_template_dir(&self) -> PathBuf {
        // Installed next to the binary, else the checkout this was built from
        let bundled = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
            .filter(|dir| dir.is_dir());

        bundled.unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("templates")
        })
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-numer")]
#[command(about = "CLI for scaffolding Numer projects")]
#[command(version)]
pub struct Args {
    /// Project name (also the directory to create)
    pub project_name: Option<String>,

    /// Template to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Install dependencies after generating
    #[arg(long, conflicts_with = "no_install")]
    pub install: bool,

    /// Only generate the project files
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Diagnostic log level (NUMER_LOG overrides it)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let install_mode = match (args.install, args.no_install) {
            (true, _) => Some(InstallMode::GenerateAndInstall),
            (_, true) => Some(InstallMode::GenerateOnly),
            _ => None,
        };

        CreateArgs {
            project_name: args.project_name,
            template: args.template,
            install_mode,
            template_dir: args.template_dir,
        }
    }
}

/// Send diagnostics to stderr so they never mix with prompts on stdout
fn initialize_tracing(log_level: &LogLevel) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid {} filter: {}", LOG_ENV, directives))?,
        Err(_) => EnvFilter::new(log_level.to_filter_directive()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn report_fatal(err: &ScaffoldError) {
    tracing::error!(error = %err, "scaffolding failed");

    let message = match err {
        ScaffoldError::InstallLaunch { command, source } => {
            format!("{} error!\nCould not start the installer: {}", command, source)
        }
        ScaffoldError::InstallFailed { command, code } => {
            format!("{} failed with exit code {}", command, code)
        }
        other => other.to_string(),
    };

    if cliclack::log::error(&message).is_err() {
        eprintln!("{}", message);
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of prompts (prompts report it as a cancellation)
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    if let Err(err) = initialize_tracing(&args.log_level) {
        eprintln!("{:#}", err);
    }

    let config = NumerConfig;
    let result = numer_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(Outcome::Completed(request)) => {
            tracing::debug!(package = %request.package_name, "done");
        }
        Ok(outcome) => {
            tracing::debug!(?outcome, "stopped before generating");
        }
        Err(err) => {
            report_fatal(&err);
            std::process::exit(err.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_flags_map_to_mode() {
        let args = Args::parse_from(["create-numer", "demo", "--install"]);
        let create: CreateArgs = args.into();
        assert_eq!(create.install_mode, Some(InstallMode::GenerateAndInstall));
        assert_eq!(create.project_name.as_deref(), Some("demo"));

        let args = Args::parse_from(["create-numer", "--no-install", "-t", "react-ts-swc"]);
        let create: CreateArgs = args.into();
        assert_eq!(create.install_mode, Some(InstallMode::GenerateOnly));
        assert_eq!(create.template.as_deref(), Some("react-ts-swc"));

        let create: CreateArgs = Args::parse_from(["create-numer"]).into();
        assert_eq!(create.install_mode, None);
    }

    #[test]
    fn test_product_identity() {
        assert_eq!(NumerConfig.name(), "numer");
        assert_eq!(NumerConfig.version(), CLI_VERSION);
        assert_eq!(NumerConfig.template_dir_env(), "NUMER_TEMPLATE_DIR");
    }

    #[test]
    fn test_install_flags_conflict() {
        assert!(Args::try_parse_from(["create-numer", "--install", "--no-install"]).is_err());
    }

    #[test]
    fn test_bundled_templates_exist() {
        let dir = NumerConfig.default_template_dir();
        for template in BUILTIN.iter().filter(|t| t.available) {
            let manifest = dir.join(template.id).join(NumerConfig.manifest_file());
            assert!(manifest.is_file(), "missing {}", manifest.display());
        }
    }
}
