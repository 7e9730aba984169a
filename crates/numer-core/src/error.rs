//! Error types shared by the flow and the executor

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scaffolding failures. None of these are retried.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} is not a JSON object", path.display())]
    ManifestShape { path: PathBuf },

    #[error("Failed to launch `{command}`: {source}")]
    InstallLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    InstallFailed { command: String, code: i32 },

    #[error("Template id `{0}` is registered more than once")]
    DuplicateTemplate(String),

    #[error("Template `{0}` not found")]
    UnknownTemplate(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),
}

impl ScaffoldError {
    /// Wrap an I/O failure on `path`
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    ///
    /// A failed install mirrors the child's own status; anything else,
    /// including an installer that could not be launched, exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InstallFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Outcome of a single prompt that did not produce an answer
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        // cliclack reports Esc / Ctrl+C as Interrupted
        if err.kind() == io::ErrorKind::Interrupted {
            Self::Cancelled
        } else {
            Self::Io(err)
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_failure_mirrors_child_status() {
        let err = ScaffoldError::InstallFailed {
            command: "pnpm install".to_string(),
            code: 7,
        };
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_launch_failure_exits_with_one() {
        let err = ScaffoldError::InstallLaunch {
            command: "pnpm install".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_interrupted_is_cancellation() {
        let err: PromptError = io::Error::from(io::ErrorKind::Interrupted).into();
        assert!(matches!(err, PromptError::Cancelled));

        let err: PromptError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, PromptError::Io(_)));
    }
}
