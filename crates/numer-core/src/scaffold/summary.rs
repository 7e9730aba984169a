//! "Next steps" shown after a project is generated

use crate::flow::ScaffoldRequest;
use std::path::Path;

/// A suggested command and what it does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub command: String,
    pub description: &'static str,
}

/// Next steps for a generated project, in display order:
/// `cd` (unless `root` is `cwd`), install (unless it already ran), dev, test
pub fn next_steps(request: &ScaffoldRequest, cwd: &Path, root: &Path) -> Vec<NextStep> {
    let pm = request.package_manager;
    let mut steps = Vec::new();

    if root != cwd {
        steps.push(NextStep {
            command: format!("cd {}", shell_quote(&request.target_dir)),
            description: "Go to project directory",
        });
    }

    if !request.install_mode.installs() {
        steps.push(NextStep {
            command: pm.install_command(),
            description: "Install dependencies",
        });
    }

    steps.push(NextStep {
        command: pm.script_command("dev"),
        description: "Run development server",
    });
    steps.push(NextStep {
        command: pm.script_command("test"),
        description: "Run tests",
    });

    steps
}

/// Single-quote `path` for a POSIX shell unless every character is safe bare
fn shell_quote(path: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "-_./@%+=:,".contains(c);
    if !path.is_empty() && path.chars().all(safe) {
        path.to_string()
    } else {
        format!("'{}'", path.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::InstallMode;
    use crate::runtime::PackageManager;
    use crate::templates::BUILTIN;
    use pretty_assertions::assert_eq;

    fn request(target_dir: &str, install_mode: InstallMode, pm: PackageManager) -> ScaffoldRequest {
        ScaffoldRequest {
            raw_project_name: target_dir.to_string(),
            target_dir: target_dir.to_string(),
            package_name: "demo".to_string(),
            template: BUILTIN[0],
            install_mode,
            package_manager: pm,
            clear_target: false,
        }
    }

    fn commands(steps: &[NextStep]) -> Vec<&str> {
        steps.iter().map(|s| s.command.as_str()).collect()
    }

    #[test]
    fn test_generate_only_in_subdirectory() {
        let req = request("demo", InstallMode::GenerateOnly, PackageManager::Pnpm);
        let steps = next_steps(&req, Path::new("/w"), Path::new("/w/demo"));
        assert_eq!(
            commands(&steps),
            vec!["cd demo", "pnpm install", "pnpm dev", "pnpm test"]
        );
        assert_eq!(steps[1].description, "Install dependencies");
    }

    #[test]
    fn test_installed_in_current_directory() {
        let req = request(".", InstallMode::GenerateAndInstall, PackageManager::Npm);
        let steps = next_steps(&req, Path::new("/w"), Path::new("/w"));
        assert_eq!(commands(&steps), vec!["npm run dev", "npm test"]);
    }

    #[test]
    fn test_cd_quotes_spaces() {
        let req = request("My App", InstallMode::GenerateAndInstall, PackageManager::Yarn);
        let steps = next_steps(&req, Path::new("/w"), Path::new("/w/My App"));
        assert_eq!(steps[0].command, "cd 'My App'");
    }

    #[test]
    fn test_cd_quotes_shell_metacharacters() {
        let cases = [
            ("rock&roll", "cd 'rock&roll'"),
            ("$HOME-app", "cd '$HOME-app'"),
            ("it's", "cd 'it'\\''s'"),
            ("apps/web-1.0", "cd apps/web-1.0"),
        ];
        for (dir, expected) in cases {
            let req = request(dir, InstallMode::GenerateAndInstall, PackageManager::Npm);
            let steps = next_steps(&req, Path::new("/w"), Path::new("/w/x"));
            assert_eq!(steps[0].command, expected);
        }
    }
}
