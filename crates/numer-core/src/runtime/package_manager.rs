//! Package manager detection from the invoking wrapper's user agent

use std::fmt;

/// Package managers a project can be installed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Deno,
}

impl PackageManager {
    pub const ALL: [PackageManager; 5] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
        PackageManager::Deno,
    ];

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    /// Parse an executable name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pm| pm.command() == name)
    }

    /// Pick the package manager from a user agent such as
    /// `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`.
    ///
    /// Missing or unrecognised agents fall back to npm.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        user_agent
            .and_then(|ua| ua.split_whitespace().next())
            .and_then(|spec| spec.split('/').next())
            .and_then(Self::from_name)
            .unwrap_or_default()
    }

    /// Dependency install command line
    pub fn install_command(&self) -> String {
        format!("{} install", self.command())
    }

    /// Command line running a manifest script
    pub fn script_command(&self, script: &str) -> String {
        match (self, script) {
            (PackageManager::Npm, "test") => "npm test".to_string(),
            (PackageManager::Npm, _) => format!("npm run {}", script),
            (PackageManager::Deno, _) => format!("deno task {}", script),
            (pm, _) => format!("{} {}", pm.command(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_detection() {
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/9.1.0 npm/? node/v20.11.0 linux x64")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("yarn/1.22.19 npm/? node/v18.0.0")),
            PackageManager::Yarn
        );
        assert_eq!(PackageManager::from_user_agent(Some("bun/1.1.0")), PackageManager::Bun);
        assert_eq!(PackageManager::from_user_agent(Some("deno/2.0.0")), PackageManager::Deno);
    }

    #[test]
    fn test_user_agent_fallback() {
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
        assert_eq!(PackageManager::from_user_agent(Some("")), PackageManager::Npm);
        assert_eq!(
            PackageManager::from_user_agent(Some("cnpm/9.0.0 node/v20")),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::from_user_agent(Some("PNPM/9")), PackageManager::Npm);
    }

    #[test]
    fn test_script_commands() {
        assert_eq!(PackageManager::Npm.script_command("dev"), "npm run dev");
        assert_eq!(PackageManager::Npm.script_command("test"), "npm test");
        assert_eq!(PackageManager::Pnpm.script_command("dev"), "pnpm dev");
        assert_eq!(PackageManager::Deno.script_command("test"), "deno task test");
        assert_eq!(PackageManager::Bun.install_command(), "bun install");
    }
}
