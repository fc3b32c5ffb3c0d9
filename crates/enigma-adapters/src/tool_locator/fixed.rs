//! Fixed tool locator for testing.

use std::collections::HashMap;
use std::path::PathBuf;

use enigma_core::{application::ports::ToolLocator, error::EnigmaResult};

/// Answers lookups from a fixed table instead of the host `PATH`.
#[derive(Debug, Clone, Default)]
pub struct StaticToolLocator {
    tools: HashMap<String, PathBuf>,
}

impl StaticToolLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, program: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tools.insert(program.into(), path.into());
        self
    }
}

impl ToolLocator for StaticToolLocator {
    fn locate(&self, program: &str) -> EnigmaResult<Option<PathBuf>> {
        Ok(self.tools.get(program).cloned())
    }
}

#[cfg(test)]
mod tests {
    use enigma_core::{application::EnvironmentService, domain::OsFamily};

    use super::*;

    #[test]
    fn answers_from_table() {
        let locator = StaticToolLocator::new().with_tool("git", "/opt/git/bin/git");
        assert_eq!(
            locator.locate("git").unwrap(),
            Some(PathBuf::from("/opt/git/bin/git"))
        );
        assert_eq!(locator.locate("cargo").unwrap(), None);
    }

    #[test]
    fn drives_environment_service() {
        let locator = StaticToolLocator::new()
            .with_tool("apt", "/usr/bin/apt")
            .with_tool("cargo", "/home/u/.cargo/bin/cargo")
            .with_tool("rustc", "/home/u/.cargo/bin/rustc");

        let report = EnvironmentService::new(Box::new(locator))
            .with_os(OsFamily::Linux)
            .check(false)
            .unwrap();

        assert!(!report.is_ready());
        let git = report.missing_required().next().unwrap();
        assert_eq!(git.install_hint.as_deref(), Some("sudo apt install -y git"));
    }
}
