//! `PATH`-based tool locator.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use enigma_core::{
    application::{ApplicationError, ports::ToolLocator},
    error::EnigmaResult,
};

/// Searches the directories of a `PATH`-style list, first match wins.
///
/// On Windows, bare names are tried with each extension from `PATHEXT`.
#[derive(Debug, Clone, Default)]
pub struct PathToolLocator {
    search_path: Option<OsString>,
}

impl PathToolLocator {
    /// Locator reading `PATH` at lookup time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator searching `search_path` instead of the process `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn search_path(&self) -> Option<OsString> {
        self.search_path
            .clone()
            .or_else(|| env::var_os("PATH"))
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, program: &str) -> EnigmaResult<Option<PathBuf>> {
        if program.is_empty() {
            return Err(ApplicationError::ToolLookup {
                tool: String::new(),
                reason: "empty program name".into(),
            }
            .into());
        }

        // Explicit paths are checked as-is.
        if program.contains(std::path::is_separator) {
            let path = PathBuf::from(program);
            return Ok(is_executable(&path).then_some(path));
        }

        let Some(search_path) = self.search_path() else {
            trace!(program, "PATH is not set");
            return Ok(None);
        };

        let names = candidate_names(program);
        for dir in env::split_paths(&search_path) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            for name in &names {
                let candidate = dir.join(name);
                if is_executable(&candidate) {
                    trace!(program, path = %candidate.display(), "Found");
                    return Ok(Some(candidate));
                }
            }
        }

        trace!(program, "Not found on PATH");
        Ok(None)
    }
}

#[cfg(windows)]
fn candidate_names(program: &str) -> Vec<String> {
    if Path::new(program).extension().is_some() {
        return vec![program.to_owned()];
    }
    let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".into());
    pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("{program}{}", ext.to_ascii_lowercase()))
        .collect()
}

#[cfg(not(windows))]
fn candidate_names(program: &str) -> Vec<String> {
    vec![program.to_owned()]
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use tempfile::TempDir;

    use super::*;

    fn write_tool(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn finds_executable_in_search_path() {
        let dir = TempDir::new().unwrap();
        let git = write_tool(dir.path(), "git", 0o755);

        let locator = PathToolLocator::with_search_path(dir.path());
        assert_eq!(locator.locate("git").unwrap(), Some(git));
    }

    #[test]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        write_tool(dir.path(), "git", 0o644);

        let locator = PathToolLocator::with_search_path(dir.path());
        assert_eq!(locator.locate("git").unwrap(), None);
    }

    #[test]
    fn skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("cargo")).unwrap();

        let locator = PathToolLocator::with_search_path(dir.path());
        assert_eq!(locator.locate("cargo").unwrap(), None);
    }

    #[test]
    fn first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = write_tool(first.path(), "rustc", 0o755);
        write_tool(second.path(), "rustc", 0o755);

        let joined = env::join_paths([first.path(), second.path()]).unwrap();
        let locator = PathToolLocator::with_search_path(joined);
        assert_eq!(locator.locate("rustc").unwrap(), Some(expected));
    }

    #[test]
    fn explicit_path_is_checked_directly() {
        let dir = TempDir::new().unwrap();
        let tool = write_tool(dir.path(), "tool", 0o755);

        let locator = PathToolLocator::with_search_path("");
        let found = locator.locate(tool.to_str().unwrap()).unwrap();
        assert_eq!(found, Some(tool));
    }

    #[test]
    fn empty_name_is_an_error() {
        assert!(PathToolLocator::new().locate("").is_err());
    }

    #[test]
    fn missing_tool_is_none() {
        let dir = TempDir::new().unwrap();
        let locator = PathToolLocator::with_search_path(dir.path());
        assert_eq!(locator.locate("definitely-not-installed").unwrap(), None);
    }
}
