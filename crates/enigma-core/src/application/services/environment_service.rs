//! Environment Service - checks the host for the development toolchain.
//!
//! Read-only: it reports what is missing and how to install it, it never
//! installs anything itself.

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::ToolLocator,
    domain::{
        EnvironmentReport, OsFamily, PackageManager, SystemProfile, TOOL_REQUIREMENTS,
        ToolStatus,
    },
    error::EnigmaResult,
};

pub struct EnvironmentService {
    locator: Box<dyn ToolLocator>,
    os: OsFamily,
    arch: String,
}

impl EnvironmentService {
    /// Service probing the current host.
    pub fn new(locator: Box<dyn ToolLocator>) -> Self {
        Self {
            locator,
            os: OsFamily::current(),
            arch: std::env::consts::ARCH.to_owned(),
        }
    }

    /// Pretend to run on a different OS family (package manager detection
    /// and install hints follow it).
    pub fn with_os(mut self, os: OsFamily) -> Self {
        self.os = os;
        self
    }

    /// First package manager for this OS family that is on `PATH`.
    pub fn detect_package_manager(&self) -> EnigmaResult<Option<PackageManager>> {
        for candidate in self.os.package_manager_candidates() {
            if self.locator.locate(candidate.program())?.is_some() {
                return Ok(Some(*candidate));
            }
        }
        Ok(None)
    }

    pub fn profile(&self) -> EnigmaResult<SystemProfile> {
        Ok(SystemProfile {
            os: self.os,
            arch: self.arch.clone(),
            package_manager: self.detect_package_manager()?,
        })
    }

    /// Check every required tool, plus the optional ones when asked.
    #[instrument(skip(self))]
    pub fn check(&self, include_optional: bool) -> EnigmaResult<EnvironmentReport> {
        let profile = self.profile()?;
        debug!(
            os = %profile.os,
            arch = %profile.arch,
            package_manager = ?profile.package_manager,
            "Host profile"
        );

        let mut tools = Vec::new();
        for requirement in TOOL_REQUIREMENTS
            .iter()
            .filter(|r| r.required || include_optional)
        {
            let found = self.locator.locate(requirement.program)?;
            let install_hint = found
                .is_none()
                .then(|| requirement.install_hint(profile.package_manager));

            debug!(tool = requirement.program, found = ?found, "Tool checked");
            tools.push(ToolStatus {
                program: requirement.program,
                purpose: requirement.purpose,
                required: requirement.required,
                found,
                install_hint,
            });
        }

        let report = EnvironmentReport {
            checked_at: Utc::now(),
            profile,
            tools,
        };
        info!(
            found = report.found_count(),
            total = report.tools.len(),
            ready = report.is_ready(),
            "Environment check finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::predicate::eq;

    use super::*;
    use crate::application::{ApplicationError, ports::output::MockToolLocator};

    /// Locator that finds exactly the listed programs under `/usr/bin`.
    fn locator_with(installed: &'static [&'static str]) -> MockToolLocator {
        let mut locator = MockToolLocator::new();
        locator.expect_locate().returning(move |program| {
            Ok(installed
                .iter()
                .any(|p| *p == program)
                .then(|| PathBuf::from("/usr/bin").join(program)))
        });
        locator
    }

    #[test]
    fn detects_first_available_package_manager() {
        let service = EnvironmentService::new(Box::new(locator_with(&["dnf", "pacman"])))
            .with_os(OsFamily::Linux);
        assert_eq!(
            service.detect_package_manager().unwrap(),
            Some(PackageManager::Dnf)
        );
    }

    #[test]
    fn no_package_manager_on_unknown_os() {
        let mut locator = MockToolLocator::new();
        locator.expect_locate().never();
        let service = EnvironmentService::new(Box::new(locator)).with_os(OsFamily::Other);
        assert_eq!(service.detect_package_manager().unwrap(), None);
    }

    #[test]
    fn required_only_by_default() {
        let service = EnvironmentService::new(Box::new(locator_with(&["cargo", "rustc", "git"])))
            .with_os(OsFamily::Linux);
        let report = service.check(false).unwrap();

        assert!(report.tools.iter().all(|t| t.required));
        assert_eq!(report.tools.len(), 3);
        assert!(report.is_ready());
        assert!(report.tools.iter().all(|t| t.install_hint.is_none()));
    }

    #[test]
    fn optional_tools_are_reported_but_not_blocking() {
        let service = EnvironmentService::new(Box::new(locator_with(&["cargo", "rustc", "git"])))
            .with_os(OsFamily::Linux);
        let report = service.check(true).unwrap();

        assert_eq!(report.tools.len(), TOOL_REQUIREMENTS.len());
        assert!(report.is_ready());
        let rustfmt = report.tools.iter().find(|t| t.program == "rustfmt").unwrap();
        assert_eq!(
            rustfmt.install_hint.as_deref(),
            Some("rustup component add rustfmt")
        );
    }

    #[test]
    fn missing_git_gets_package_manager_hint() {
        let service =
            EnvironmentService::new(Box::new(locator_with(&["brew", "cargo", "rustc"])))
                .with_os(OsFamily::MacOs);
        let report = service.check(false).unwrap();

        assert!(!report.is_ready());
        assert_eq!(report.profile.package_manager, Some(PackageManager::Brew));
        let git = report.missing_required().next().unwrap();
        assert_eq!(git.program, "git");
        assert_eq!(git.install_hint.as_deref(), Some("brew install git"));
    }

    #[test]
    fn locator_errors_propagate() {
        let mut locator = MockToolLocator::new();
        locator
            .expect_locate()
            .with(eq("cargo"))
            .returning(|program| {
                Err(ApplicationError::ToolLookup {
                    tool: program.to_owned(),
                    reason: "permission denied".into(),
                }
                .into())
            });

        let service = EnvironmentService::new(Box::new(locator)).with_os(OsFamily::Other);
        assert!(service.check(false).is_err());
    }
}
