//! Development environment model: host profile, tool requirements, report.
//!
//! Pure value types. Probing the host (looking things up on `PATH`) is the
//! job of the `ToolLocator` port; this module only decides what to look for
//! and how to describe the result.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ── OsFamily ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl OsFamily {
    /// The family of the host this binary was compiled for.
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    pub fn from_target_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Other,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Other => "other",
        }
    }

    /// Package managers worth probing on this family, in preference order.
    pub const fn package_manager_candidates(self) -> &'static [PackageManager] {
        match self {
            Self::Windows => &[
                PackageManager::Winget,
                PackageManager::Choco,
                PackageManager::Scoop,
            ],
            Self::Linux => &[
                PackageManager::Apt,
                PackageManager::Dnf,
                PackageManager::Yum,
                PackageManager::Pacman,
            ],
            Self::MacOs => &[PackageManager::Brew],
            Self::Other => &[],
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Winget,
    Choco,
    Scoop,
    Apt,
    Dnf,
    Yum,
    Pacman,
    Brew,
}

impl PackageManager {
    /// Executable name looked up on `PATH`.
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Winget => "winget",
            Self::Choco => "choco",
            Self::Scoop => "scoop",
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Brew => "brew",
        }
    }

    /// Shell command that installs `package`.
    pub fn install_command(&self, package: &SystemPackage) -> String {
        match self {
            Self::Winget => format!("winget install {}", package.winget_id),
            Self::Choco => format!("choco install {}", package.name),
            Self::Scoop => format!("scoop install {}", package.name),
            Self::Apt => format!("sudo apt install -y {}", package.name),
            Self::Dnf => format!("sudo dnf install -y {}", package.name),
            Self::Yum => format!("sudo yum install -y {}", package.name),
            Self::Pacman => format!("sudo pacman -S --noconfirm {}", package.name),
            Self::Brew => format!("brew install {}", package.name),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

// ── Tool requirements ────────────────────────────────────────────────────────

/// A package installable through the host package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemPackage {
    pub name: &'static str,
    pub winget_id: &'static str,
}

/// Where a tool comes from, which determines the install hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSource {
    Rustup,
    RustupComponent(&'static str),
    CargoInstall(&'static str),
    System(SystemPackage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRequirement {
    pub program: &'static str,
    pub purpose: &'static str,
    pub required: bool,
    pub source: ToolSource,
}

impl ToolRequirement {
    /// How to install this tool given the detected package manager.
    pub fn install_hint(&self, package_manager: Option<PackageManager>) -> String {
        match self.source {
            ToolSource::Rustup => "Install the Rust toolchain from https://rustup.rs".into(),
            ToolSource::RustupComponent(component) => {
                format!("rustup component add {component}")
            }
            ToolSource::CargoInstall(krate) => format!("cargo install {krate}"),
            ToolSource::System(package) => match package_manager {
                Some(pm) => pm.install_command(&package),
                None => format!("Install {} manually", package.name),
            },
        }
    }
}

/// Tools the project needs, required ones first.
pub const TOOL_REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement {
        program: "cargo",
        purpose: "build and test",
        required: true,
        source: ToolSource::Rustup,
    },
    ToolRequirement {
        program: "rustc",
        purpose: "compiler",
        required: true,
        source: ToolSource::Rustup,
    },
    ToolRequirement {
        program: "git",
        purpose: "version control",
        required: true,
        source: ToolSource::System(SystemPackage {
            name: "git",
            winget_id: "Git.Git",
        }),
    },
    ToolRequirement {
        program: "rustfmt",
        purpose: "formatting",
        required: false,
        source: ToolSource::RustupComponent("rustfmt"),
    },
    ToolRequirement {
        program: "cargo-llvm-cov",
        purpose: "coverage reports",
        required: false,
        source: ToolSource::CargoInstall("cargo-llvm-cov"),
    },
];

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemProfile {
    pub os: OsFamily,
    pub arch: String,
    pub package_manager: Option<PackageManager>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub program: &'static str,
    pub purpose: &'static str,
    pub required: bool,
    pub found: Option<PathBuf>,
    /// Present only when the tool is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
}

impl ToolStatus {
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub checked_at: DateTime<Utc>,
    pub profile: SystemProfile,
    pub tools: Vec<ToolStatus>,
}

impl EnvironmentReport {
    /// All required tools were found.
    pub fn is_ready(&self) -> bool {
        self.tools.iter().all(|t| !t.required || t.is_found())
    }

    pub fn missing_required(&self) -> impl Iterator<Item = &ToolStatus> {
        self.tools.iter().filter(|t| t.required && !t.is_found())
    }

    pub fn found_count(&self) -> usize {
        self.tools.iter().filter(|t| t.is_found()).count()
    }
}
