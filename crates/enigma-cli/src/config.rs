//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ENIGMA_<SECTION>__<KEY>`, e.g. `ENIGMA_JSON__INDENT=4`
//! 3. Config file: `--config FILE`, else `./.enigma.toml`, else the platform
//!    config directory
//! 4. Built-in defaults (always present)

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use enigma_core::domain::Indent;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".enigma.toml";

const ENV_PREFIX: &str = "ENIGMA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// JSON sample rendering.
    pub json: JsonConfig,
    /// Environment check.
    pub doctor: DoctorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    pub indent: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    pub include_optional: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            indent: Indent::DEFAULT.width(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the process
    /// environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`load`](Self::load), reading `ENIGMA_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&PathBuf>,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Configuration has invalid values")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.json_indent()?;
        if crate::cli::OutputFormat::from_name(&self.output.format).is_none() {
            anyhow::bail!(
                "output.format must be one of auto, human, plain, json (got '{}')",
                self.output.format
            );
        }
        Ok(())
    }

    pub fn json_indent(&self) -> anyhow::Result<Indent> {
        Indent::new(self.json.indent).context("json.indent is out of range")
    }

    /// The file [`load`](Self::load) reads when `--config` is not given:
    /// `./.enigma.toml` if it exists, else the platform config directory.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::global_config_path()
    }

    /// Platform config location, e.g. `~/.config/enigma/config.toml`.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("rs", "enigma", "enigma")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Serialise to the TOML layout `load` reads back.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
