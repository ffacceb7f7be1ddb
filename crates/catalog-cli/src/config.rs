//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core and adapter crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `CATALOG__` (`CATALOG__STORE__SEED=false`)
//! 3. Config file (`--config`, or the platform default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::ValueEnum;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::global::OutputFormat;

/// Prefix for environment overrides; nested keys are joined with `__`.
pub const ENV_PREFIX: &str = "CATALOG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store settings.
    pub store: StoreConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the sample products into a fresh catalog.
    pub seed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig { seed: true },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
                pretty_json: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default path is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        let cfg = Self::load_from(&path, config_file.is_some())?;
        Ok(cfg)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("store.seed", defaults.store.seed)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .set_default("output.pretty_json", defaults.output.pretty_json)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Configuration has invalid values")?;

        // Surface a bad format at startup rather than on first render.
        cfg.output_format()?;
        Ok(cfg)
    }

    /// The configured output format.
    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        match OutputFormat::from_str(&self.output.format, true) {
            Ok(format) => Ok(format),
            Err(_) => bail!(
                "Unknown output.format '{}' (expected auto, human, plain or json)",
                self.output.format
            ),
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.catalog.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "catalog", "catalog")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".catalog.toml"))
    }
}
