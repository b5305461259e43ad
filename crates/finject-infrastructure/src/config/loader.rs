//! Configuration loading
//!
//! Layers, later ones winning: built-in defaults, then a `finject.toml`, then `FINJECT_*`
//! environment variables with `__` between nesting levels
//! (`FINJECT_PROCESSOR__MAX_ROUNDS=8`).

use crate::config::{AppConfig, LoggingConfig, OutputConfig, ProcessorConfig};
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use finject_domain::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builds an [`AppConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit file; when unset the first discovered `finject.toml` is used
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching for one
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Prefix of the overriding environment variables, without the trailing `_`
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Merge every layer and validate the result
    ///
    /// An explicit file that does not exist is an error; without one, a missing file just
    /// leaves the defaults in place.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        let config_file = match &self.config_path {
            Some(path) if !path.is_file() => {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.clone()),
            None => discover_config_file(),
        };
        if let Some(path) = config_file {
            log_config_loaded(&path);
            figment = figment.merge(Toml::file(path));
        }

        let config: AppConfig = figment
            .merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"))
            .extract()
            .config_context("Invalid finject configuration")?;
        validate(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
        std::fs::write(path.as_ref(), rendered).io_context(format!(
            "Failed to write configuration to {}",
            path.as_ref().display()
        ))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `./finject.toml`, then `./finject/finject.toml`, then the user config directory
fn discover_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    [
        Some(cwd.join(DEFAULT_CONFIG_FILENAME)),
        Some(cwd.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| candidate.is_file())
}

fn validate(config: &AppConfig) -> Result<()> {
    if config.processor.max_rounds == 0 {
        return Err(Error::config("processor.max_rounds must be at least 1"));
    }
    if config.output.directory.as_os_str().is_empty() {
        return Err(Error::config("output.directory must not be empty"));
    }
    if config.logging.max_files == 0 {
        return Err(Error::config("logging.max_files must be at least 1"));
    }
    parse_log_level(&config.logging.level).map(|_| ())
}

/// Programmatic construction of an [`AppConfig`], starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processor(mut self, processor: ProcessorConfig) -> Self {
        self.config.processor = processor;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.config.output = output;
        self
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
