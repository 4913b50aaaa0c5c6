//! # rep-config
//!
//! Layered configuration loading for repseed using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REPSEED_*` prefix, `__` as separator)
//! 2. Project-level `.repseed/config.toml`
//! 3. User-level `~/.config/repseed/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `REPSEED_OUTPUT__DIR` -> `output.dir`,
//! `REPSEED_RESOLVER__PARALLEL` -> `resolver.parallel`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rep_config::RepSeedConfig;
//!
//! let config = RepSeedConfig::load_with_dotenv().expect("config");
//! println!("writing to {}", config.output.dir.display());
//! ```

mod error;
mod output;
mod resolver;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use resolver::ResolverConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "REPSEED_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepSeedConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl RepSeedConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after pulling `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".repseed/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repseed").join("config.toml"))
    }
}
