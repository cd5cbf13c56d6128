//! # healthaid-config
//!
//! Layered settings for the HealthAid shell, merged with figment. Later
//! layers win:
//!
//! - built-in defaults
//! - `~/.config/healthaid/config.toml`
//! - `.healthaid/config.toml` in the working directory
//! - `HEALTHAID_*` pairs from a `.env` file, when loaded through
//!   [`HealthaidConfig::load_with_dotenv`]
//! - `HEALTHAID_*` environment variables, `__` separating section and key
//!
//! `HEALTHAID_SESSION__USER_TYPE=admin` sets `session.user_type`;
//! `HEALTHAID_SHELL__VIEWPORT_WIDTH=390` sets `shell.viewport_width`.
//!
//! ```no_run
//! use healthaid_config::HealthaidConfig;
//!
//! let config = HealthaidConfig::load_with_dotenv().expect("config");
//! println!("starting as {}", config.session.identity());
//! ```

mod error;
mod general;
mod session;
mod shell;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use shell::ShellConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "HEALTHAID_";

/// Project-local override file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".healthaid/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthaidConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HealthaidConfig {
    /// Merge every layer and validate the result.
    ///
    /// # Errors
    ///
    /// `ConfigError::Figment` when a layer fails to parse or a value has the
    /// wrong type; `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Like [`Self::load`], with `HEALTHAID_*` pairs from a `.env` file layered
    /// just below the real environment.
    ///
    /// The file is taken from the working directory, or else from the nearest
    /// ancestor that has a `.healthaid/` directory. A missing file is not an
    /// error. The process environment is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`], plus `ConfigError::Dotenv` for an unreadable `.env`.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let pairs = match std::env::current_dir().ok().and_then(|cwd| find_dotenv(&cwd)) {
            Some(path) => read_dotenv(path)?,
            None => Vec::new(),
        };
        Self::from_figment(&Self::layered(&pairs))
    }

    /// Like [`Self::load`], with `HEALTHAID_*` pairs layered above the real environment.
    ///
    /// Used for values that come from somewhere other than the process
    /// environment. Keys without the prefix are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        Self::from_figment(&merge_env_pairs(Self::figment(), overrides))
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.shell.validate()?;
        Ok(config)
    }

    /// The layered provider chain, exposed so tests can merge extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(&[])
    }

    fn layered(dotenv: &[(String, String)]) -> Figment {
        let files = [user_config_path(), Some(PathBuf::from(PROJECT_CONFIG))];

        let figment = files
            .into_iter()
            .flatten()
            .filter(|path| path.is_file())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            );
        merge_env_pairs(figment, dotenv).merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

/// Merge `HEALTHAID_*` pairs as if they came from the environment.
fn merge_env_pairs(figment: Figment, pairs: &[(String, String)]) -> Figment {
    pairs
        .iter()
        .filter_map(|(key, value)| Some((env_key_to_path(key)?, value)))
        .fold(figment, |figment, (path, value)| {
            let value: Value = value.parse().unwrap_or_else(|never| match never {});
            figment.merge((path, value))
        })
}

fn read_dotenv(path: PathBuf) -> Result<Vec<(String, String)>, ConfigError> {
    dotenvy::from_path_iter(&path)
        .and_then(|lines| lines.collect())
        .map_err(|source| ConfigError::Dotenv { path, source })
}

/// `HEALTHAID_SHELL__VIEWPORT_WIDTH` -> `shell.viewport_width`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}

fn find_dotenv(start: &Path) -> Option<PathBuf> {
    let local = start.join(".env");
    if local.is_file() {
        return Some(local);
    }
    start
        .ancestors()
        .find(|dir| dir.join(".healthaid").is_dir())
        .map(|root| root.join(".env"))
        .filter(|path| path.is_file())
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("healthaid").join("config.toml"))
}
