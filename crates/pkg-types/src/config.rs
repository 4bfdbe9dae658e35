//! Front-end configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PkgError, Result};

/// Environment variable naming an alternate configuration file.
pub const CONFIG_ENV_VAR: &str = "PKG_CONFIG_FILE";

/// Configuration file read when `PKG_CONFIG_FILE` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/pkg.toml";

/// Settings the front end needs before dispatching a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgConfig {
    /// Program used to display command documentation.
    pub manual_viewer: PathBuf,
    /// Manual page name prefix; `help add` opens `<prefix>add`.
    pub manual_prefix: String,
    /// Directory holding the out-of-process subcommands (`pkg-<name>`).
    pub libexec_dir: PathBuf,
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self {
            manual_viewer: PathBuf::from("/usr/bin/man"),
            manual_prefix: "pkg-".to_string(),
            libexec_dir: PathBuf::from("/usr/local/libexec/pkg"),
        }
    }
}

impl PkgConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.manual_prefix.contains('/') {
            return Err(PkgError::Config(format!(
                "manual_prefix must not contain '/': {}",
                config.manual_prefix
            )));
        }
        Ok(config)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Load the configuration named by `PKG_CONFIG_FILE`, or the default file.
    ///
    /// An absent default file is not an error and yields the defaults; a file
    /// named explicitly through the environment must exist.
    pub fn load_default() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            log::debug!("No config at {} -- using defaults", path.display());
            Ok(Self::default())
        }
    }
}
