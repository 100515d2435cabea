use std::path::Path;
use serde::Deserialize;
use crate::error::{GobrewError, Result};
use crate::registry::{DEFAULT_REGISTRY_URL, DEFAULT_TAGS_REPO};

/// File name of the optional config inside the install root.
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `<root>/config.toml`. Every key is optional.
///
/// ```toml
/// registry_url = "https://golang.org/dl/"
/// tags_repo = "https://github.com/golang/go"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL release archives are downloaded from.
    pub registry_url: String,
    /// Repository whose `go*` tags list the remote versions.
    pub tags_repo: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            tags_repo: DEFAULT_TAGS_REPO.to_string(),
        }
    }
}

impl Config {
    /// Loads a config file. A missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(GobrewError::io(path, e)),
        };
        toml::from_str(&content).map_err(|source| GobrewError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `<root>/config.toml`.
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Config> {
        Config::load(root.as_ref().join(CONFIG_FILE))
    }
}
