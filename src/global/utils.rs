use std::path::PathBuf;
use directories::BaseDirs;
use crate::error::{GobrewError, Result};

/// Directory name of the install root inside the home directory.
pub const GOBREW_DIR: &str = ".gobrew";
/// Environment variable overriding the install root.
pub const GOBREW_ROOT_ENV: &str = "GOBREW_ROOT";

/// The install root: `$GOBREW_ROOT` when set, otherwise `<home>/.gobrew`.
pub fn default_root() -> Result<PathBuf> {
    match std::env::var_os(GOBREW_ROOT_ENV) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => Ok(get_home_dir()?.join(GOBREW_DIR)),
    }
}

pub fn get_home_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(GobrewError::NoHomeDir)?;
    Ok(base_dirs.home_dir().to_path_buf())
}
