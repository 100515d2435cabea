use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::{GobrewError, Result};

/// The fixed directory skeleton under an install root:
///
/// ```text
/// <root>/versions/<version>/go/...
/// <root>/current/bin -> versions/<version>/go/bin
/// <root>/current/go  -> versions/<version>/go
/// <root>/downloads/
/// ```
///
/// All paths are derived once from the root; nothing here caches filesystem state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    versions_dir: PathBuf,
    current_dir: PathBuf,
    current_bin: PathBuf,
    current_go: PathBuf,
    downloads_dir: PathBuf,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            versions_dir: root.join("versions"),
            current_dir: root.join("current"),
            current_bin: root.join("current").join("bin"),
            current_go: root.join("current").join("go"),
            downloads_dir: root.join("downloads"),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
    /// The `current/bin` link.
    pub fn current_bin(&self) -> &Path {
        &self.current_bin
    }
    /// The `current/go` link.
    pub fn current_go(&self) -> &Path {
        &self.current_go
    }
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// `versions/<version>`. The version string is used verbatim.
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.versions_dir.join(version)
    }

    /// `versions/<version>/go`, the extracted toolchain tree.
    pub fn version_go_dir(&self, version: &str) -> PathBuf {
        self.version_dir(version).join("go")
    }

    /// `versions/<version>/go/bin`.
    pub fn version_bin_dir(&self, version: &str) -> PathBuf {
        self.version_go_dir(version).join("bin")
    }

    /// Creates the root, `versions/`, `current/` and the directory of the version
    /// about to be installed. Existing directories are left alone.
    ///
    /// `current/bin` and `current/go` are links and only the switcher creates them.
    /// `downloads/` is created by [`Layout::ensure_downloads_dir`] right before a fetch,
    /// so an install that turns out to be a no-op leaves no trace.
    pub fn ensure_skeleton(&self, version: &str) -> Result<()> {
        let version_dir = self.version_dir(version);
        for dir in [&self.root, &self.current_dir, &self.versions_dir, &version_dir] {
            std::fs::create_dir_all(dir).map_err(|e| GobrewError::io(dir, e))?;
        }
        debug!("Skeleton ready under {}", self.root.display());
        Ok(())
    }

    /// Creates `downloads/` if needed.
    pub fn ensure_downloads_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.downloads_dir)
            .map_err(|e| GobrewError::io(&self.downloads_dir, e))
    }

    /// Removes `versions/<version>` and everything below it. A missing directory is fine.
    pub fn clean_version_dir(&self, version: &str) -> Result<()> {
        remove_dir_if_exists(&self.version_dir(version))
    }

    /// Removes the whole `downloads/` directory. A missing directory is fine.
    pub fn clean_downloads_dir(&self) -> Result<()> {
        remove_dir_if_exists(&self.downloads_dir)
    }

    /// Rollback helper: cleanup failures are logged, the original error wins.
    pub(crate) fn rollback(&self, version: &str) {
        if let Err(e) = self.clean_version_dir(version) {
            warn!("Could not remove {}: {}", self.version_dir(version).display(), e);
        }
        if let Err(e) = self.clean_downloads_dir() {
            warn!("Could not remove {}: {}", self.downloads_dir.display(), e);
        }
    }
}

fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GobrewError::io(path, e)),
    }
}
