use std::path::PathBuf;
use crate::error::{GobrewError, Result};
use crate::global::config::Config;
use crate::global::utils::default_root;
use crate::installer::{self, InstallOutcome};
use crate::layout::Layout;
use crate::registry::{parse_remote_versions, GitTagSource, TagSource};
use crate::remover;
use crate::resolver;
use crate::switcher::{self, SwitchOutcome};
use crate::transport::{Extractor, Fetcher, HttpFetcher, TarGzExtractor};

/// One entry of [`Gobrew::list_versions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    pub version: String,
    pub current: bool,
}

/// A version manager bound to one install root.
///
/// Construct it once per invocation and call the operations on it. Nothing is
/// cached: every operation reads the filesystem afresh.
pub struct Gobrew {
    layout: Layout,
    config: Config,
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    tags: Box<dyn TagSource>,
}

impl Gobrew {
    /// Uses `$GOBREW_ROOT` or `~/.gobrew`, with `config.toml` from that root.
    pub fn from_env() -> Result<Self> {
        Self::open(default_root()?)
    }

    /// Uses the given root, with `config.toml` from it, and the network collaborators.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        let config = Config::load_from_root(&root)?;
        Ok(Self::with_parts(
            Layout::new(root),
            config,
            Box::new(HttpFetcher::new()?),
            Box::new(TarGzExtractor),
            Box::new(GitTagSource),
        ))
    }

    pub fn with_parts(
        layout: Layout,
        config: Config,
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn Extractor>,
        tags: Box<dyn TagSource>,
    ) -> Self {
        Self {
            layout,
            config,
            fetcher,
            extractor,
            tags,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_version(&self) -> Option<String> {
        resolver::current_version(&self.layout)
    }

    pub fn version_exists(&self, version: &str) -> bool {
        resolver::version_exists(&self.layout, version)
    }

    pub fn install(&self, version: &str) -> Result<InstallOutcome> {
        installer::install(
            &self.layout,
            version,
            &self.config.registry_url,
            self.fetcher.as_ref(),
            self.extractor.as_ref(),
        )
    }

    pub fn use_version(&self, version: &str) -> Result<SwitchOutcome> {
        switcher::use_version(&self.layout, version)
    }

    pub fn uninstall(&self, version: &str) -> Result<()> {
        remover::uninstall(&self.layout, version)
    }

    /// Directories under `versions/`, sorted by name, with the current one flagged.
    ///
    /// A version whose install is in progress (no `go` directory yet) is listed too.
    pub fn list_versions(&self) -> Result<Vec<InstalledVersion>> {
        let versions_dir = self.layout.versions_dir();
        let entries = match std::fs::read_dir(versions_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(GobrewError::io(versions_dir, e)),
        };
        let current = self.current_version();
        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GobrewError::io(versions_dir, e))?;
            let version = entry.file_name().to_string_lossy().to_string();
            versions.push(InstalledVersion {
                current: current.as_deref() == Some(version.as_str()),
                version,
            });
        }
        versions.sort_by(|a, b| a.version.cmp(&b.version));
        Ok(versions)
    }

    /// Versions tagged in the configured repository, in the order it lists them.
    pub fn list_remote_versions(&self) -> Result<Vec<String>> {
        let listing = self.tags.list_tags(&self.config.tags_repo)?;
        parse_remote_versions(&listing)
    }
}
