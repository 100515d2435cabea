use log::info;
use crate::error::{GobrewError, Result};
use crate::layout::Layout;
use crate::registry::download_url;
use crate::resolver::{artifact_name, version_exists};
use crate::transport::{Extractor, Fetcher};

/// What `install` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The archive was fetched and extracted into `versions/<version>/go`.
    Installed,
    /// `versions/<version>/go` was already there; nothing was fetched.
    AlreadyInstalled,
}

/// Installs `version` under `layout`, or fails leaving no `versions/<version>`
/// directory and no `downloads/` behind.
///
/// Installing a version that already exists is a cheap no-op.
pub fn install(
    layout: &Layout,
    version: &str,
    registry_url: &str,
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
) -> Result<InstallOutcome> {
    if version.is_empty() {
        return Err(GobrewError::MissingVersion);
    }
    // also creates versions/<version>, which marks the install as in progress
    layout.ensure_skeleton(version)?;
    if version_exists(layout, version) {
        info!("Version: {} exists", version);
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    info!("Downloading version: {}", version);
    let tar_name = artifact_name(version);
    let url = download_url(registry_url, &tar_name);
    let archive = layout.downloads_dir().join(&tar_name);

    if let Err(e) = layout.ensure_downloads_dir() {
        layout.rollback(version);
        return Err(e);
    }

    if let Err(e) = fetcher.fetch(&url, &archive) {
        layout.rollback(version);
        return Err(GobrewError::Download {
            url,
            source: Box::new(e),
        });
    }

    let version_dir = layout.version_dir(version);
    info!("Untar to {}", version_dir.display());
    if let Err(e) = extractor.extract(&archive, &version_dir) {
        layout.rollback(version);
        return Err(GobrewError::Extract {
            url,
            source: Box::new(e),
        });
    }
    if !version_exists(layout, version) {
        layout.rollback(version);
        return Err(GobrewError::Extract {
            url,
            source: Box::new(GobrewError::IncompleteArchive(version.to_string())),
        });
    }

    layout.clean_downloads_dir()?;
    info!("Downloaded version: {}", version);
    Ok(InstallOutcome::Installed)
}
