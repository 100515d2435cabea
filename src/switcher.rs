use std::path::Path;
use log::{debug, info};
use crate::error::{GobrewError, Result};
use crate::layout::Layout;
use crate::resolver::{current_go_version, current_version, version_exists};

/// What `use_version` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    /// The version was already current; no link was touched.
    AlreadyCurrent,
}

/// Makes an installed `version` the current one by repointing `current/bin`
/// and `current/go`.
///
/// Both link targets are computed from `version` up front. The two
/// replacements are not one atomic operation: if the second one fails the
/// links point at different versions until the switch is retried, and a retry
/// repairs them.
pub fn use_version(layout: &Layout, version: &str) -> Result<SwitchOutcome> {
    switch_links(layout, version, create_link)
}

fn switch_links<F>(layout: &Layout, version: &str, create: F) -> Result<SwitchOutcome>
where
    F: Fn(&Path, &Path) -> std::io::Result<()>,
{
    if version.is_empty() {
        return Err(GobrewError::MissingVersion);
    }
    if links_agree_on(layout, version) {
        info!("Version: {} is already your current version", version);
        return Ok(SwitchOutcome::AlreadyCurrent);
    }
    if !version_exists(layout, version) {
        return Err(GobrewError::NotInstalled(version.to_string()));
    }

    info!("Changing go version to: {}", version);
    std::fs::create_dir_all(layout.current_dir())
        .map_err(|e| GobrewError::io(layout.current_dir(), e))?;
    replace_link(&layout.version_bin_dir(version), layout.current_bin(), &create)?;
    replace_link(&layout.version_go_dir(version), layout.current_go(), &create)?;

    if !links_agree_on(layout, version) {
        return Err(GobrewError::InconsistentLinks {
            expected: version.to_string(),
            bin: current_version(layout),
            go: current_go_version(layout),
        });
    }
    info!("Changed go version to: {}", version);
    Ok(SwitchOutcome::Switched)
}

/// Both `current/bin` and `current/go` resolve into `versions/<version>`.
fn links_agree_on(layout: &Layout, version: &str) -> bool {
    current_version(layout).as_deref() == Some(version)
        && current_go_version(layout).as_deref() == Some(version)
}

/// Removes whatever sits at `link` (link, file or directory), then links it to `target`.
fn replace_link<F>(target: &Path, link: &Path, create: &F) -> Result<()>
where
    F: Fn(&Path, &Path) -> std::io::Result<()>,
{
    match std::fs::symlink_metadata(link) {
        Ok(meta) if meta.is_dir() => {
            std::fs::remove_dir_all(link).map_err(|e| GobrewError::io(link, e))?;
        }
        Ok(_) => remove_link(link)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(GobrewError::io(link, e)),
    }
    debug!("{} -> {}", link.display(), target.display());
    create(target, link).map_err(|source| GobrewError::Link {
        path: link.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn remove_link(link: &Path) -> Result<()> {
    std::fs::remove_file(link).map_err(|e| GobrewError::io(link, e))
}

#[cfg(windows)]
fn remove_link(link: &Path) -> Result<()> {
    // directory symlinks on Windows are removed like directories
    std::fs::remove_dir(link)
        .or_else(|_| std::fs::remove_file(link))
        .map_err(|e| GobrewError::io(link, e))
}

#[cfg(unix)]
fn create_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
