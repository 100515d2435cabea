use log::info;
use crate::error::{GobrewError, Result};
use crate::layout::Layout;
use crate::resolver::{current_version, version_exists};

/// Deletes `versions/<version>`.
///
/// Refuses the current version (switch away first) and versions that are not installed.
pub fn uninstall(layout: &Layout, version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(GobrewError::MissingVersion);
    }
    if current_version(layout).as_deref() == Some(version) {
        return Err(GobrewError::UninstallCurrent(version.to_string()));
    }
    if !version_exists(layout, version) {
        return Err(GobrewError::NotInstalled(version.to_string()));
    }
    layout.clean_version_dir(version)?;
    info!("Version: {} uninstalled", version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fake_install(layout: &Layout, version: &str) {
        layout.ensure_skeleton(version).unwrap();
        std::fs::create_dir_all(layout.version_bin_dir(version)).unwrap();
    }

    #[test]
    fn test_uninstall_removes_version_tree() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        fake_install(&layout, "1.17");

        uninstall(&layout, "1.17").unwrap();
        assert!(!version_exists(&layout, "1.17"));
        assert!(!layout.version_dir("1.17").exists());
    }

    #[test]
    fn test_uninstall_not_installed_fails() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        // a bare version directory is not an installed version
        layout.ensure_skeleton("1.17").unwrap();

        let err = uninstall(&layout, "1.17").unwrap_err();
        assert!(matches!(err, GobrewError::NotInstalled(ref v) if v == "1.17"));
        assert!(layout.version_dir("1.17").exists());
    }

    #[test]
    fn test_uninstall_empty_version_fails() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        assert!(matches!(uninstall(&layout, ""), Err(GobrewError::MissingVersion)));
    }

    #[cfg(unix)]
    #[test]
    fn test_uninstall_current_fails() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        fake_install(&layout, "1.17");
        crate::switcher::use_version(&layout, "1.17").unwrap();

        let err = uninstall(&layout, "1.17").unwrap_err();
        assert!(matches!(err, GobrewError::UninstallCurrent(ref v) if v == "1.17"));
        assert!(version_exists(&layout, "1.17"));
    }
}
